// src/dashboard.rs

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupMatch {
    pub title: &'static str,
    pub category: &'static str,
    pub confidence: u16,
    pub risk: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Competitor {
    pub name: &'static str,
    pub level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaReport {
    pub role: &'static str,
    pub personality: &'static str,
    pub skills: &'static [&'static str],
    pub strength: &'static str,
    pub weakness: &'static str,
}

pub const FOUNDER_NAME: &str = "Ashmita";
pub const BUDGET_INR: u64 = 50_000;

pub const SUMMARY_CARDS: [SummaryCard; 4] = [
    SummaryCard {
        icon: "₹",
        title: "Budget",
        value: "₹50,000",
    },
    SummaryCard {
        icon: "⚠",
        title: "Risk Profile",
        value: "Medium Risk",
    },
    SummaryCard {
        icon: "🎓",
        title: "Experience Level",
        value: "Beginner",
    },
    SummaryCard {
        icon: "💡",
        title: "Recommended Category",
        value: "SaaS",
    },
];

pub const STARTUP_MATCHES: [StartupMatch; 3] = [
    StartupMatch {
        title: "AI Resume Builder",
        category: "SaaS",
        confidence: 87,
        risk: Level::Medium,
    },
    StartupMatch {
        title: "E-Learning Platform",
        category: "EdTech",
        confidence: 92,
        risk: Level::Low,
    },
    StartupMatch {
        title: "Crypto Trading Bot",
        category: "FinTech",
        confidence: 74,
        risk: Level::High,
    },
];

pub const ANALYZED_IDEA: &str = "AI Resume Builder";
pub const MARKET_SATURATION: u16 = 65;

pub const COMPETITORS: [Competitor; 3] = [
    Competitor {
        name: "Resume.io",
        level: Level::High,
    },
    Competitor {
        name: "Zety",
        level: Level::Medium,
    },
    Competitor {
        name: "Canva Resume",
        level: Level::Medium,
    },
];

pub const PERSONA: PersonaReport = PersonaReport {
    role: "Technical Co-Founder",
    personality: "Analytical, Problem Solver",
    skills: &["React", "Backend Development", "System Design", "DevOps"],
    strength: "Execution focused",
    weakness: "Needs business guidance",
};

/// Months of runway for a fixed budget at an adjustable monthly burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunwayCalculator {
    pub budget: u64,
    pub monthly_burn: u64,
    pub step: u64,
}

impl RunwayCalculator {
    pub fn new(budget: u64, monthly_burn: u64) -> Self {
        Self {
            budget,
            monthly_burn,
            step: 1_000,
        }
    }

    pub fn increase_burn(&mut self) {
        self.monthly_burn = self.monthly_burn.saturating_add(self.step);
    }

    /// Burn never drops below one step.
    pub fn decrease_burn(&mut self) {
        self.monthly_burn = self.monthly_burn.saturating_sub(self.step).max(self.step);
    }

    pub fn months(&self) -> f64 {
        if self.monthly_burn == 0 {
            return f64::INFINITY;
        }
        self.budget as f64 / self.monthly_burn as f64
    }

    pub fn health(&self) -> Level {
        match self.months() {
            m if m >= 12.0 => Level::Low,
            m if m >= 6.0 => Level::Medium,
            _ => Level::High,
        }
    }
}

impl Default for RunwayCalculator {
    fn default() -> Self {
        Self::new(BUDGET_INR, 5_000)
    }
}

/// Formats an amount with Indian digit grouping, e.g. `₹1,25,000`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}
