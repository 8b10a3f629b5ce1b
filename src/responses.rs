use crate::constants::DEFAULT_RESPONSES;
use crate::errors::{BuddyError, BuddyResult};
use rand::Rng;

/// Fixed set of canned mentor replies. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePool {
    replies: Vec<String>,
}

impl ResponsePool {
    pub fn new<I, S>(replies: I) -> BuddyResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replies: Vec<String> = replies.into_iter().map(Into::into).collect();
        if replies.is_empty() || replies.iter().any(|r| r.trim().is_empty()) {
            return Err(BuddyError::EmptyResponsePool);
        }
        Ok(Self { replies })
    }

    /// Picks one reply uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        let idx = rng.random_range(0..self.replies.len());
        &self.replies[idx]
    }

    pub fn contains(&self, reply: &str) -> bool {
        self.replies.iter().any(|r| r == reply)
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.replies.iter().map(String::as_str)
    }
}

impl Default for ResponsePool {
    fn default() -> Self {
        Self {
            replies: DEFAULT_RESPONSES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_rejects_empty_pool() {
        assert!(matches!(
            ResponsePool::new(Vec::<String>::new()),
            Err(BuddyError::EmptyResponsePool)
        ));
        assert!(ResponsePool::new(["fine", " "]).is_err());
    }

    #[test]
    fn test_choose_returns_member() {
        let pool = ResponsePool::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(pool.contains(pool.choose(&mut rng)));
        }
    }

    #[test]
    fn test_choose_covers_whole_pool() {
        let pool = ResponsePool::new(["a", "b", "c"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<&str> = (0..200).map(|_| pool.choose(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let pool = ResponsePool::default();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(pool.choose(&mut a), pool.choose(&mut b));
        }
    }

    #[test]
    fn test_single_reply_pool_is_deterministic() {
        let pool = ResponsePool::new(["only"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pool.choose(&mut rng), "only");
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["only"]);
    }
}
