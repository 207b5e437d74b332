use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::{Builder, Uuid};

/// Unique identifier for a generated problem instance.
///
/// Backed by a version-4 UUID. The random bytes are drawn from the caller's
/// random source so seeded sessions produce reproducible ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProblemId(Uuid);

impl ProblemId {
    /// Creates a `ProblemId` from an existing UUID.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Draws a fresh v4 identifier from `rng`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.random();
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Debug for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProblemId({})", self.0)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an ID from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ProblemId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(ProblemId::new).map_err(|_| ParseIdError {
            kind: "ProblemId".to_string(),
        })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_ids_are_version_4() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = ProblemId::random(&mut rng);
        assert_eq!(id.value().get_version_num(), 4);
    }

    #[test]
    fn seeded_rng_reproduces_ids() {
        let a = ProblemId::random(&mut StdRng::seed_from_u64(42));
        let b = ProblemId::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_ids_differ() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = ProblemId::random(&mut rng);
        let b = ProblemId::random(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_problem_id_from_str() {
        let id = ProblemId::random(&mut StdRng::seed_from_u64(3));
        let parsed: ProblemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_problem_id_from_str_invalid() {
        let result = "not-a-uuid".parse::<ProblemId>();
        assert!(result.is_err());
    }
}
