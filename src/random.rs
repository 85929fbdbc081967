//! Random source module
//!
//! Session identifiers draw from an injected byte source so tests can swap in
//! deterministic or failing generators. Implementations must be safe to share
//! across connection tasks.

use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;

/// The random source could not produce bytes
#[derive(Debug, Error)]
#[error("random source unavailable: {0}")]
pub struct RandomError(String);

impl RandomError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Fallible source of cryptographically secure bytes
pub trait RandomSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomError>;
}

/// Operating system generator
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| RandomError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_draws_differ() {
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        OsRandom.fill(&mut first).unwrap();
        OsRandom.fill(&mut second).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_error_message() {
        let err = RandomError::new("entropy pool closed");
        assert_eq!(err.to_string(), "random source unavailable: entropy pool closed");
    }
}
