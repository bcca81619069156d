//! Environment variable access.
//!
//! Configuration is resolved through the [`Environment`] trait rather than
//! `std::env` directly, so a fake environment can be supplied in tests.

use std::collections::HashMap;

/// Read-only access to environment variables.
pub trait Environment {
    /// Returns the value of `key`, or `None` if it is unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
