//! Process environment adapter.

use std::collections::HashMap;

use resgen_core::application::ports::EnvironmentProvider;
use tracing::{debug, warn};

/// Reads the real process environment.
///
/// Each call takes a fresh snapshot; the generate service calls it once per
/// run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentProvider for ProcessEnvironment {
    fn variables(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    vars.insert(key, value);
                }
                (Ok(key), Err(_)) => {
                    warn!(key = %key, "Skipping environment variable with non-UTF-8 value");
                }
                (Err(key), _) => {
                    warn!(key = ?key, "Skipping environment variable with non-UTF-8 name");
                }
            }
        }
        debug!(count = vars.len(), "Environment snapshot taken");
        vars
    }
}
