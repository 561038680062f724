//! Plugin-option configuration.
//!
//! The engine recognizes exactly one option, `enableJavaSetters`, supplied
//! once per compilation unit before any query is answered.

use crate::error::OptionsError;

/// Recognized option key for Java-setter generation.
pub const ENABLE_JAVA_SETTERS_OPTION: &str = "enableJavaSetters";

/// Engine configuration, fixed for the engine's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Generate `setX` mutator functions instead of bare fluent-name
    /// functions.
    pub enable_java_setters: bool,
}

impl SynthesisOptions {
    /// Creates the default configuration (Java setters disabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one key/value option pair.
    ///
    /// # Errors
    /// Returns `OptionsError` for unrecognized keys or non-boolean values.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), OptionsError> {
        match key {
            ENABLE_JAVA_SETTERS_OPTION => {
                self.enable_java_setters = value
                    .parse::<bool>()
                    .map_err(|_| OptionsError::invalid(key, value))?;
                Ok(())
            }
            _ => Err(OptionsError::unknown(key)),
        }
    }
}
