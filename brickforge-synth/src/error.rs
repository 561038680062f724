//! Error types for synthesis configuration and builder evaluation.

use thiserror::Error;

/// Error type for engine configuration.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Index validation error.
    #[error("schema error: {0}")]
    Schema(#[from] brickforge_schema::SchemaError),

    /// Plugin option error.
    #[error("option error: {0}")]
    Options(#[from] OptionsError),
}

/// Error type for plugin-option processing.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Unrecognized option key.
    #[error("unexpected config option '{key}'")]
    UnknownOption {
        /// The unrecognized key.
        key: String,
    },

    /// Option value failed to parse.
    #[error("invalid value '{value}' for option '{key}'")]
    InvalidValue {
        /// Option key.
        key: String,
        /// Rejected value.
        value: String,
    },
}

impl OptionsError {
    /// Creates an unknown-option error.
    pub fn unknown(key: impl Into<String>) -> Self {
        Self::UnknownOption { key: key.into() }
    }

    /// Creates an invalid-value error.
    pub fn invalid(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Error type for builder evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A non-nullable field was never set before `build`.
    #[error("field '{field}' of '{owner}' is not nullable and was never set")]
    UnsetField {
        /// Owner class.
        owner: String,
        /// Unset field name.
        field: String,
    },

    /// A mutator addressed a field outside the schema.
    #[error("'{owner}' has no field named '{field}'")]
    UnknownField {
        /// Owner class.
        owner: String,
        /// Unknown field name.
        field: String,
    },
}

impl EvalError {
    /// Creates an unset-field error.
    pub fn unset(owner: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnsetField {
            owner: owner.into(),
            field: field.into(),
        }
    }

    /// Creates an unknown-field error.
    pub fn unknown_field(owner: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            owner: owner.into(),
            field: field.into(),
        }
    }
}
