//! Error types for index validation.

use thiserror::Error;

/// Error type for symbol-index validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Duplicate field name in a primary constructor.
    #[error("duplicate field '{name}' in primary constructor of '{owner}'")]
    DuplicateField {
        /// Owner class.
        owner: String,
        /// Duplicated field name.
        name: String,
    },

    /// A user-declared nested type occupies a name the engine would
    /// synthesize.
    #[error("'{owner}' already declares a nested type named '{name}'")]
    NestedClassCollision {
        /// Owner class.
        owner: String,
        /// Conflicting nested type name.
        name: String,
    },

    /// A user-declared member occupies a callable name the engine would
    /// synthesize.
    #[error("'{owner}' already declares a member named '{name}'")]
    MemberCollision {
        /// Owner class.
        owner: String,
        /// Conflicting member name.
        name: String,
    },

    /// Two fields map to the same Java-setter name.
    #[error("fields '{first}' and '{second}' of '{owner}' map to the same setter name '{setter}'")]
    SetterNameCollision {
        /// Owner class.
        owner: String,
        /// First colliding field.
        first: String,
        /// Second colliding field.
        second: String,
        /// The shared setter name.
        setter: String,
    },
}

impl SchemaError {
    /// Creates a duplicate field error.
    pub fn duplicate_field(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateField {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Creates a nested-class collision error.
    pub fn nested_collision(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NestedClassCollision {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Creates a member collision error.
    pub fn member_collision(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MemberCollision {
            owner: owner.into(),
            name: name.into(),
        }
    }
}
