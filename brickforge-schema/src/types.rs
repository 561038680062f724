//! Type references and host-supplied type definitions.
//!
//! The host hands the engine one [`TypeDef`] per user-declared class. A
//! `TypeDef` carries exactly what synthesis needs: the marker-annotation
//! flag, the primary constructor's ordered parameter list, and the
//! user-declared names consumed by collision validation.

use crate::ident::{ClassId, Name};
use std::fmt;

/// A nominal type reference with nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedType {
    /// The referenced class.
    pub id: ClassId,
    /// Whether the reference admits the null sentinel.
    pub nullable: bool,
}

impl NamedType {
    /// Creates a non-nullable reference.
    #[must_use]
    pub fn new(id: ClassId) -> Self {
        Self {
            id,
            nullable: false,
        }
    }

    /// Creates a nullable reference.
    #[must_use]
    pub fn nullable_of(id: ClassId) -> Self {
        Self { id, nullable: true }
    }

    /// Widens this reference to nullable. Identity on already-nullable
    /// references.
    #[must_use]
    pub fn as_nullable(&self) -> Self {
        Self {
            id: self.id.clone(),
            nullable: true,
        }
    }

    /// Returns true if the reference admits the null sentinel.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// A single-argument callback over a receiver type, returning nothing. Used
/// only by the two lambda-accepting functions (`copy` and the companion DSL
/// entry).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallbackType {
    /// The type the callback receives.
    pub receiver: NamedType,
}

impl CallbackType {
    /// Creates a callback type over the given receiver.
    #[must_use]
    pub fn new(receiver: NamedType) -> Self {
        Self { receiver }
    }
}

impl fmt::Display for CallbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) -> ()", self.receiver)
    }
}

/// A type reference as it appears in a synthesized signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A nominal class reference.
    Named(NamedType),
    /// A single-use callback.
    Callback(CallbackType),
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(ty) => write!(f, "{ty}"),
            Self::Callback(ty) => write!(f, "{ty}"),
        }
    }
}

/// A primary-constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
    /// Parameter name.
    pub name: Name,
    /// Declared parameter type.
    pub ty: NamedType,
}

impl ParamDef {
    /// Creates a parameter definition.
    #[must_use]
    pub fn new(name: Name, ty: NamedType) -> Self {
        Self { name, ty }
    }
}

/// A primary constructor: an ordered parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CtorDef {
    /// Parameters in declaration order.
    pub params: Vec<ParamDef>,
}

impl CtorDef {
    /// Creates an empty primary constructor.
    #[must_use]
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Adds a parameter.
    pub fn add_param(&mut self, param: ParamDef) {
        self.params.push(param);
    }
}

/// A user-declared class as supplied by the host.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// Class identifier.
    pub id: ClassId,
    /// Whether the class carries the builder marker annotation.
    pub buildable: bool,
    /// The primary constructor, if the class declares one.
    pub primary_ctor: Option<CtorDef>,
    /// User-declared nested classifier names.
    pub nested_classifiers: Vec<Name>,
    /// User-declared callable member names.
    pub members: Vec<Name>,
    /// Whether the class declares a companion namespace.
    pub has_companion: bool,
}

impl TypeDef {
    /// Creates a type definition with no constructor, members or marker.
    #[must_use]
    pub fn new(id: ClassId) -> Self {
        Self {
            id,
            buildable: false,
            primary_ctor: None,
            nested_classifiers: Vec::new(),
            members: Vec::new(),
            has_companion: false,
        }
    }

    /// Marks the class as carrying the builder marker annotation.
    pub fn mark_buildable(&mut self) {
        self.buildable = true;
    }

    /// Sets the primary constructor.
    pub fn set_primary_constructor(&mut self, ctor: CtorDef) {
        self.primary_ctor = Some(ctor);
    }

    /// Records a user-declared nested classifier name.
    pub fn add_nested_classifier(&mut self, name: Name) {
        self.nested_classifiers.push(name);
    }

    /// Records a user-declared callable member name.
    pub fn add_member(&mut self, name: Name) {
        self.members.push(name);
    }

    /// Records whether the class declares a companion namespace.
    pub fn set_has_companion(&mut self, has_companion: bool) {
        self.has_companion = has_companion;
    }

    /// Returns the primary-constructor parameters, empty when the class
    /// declares no primary constructor.
    #[must_use]
    pub fn params(&self) -> &[ParamDef] {
        self.primary_ctor
            .as_ref()
            .map_or(&[], |ctor| ctor.params.as_slice())
    }
}
