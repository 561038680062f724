//! The synthesized declaration model.
//!
//! Every engine answer is a [`GeneratedSymbol`]: a class, constructor,
//! function or property with fully resolved types, fixed visibility and
//! fixed finality. Symbols are produced fresh per query and handed to the
//! host, which owns their lifetime within the compilation.

use crate::contract::CallableContract;
use brickforge_schema::{CallableId, ClassId, Name, NamedType, TypeRef};
use std::fmt;

/// Declaration visibility. Everything synthesized is public except builder
/// storage fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Visible to all callers.
    Public,
    /// Visible inside the declaring class only.
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Private => f.write_str("private"),
        }
    }
}

/// How a synthesized function binds to its owning namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Bound to an instance of the owning class.
    Instance(ClassId),
    /// Bound to the static/companion namespace of the owning class.
    Static(ClassId),
}

impl Dispatch {
    /// Returns the class the function is declared on.
    #[must_use]
    pub fn owner(&self) -> &ClassId {
        match self {
            Self::Instance(id) | Self::Static(id) => id,
        }
    }
}

/// A private storage field of the synthesized builder class.
///
/// Storage is always mutable and nullable-widened regardless of the source
/// field's declared nullability: the null sentinel encodes "not yet set",
/// which must stay distinguishable from "set to a zero value". Fields start
/// at the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageField {
    /// Field name, identical to the schema field name.
    pub name: Name,
    /// Nullable-widened storage type.
    pub ty: NamedType,
    /// Always private.
    pub visibility: Visibility,
}

/// A synthesized class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Class identifier.
    pub id: ClassId,
    /// Always public.
    pub visibility: Visibility,
    /// Always final.
    pub is_final: bool,
    /// One storage field per schema field, in schema order.
    pub fields: Vec<StorageField>,
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.visibility)?;
        if self.is_final {
            f.write_str("final ")?;
        }
        write!(f, "class {}", self.id)
    }
}

/// A synthesized constructor declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    /// The constructed class.
    pub owner: ClassId,
    /// Always public.
    pub visibility: Visibility,
    /// The constructed type.
    pub return_type: NamedType,
}

impl fmt::Display for ConstructorDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} constructor {}(): {}", self.visibility, self.owner, self.return_type)
    }
}

/// A parameter of a synthesized function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    /// Parameter name.
    pub name: Name,
    /// Parameter type.
    pub ty: TypeRef,
}

impl ParamDecl {
    /// Creates a parameter declaration.
    #[must_use]
    pub fn new(name: Name, ty: TypeRef) -> Self {
        Self { name, ty }
    }
}

/// A synthesized function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Callable identifier.
    pub id: CallableId,
    /// Always public.
    pub visibility: Visibility,
    /// Always final.
    pub is_final: bool,
    /// True for the two lambda-accepting functions, which the host may
    /// inline.
    pub is_inline: bool,
    /// Instance or static binding.
    pub dispatch: Dispatch,
    /// Parameters in declaration order.
    pub params: Vec<ParamDecl>,
    /// Return type.
    pub return_type: NamedType,
    /// Single-invocation contract, present only on the lambda-accepting
    /// functions.
    pub contract: Option<CallableContract>,
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.visibility)?;
        if self.is_final {
            f.write_str("final ")?;
        }
        if self.is_inline {
            f.write_str("inline ")?;
        }
        write!(f, "fun {}(", self.id)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", param.name, param.ty)?;
        }
        write!(f, "): {}", self.return_type)
    }
}

/// A synthesized mutable property on the builder.
///
/// The property shares the schema field's original, non-widened type and has
/// no backing storage of its own: it is a view onto the builder's private
/// widened storage field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    /// Callable identifier.
    pub id: CallableId,
    /// Original (non-widened) field type.
    pub ty: NamedType,
    /// Always mutable.
    pub mutable: bool,
    /// Always false: the view has no storage of its own.
    pub has_backing_field: bool,
}

impl fmt::Display for PropertyDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.mutable { "var" } else { "val" };
        write!(f, "public {} {}: {}", kind, self.id, self.ty)
    }
}

/// The engine's output unit: one synthesized declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedSymbol {
    /// A synthesized class.
    Class(ClassDecl),
    /// A synthesized constructor.
    Constructor(ConstructorDecl),
    /// A synthesized function.
    Function(FunctionDecl),
    /// A synthesized property.
    Property(PropertyDecl),
}

impl GeneratedSymbol {
    /// Returns the short name of the synthesized declaration.
    #[must_use]
    pub fn name(&self) -> Name {
        match self {
            Self::Class(decl) => decl.id.short_name().clone(),
            Self::Constructor(_) => Name::init(),
            Self::Function(decl) => decl.id.name.clone(),
            Self::Property(decl) => decl.id.name.clone(),
        }
    }
}

impl fmt::Display for GeneratedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(decl) => write!(f, "{decl}"),
            Self::Constructor(decl) => write!(f, "{decl}"),
            Self::Function(decl) => write!(f, "{decl}"),
            Self::Property(decl) => write!(f, "{decl}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickforge_schema::FqName;

    fn class(name: &str) -> ClassId {
        ClassId::top_level(FqName::new("test"), Name::new(name))
    }

    #[test]
    fn test_class_decl_display() {
        let decl = ClassDecl {
            id: class("Person").nested(Name::new("Builder")),
            visibility: Visibility::Public,
            is_final: true,
            fields: Vec::new(),
        };
        assert_eq!(decl.to_string(), "public final class test.Person.Builder");
    }

    #[test]
    fn test_function_decl_display() {
        let builder = class("Person").nested(Name::new("Builder"));
        let decl = FunctionDecl {
            id: builder.callable(Name::new("age")),
            visibility: Visibility::Public,
            is_final: true,
            is_inline: false,
            dispatch: Dispatch::Instance(builder.clone()),
            params: vec![ParamDecl::new(
                Name::new("age"),
                TypeRef::Named(NamedType::new(class("Int"))),
            )],
            return_type: NamedType::new(builder),
            contract: None,
        };
        assert_eq!(
            decl.to_string(),
            "public final fun test.Person.Builder.age(age: test.Int): test.Person.Builder"
        );
    }

    #[test]
    fn test_property_decl_display() {
        let builder = class("Person").nested(Name::new("Builder"));
        let decl = PropertyDecl {
            id: builder.callable(Name::new("age")),
            ty: NamedType::new(class("Int")),
            mutable: true,
            has_backing_field: false,
        };
        assert_eq!(decl.to_string(), "public var test.Person.Builder.age: test.Int");
    }

    #[test]
    fn test_generated_symbol_name() {
        let ctor = GeneratedSymbol::Constructor(ConstructorDecl {
            owner: class("Person"),
            visibility: Visibility::Public,
            return_type: NamedType::new(class("Person")),
        });
        assert!(ctor.name().is_init());
    }
}
