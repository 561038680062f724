//! Builder class, constructor and property synthesis.

use crate::declarations::{
    ClassDecl, ConstructorDecl, PropertyDecl, StorageField, Visibility,
};
use brickforge_schema::{CallableId, ClassId, NamedType, TypeSchema};

/// Synthesizes the builder class for a resolved schema: public, final, no
/// supertype beyond the universal root, one private mutable storage field
/// per schema field. Every storage field is widened to nullable so the null
/// sentinel can encode "not yet set".
#[must_use]
pub fn builder_class(schema: &TypeSchema, builder_id: ClassId) -> ClassDecl {
    let fields = schema
        .fields
        .iter()
        .map(|field| StorageField {
            name: field.name.clone(),
            ty: field.ty.as_nullable(),
            visibility: Visibility::Private,
        })
        .collect();

    ClassDecl {
        id: builder_id,
        visibility: Visibility::Public,
        is_final: true,
        fields,
    }
}

/// Synthesizes the builder's public zero-parameter constructor. Storage
/// initialization is implicit: every field starts at the null sentinel.
#[must_use]
pub fn builder_constructor(builder_id: ClassId) -> ConstructorDecl {
    ConstructorDecl {
        owner: builder_id.clone(),
        visibility: Visibility::Public,
        return_type: NamedType::new(builder_id),
    }
}

/// Synthesizes the mutable property exposed on the builder for one schema
/// field: original (non-widened) type, no backing storage of its own.
/// Returns `None` when the requested name matches no schema field.
#[must_use]
pub fn builder_property(schema: &TypeSchema, id: CallableId) -> Option<PropertyDecl> {
    let field = schema.field(&id.name)?;
    Some(PropertyDecl {
        id,
        ty: field.ty.clone(),
        mutable: true,
        has_backing_field: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickforge_schema::naming::builder_class_id;
    use brickforge_schema::{ClassId, Field, FqName, Name};

    fn class(name: &str) -> ClassId {
        ClassId::top_level(FqName::new("test"), Name::new(name))
    }

    fn person_schema() -> TypeSchema {
        TypeSchema {
            owner: class("Person"),
            fields: vec![
                Field {
                    name: Name::new("name"),
                    ty: NamedType::new(class("String")),
                },
                Field {
                    name: Name::new("nickname"),
                    ty: NamedType::nullable_of(class("String")),
                },
            ],
        }
    }

    #[test]
    fn test_builder_class_widens_every_field() {
        let schema = person_schema();
        let decl = builder_class(&schema, builder_class_id(&schema.owner));

        assert_eq!(decl.visibility, Visibility::Public);
        assert!(decl.is_final);
        assert_eq!(decl.fields.len(), 2);
        for field in &decl.fields {
            assert!(field.ty.is_nullable());
            assert_eq!(field.visibility, Visibility::Private);
        }
    }

    #[test]
    fn test_builder_class_preserves_field_order() {
        let schema = person_schema();
        let decl = builder_class(&schema, builder_class_id(&schema.owner));
        let names: Vec<_> = decl.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "nickname"]);
    }

    #[test]
    fn test_builder_constructor_returns_builder_type() {
        let builder_id = builder_class_id(&class("Person"));
        let decl = builder_constructor(builder_id.clone());

        assert_eq!(decl.owner, builder_id);
        assert_eq!(decl.return_type, NamedType::new(builder_id));
        assert_eq!(decl.visibility, Visibility::Public);
    }

    #[test]
    fn test_builder_property_keeps_original_type() {
        let schema = person_schema();
        let builder_id = builder_class_id(&schema.owner);

        let name = builder_property(&schema, builder_id.callable(Name::new("name"))).unwrap();
        assert!(!name.ty.is_nullable());
        assert!(name.mutable);
        assert!(!name.has_backing_field);

        let nickname =
            builder_property(&schema, builder_id.callable(Name::new("nickname"))).unwrap();
        assert!(nickname.ty.is_nullable());
    }

    #[test]
    fn test_builder_property_unknown_field() {
        let schema = person_schema();
        let builder_id = builder_class_id(&schema.owner);
        assert!(builder_property(&schema, builder_id.callable(Name::new("missing"))).is_none());
    }
}
