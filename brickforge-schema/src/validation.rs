//! Symbol-index validation.
//!
//! Synthesized identifiers are derived by a total function with no collision
//! detection of its own, so a user declaration occupying one of those names
//! would otherwise be silently shadowed. Validation makes every such
//! conflict an explicit, reported error before any query is answered.

use crate::error::SchemaError;
use crate::ident::Name;
use crate::index::SymbolIndex;
use crate::naming::{
    BUILDER_CLASS_NAME, COPY_FUN_NAME, NEW_BUILDER_FUN_NAME, to_java_setter,
};
use crate::types::TypeDef;
use std::collections::HashMap;

/// Validates the index against the names synthesis would claim.
///
/// `enable_java_setters` must match the mode the engine will run with, since
/// the set of synthesized member names depends on it.
///
/// # Errors
/// Returns the first conflict found as a `SchemaError`.
pub fn validate_index(index: &SymbolIndex, enable_java_setters: bool) -> Result<(), SchemaError> {
    for owner in index.buildable_ids() {
        let Some(def) = index.get(owner) else {
            continue;
        };
        validate_fields(def)?;
        validate_nested(def)?;
        validate_members(def)?;
        if enable_java_setters {
            validate_setter_names(def)?;
        }
    }
    Ok(())
}

/// Checks for duplicate field names in the primary constructor.
fn validate_fields(def: &TypeDef) -> Result<(), SchemaError> {
    let mut seen: Vec<&Name> = Vec::new();
    for param in def.params() {
        if seen.contains(&&param.name) {
            return Err(SchemaError::duplicate_field(
                def.id.to_string(),
                param.name.as_str(),
            ));
        }
        seen.push(&param.name);
    }
    Ok(())
}

/// Checks that no user-declared nested type claims the builder's name.
fn validate_nested(def: &TypeDef) -> Result<(), SchemaError> {
    let builder = Name::new(BUILDER_CLASS_NAME);
    if def.nested_classifiers.contains(&builder) {
        return Err(SchemaError::nested_collision(
            def.id.to_string(),
            BUILDER_CLASS_NAME,
        ));
    }
    Ok(())
}

/// Checks that no user-declared member claims a synthesized callable name on
/// the owner namespace.
fn validate_members(def: &TypeDef) -> Result<(), SchemaError> {
    for synthesized in [NEW_BUILDER_FUN_NAME, COPY_FUN_NAME] {
        let name = Name::new(synthesized);
        if def.members.contains(&name) {
            return Err(SchemaError::member_collision(
                def.id.to_string(),
                synthesized,
            ));
        }
    }
    Ok(())
}

/// Checks that no two fields map to the same Java-setter name. Field names
/// differing only in the case of their first letter collapse under the
/// setter transform.
fn validate_setter_names(def: &TypeDef) -> Result<(), SchemaError> {
    let mut setters: HashMap<Name, &Name> = HashMap::new();
    for param in def.params() {
        let setter = to_java_setter(&param.name);
        if let Some(first) = setters.get(&setter) {
            return Err(SchemaError::SetterNameCollision {
                owner: def.id.to_string(),
                first: first.as_str().to_string(),
                second: param.name.as_str().to_string(),
                setter: setter.as_str().to_string(),
            });
        }
        setters.insert(setter, &param.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::{ClassId, FqName};
    use crate::types::{CtorDef, NamedType, ParamDef};

    fn class(name: &str) -> ClassId {
        ClassId::top_level(FqName::new("test"), Name::new(name))
    }

    fn def_with_fields(fields: &[&str]) -> TypeDef {
        let mut def = TypeDef::new(class("Person"));
        def.mark_buildable();
        let mut ctor = CtorDef::new();
        for field in fields {
            ctor.add_param(ParamDef::new(
                Name::new(*field),
                NamedType::new(class("String")),
            ));
        }
        def.set_primary_constructor(ctor);
        def
    }

    #[test]
    fn test_valid_index_passes() {
        let index = SymbolIndex::from_defs(vec![def_with_fields(&["name", "age"])]);
        assert!(validate_index(&index, false).is_ok());
        assert!(validate_index(&index, true).is_ok());
    }

    #[test]
    fn test_duplicate_field_reported() {
        let index = SymbolIndex::from_defs(vec![def_with_fields(&["name", "name"])]);
        let err = validate_index(&index, false).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { .. }));
    }

    #[test]
    fn test_user_builder_class_reported() {
        let mut def = def_with_fields(&["name"]);
        def.add_nested_classifier(Name::new("Builder"));
        let index = SymbolIndex::from_defs(vec![def]);

        let err = validate_index(&index, false).unwrap_err();
        assert!(matches!(err, SchemaError::NestedClassCollision { .. }));
    }

    #[test]
    fn test_user_member_collision_reported() {
        let mut def = def_with_fields(&["name"]);
        def.add_member(Name::new("newBuilder"));
        let index = SymbolIndex::from_defs(vec![def]);

        let err = validate_index(&index, false).unwrap_err();
        assert!(matches!(err, SchemaError::MemberCollision { .. }));
    }

    #[test]
    fn test_unrelated_members_allowed() {
        let mut def = def_with_fields(&["name"]);
        def.add_member(Name::new("greet"));
        def.add_nested_classifier(Name::new("Inner"));
        let index = SymbolIndex::from_defs(vec![def]);

        assert!(validate_index(&index, false).is_ok());
    }

    #[test]
    fn test_setter_name_collision_reported_in_java_mode_only() {
        let index = SymbolIndex::from_defs(vec![def_with_fields(&["age", "Age"])]);

        assert!(validate_index(&index, false).is_ok());
        let err = validate_index(&index, true).unwrap_err();
        assert!(matches!(err, SchemaError::SetterNameCollision { .. }));
    }

    #[test]
    fn test_unmarked_classes_are_not_validated() {
        let mut def = TypeDef::new(class("Plain"));
        def.add_nested_classifier(Name::new("Builder"));
        let index = SymbolIndex::from_defs(vec![def]);

        assert!(validate_index(&index, true).is_ok());
    }
}
