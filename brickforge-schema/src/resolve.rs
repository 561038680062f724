//! Schema resolution.
//!
//! A [`TypeSchema`] is derived, never stored by the host: the ordered field
//! list extracted from a marker-carrying class's primary constructor.
//! Resolution is a pure function of the immutable [`SymbolIndex`], memoized
//! per owner. Concurrent first access may recompute redundantly but always
//! publishes identical results, so the cache needs no mutual exclusion for
//! correctness, only to avoid duplicate work.

use crate::ident::{ClassId, Name};
use crate::index::SymbolIndex;
use crate::types::NamedType;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A schema field: one primary-constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: Name,
    /// Declared field type, nullability included.
    pub ty: NamedType,
}

/// The ordered, typed field list of an owner class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSchema {
    /// The owner class.
    pub owner: ClassId,
    /// Fields in primary-constructor parameter order.
    pub fields: Vec<Field>,
}

impl TypeSchema {
    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &Name) -> Option<&Field> {
        self.fields.iter().find(|field| &field.name == name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no settable fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Resolves owner classes to schemas, memoizing per owner.
pub struct SchemaResolver {
    index: Arc<SymbolIndex>,
    cache: RwLock<HashMap<ClassId, Arc<TypeSchema>>>,
}

impl SchemaResolver {
    /// Creates a resolver over the given index.
    #[must_use]
    pub fn new(index: Arc<SymbolIndex>) -> Self {
        Self {
            index,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the index this resolver reads from.
    #[must_use]
    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    /// Resolves the schema for an owner class.
    ///
    /// Returns `None` when the class is unknown or carries no marker
    /// annotation. A marker-carrying class with no primary constructor
    /// resolves to a schema with an empty field list; callers must treat
    /// "no builder possible" as a valid, silent outcome.
    #[must_use]
    pub fn resolve(&self, owner: &ClassId) -> Option<Arc<TypeSchema>> {
        if let Some(schema) = self.cache.read().get(owner) {
            return Some(Arc::clone(schema));
        }

        let def = self.index.get(owner)?;
        if !def.buildable {
            return None;
        }

        let fields = def
            .params()
            .iter()
            .map(|param| Field {
                name: param.name.clone(),
                ty: param.ty.clone(),
            })
            .collect::<Vec<_>>();

        tracing::trace!("resolved schema for {} with {} fields", owner, fields.len());

        let schema = Arc::new(TypeSchema {
            owner: owner.clone(),
            fields,
        });

        // Publish once: a concurrent resolver may have won the race with an
        // identical result, in which case its copy is kept.
        let mut cache = self.cache.write();
        let published = cache
            .entry(owner.clone())
            .or_insert_with(|| Arc::clone(&schema));
        Some(Arc::clone(published))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::FqName;
    use crate::types::{CtorDef, ParamDef, TypeDef};

    fn class(name: &str) -> ClassId {
        ClassId::top_level(FqName::new("test"), Name::new(name))
    }

    fn person_def() -> TypeDef {
        let mut def = TypeDef::new(class("Person"));
        def.mark_buildable();
        let mut ctor = CtorDef::new();
        ctor.add_param(ParamDef::new(
            Name::new("name"),
            NamedType::new(class("String")),
        ));
        ctor.add_param(ParamDef::new(
            Name::new("nickname"),
            NamedType::nullable_of(class("String")),
        ));
        ctor.add_param(ParamDef::new(Name::new("age"), NamedType::new(class("Int"))));
        def.set_primary_constructor(ctor);
        def
    }

    fn resolver(defs: Vec<TypeDef>) -> SchemaResolver {
        SchemaResolver::new(Arc::new(SymbolIndex::from_defs(defs)))
    }

    #[test]
    fn test_resolve_preserves_field_order() {
        let resolver = resolver(vec![person_def()]);
        let schema = resolver.resolve(&class("Person")).unwrap();

        let names: Vec<_> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "nickname", "age"]);
        assert!(schema.fields[1].ty.is_nullable());
        assert!(!schema.fields[2].ty.is_nullable());
    }

    #[test]
    fn test_resolve_unknown_class() {
        let resolver = resolver(vec![]);
        assert!(resolver.resolve(&class("Missing")).is_none());
    }

    #[test]
    fn test_resolve_unmarked_class() {
        let resolver = resolver(vec![TypeDef::new(class("Plain"))]);
        assert!(resolver.resolve(&class("Plain")).is_none());
    }

    #[test]
    fn test_resolve_without_primary_ctor_degrades_to_empty() {
        let mut def = TypeDef::new(class("Opaque"));
        def.mark_buildable();
        let resolver = resolver(vec![def]);

        let schema = resolver.resolve(&class("Opaque")).unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_resolve_is_memoized() {
        let resolver = resolver(vec![person_def()]);
        let first = resolver.resolve(&class("Person")).unwrap();
        let second = resolver.resolve(&class("Person")).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_concurrent_resolution_publishes_identical_schemas() {
        let resolver = Arc::new(resolver(vec![person_def()]));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                std::thread::spawn(move || resolver.resolve(&class("Person")).unwrap())
            })
            .collect();

        let schemas: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for schema in &schemas {
            assert_eq!(schema.as_ref(), schemas[0].as_ref());
        }
    }

    #[test]
    fn test_schema_field_lookup() {
        let resolver = resolver(vec![person_def()]);
        let schema = resolver.resolve(&class("Person")).unwrap();

        assert!(schema.field(&Name::new("age")).is_some());
        assert!(schema.field(&Name::new("missing")).is_none());
        assert_eq!(schema.len(), 3);
    }
}
