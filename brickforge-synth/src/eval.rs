//! Builder evaluation over dynamic values.
//!
//! Synthesized declarations describe builder members; this module gives them
//! operational meaning so behavioral properties are testable without a host
//! compiler: a [`BuilderState`] holds one slot per schema field, unset slots
//! are distinct from slots set to [`Value::Null`], and `build` surfaces an
//! unset nullable field as null while failing deterministically on an unset
//! non-nullable field.

use crate::contract::InvocationCounter;
use crate::error::EvalError;
use brickforge_schema::{ClassId, Name, TypeSchema};
use std::fmt;
use std::sync::Arc;

/// A dynamic field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The null sentinel.
    Null,
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A string value.
    Str(String),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{value}\""),
        }
    }
}

/// An owner instance: one value per schema field, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// The instantiated class.
    pub class: ClassId,
    values: Vec<(Name, Value)>,
}

impl Instance {
    /// Looks up a field value by name.
    #[must_use]
    pub fn get(&self, name: &Name) -> Option<&Value> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns the field values in schema order.
    #[must_use]
    pub fn values(&self) -> &[(Name, Value)] {
        &self.values
    }
}

/// Directly constructs an owner instance from positional values, the analog
/// of calling the primary constructor. Values beyond the schema's field
/// count are ignored; missing values default to null.
#[must_use]
pub fn construct(schema: &TypeSchema, values: Vec<Value>) -> Instance {
    let mut positional = values.into_iter();
    let values = schema
        .fields
        .iter()
        .map(|field| {
            (
                field.name.clone(),
                positional.next().unwrap_or(Value::Null),
            )
        })
        .collect();
    Instance {
        class: schema.owner.clone(),
        values,
    }
}

/// Accumulated builder state: one slot per schema field. An unset slot is
/// not the same as a slot set to null.
#[derive(Debug, Clone)]
pub struct BuilderState {
    schema: Arc<TypeSchema>,
    slots: Vec<Option<Value>>,
}

impl BuilderState {
    /// Creates a builder with every field unset.
    #[must_use]
    pub fn new(schema: Arc<TypeSchema>) -> Self {
        let slots = vec![None; schema.fields.len()];
        Self { schema, slots }
    }

    /// Creates a builder seeded from an existing instance, the semantics of
    /// the instance-bound `newBuilder` entry point.
    #[must_use]
    pub fn from_instance(schema: Arc<TypeSchema>, instance: &Instance) -> Self {
        let slots = schema
            .fields
            .iter()
            .map(|field| instance.get(&field.name).cloned())
            .collect();
        Self { schema, slots }
    }

    /// Returns the schema this builder accumulates values for.
    #[must_use]
    pub fn schema(&self) -> &TypeSchema {
        &self.schema
    }

    /// Sets a field, returning the builder for chaining.
    ///
    /// # Errors
    /// Returns `EvalError::UnknownField` when the name matches no schema
    /// field.
    pub fn set(&mut self, field: &Name, value: Value) -> Result<&mut Self, EvalError> {
        let position = self.position(field)?;
        self.slots[position] = Some(value);
        Ok(self)
    }

    /// Reads a field's current value; `None` means unset.
    ///
    /// # Errors
    /// Returns `EvalError::UnknownField` when the name matches no schema
    /// field.
    pub fn get(&self, field: &Name) -> Result<Option<&Value>, EvalError> {
        let position = self.position(field)?;
        Ok(self.slots[position].as_ref())
    }

    /// Builds the owner instance. An unset field surfaces as null when its
    /// declared type is nullable and fails otherwise; there is no silent
    /// coercion.
    ///
    /// # Errors
    /// Returns `EvalError::UnsetField` for an unset non-nullable field.
    pub fn build(&self) -> Result<Instance, EvalError> {
        let mut values = Vec::with_capacity(self.schema.fields.len());
        for (field, slot) in self.schema.fields.iter().zip(&self.slots) {
            let value = match slot {
                Some(value) => value.clone(),
                None if field.ty.is_nullable() => Value::Null,
                None => {
                    return Err(EvalError::unset(
                        self.schema.owner.to_string(),
                        field.name.as_str(),
                    ));
                }
            };
            values.push((field.name.clone(), value));
        }
        Ok(Instance {
            class: self.schema.owner.clone(),
            values,
        })
    }

    fn position(&self, field: &Name) -> Result<usize, EvalError> {
        self.schema
            .fields
            .iter()
            .position(|candidate| &candidate.name == field)
            .ok_or_else(|| {
                EvalError::unknown_field(self.schema.owner.to_string(), field.as_str())
            })
    }
}

/// Functional update: seeds a builder from the instance, applies the
/// transform exactly once, and builds. The semantics of the owner's `copy`.
///
/// # Errors
/// Returns `EvalError` when the transformed builder fails to build.
pub fn copy(
    schema: Arc<TypeSchema>,
    instance: &Instance,
    transform: impl FnOnce(&mut BuilderState),
) -> Result<Instance, EvalError> {
    let counter = InvocationCounter::new("copy");
    let mut builder = BuilderState::from_instance(schema, instance);
    transform(&mut builder);
    counter.record();
    let result = builder.build();
    counter.finish();
    result
}

/// Declarative construction: applies the callback exactly once to a fresh
/// builder and builds. The semantics of the companion DSL entry.
///
/// # Errors
/// Returns `EvalError` when the configured builder fails to build.
pub fn build_with(
    schema: Arc<TypeSchema>,
    builder_fn: impl FnOnce(&mut BuilderState),
) -> Result<Instance, EvalError> {
    let counter = InvocationCounter::new("build");
    let mut builder = BuilderState::new(schema);
    builder_fn(&mut builder);
    counter.record();
    let result = builder.build();
    counter.finish();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickforge_schema::{Field, FqName, NamedType};

    fn class(name: &str) -> ClassId {
        ClassId::top_level(FqName::new("test"), Name::new(name))
    }

    fn person_schema() -> Arc<TypeSchema> {
        Arc::new(TypeSchema {
            owner: class("Person"),
            fields: vec![
                Field {
                    name: Name::new("name"),
                    ty: NamedType::new(class("String")),
                },
                Field {
                    name: Name::new("age"),
                    ty: NamedType::new(class("Int")),
                },
                Field {
                    name: Name::new("nickname"),
                    ty: NamedType::nullable_of(class("String")),
                },
            ],
        })
    }

    #[test]
    fn test_round_trip_equals_direct_construction() {
        let schema = person_schema();
        let direct = construct(&schema, vec!["A".into(), 3i64.into(), Value::Null]);

        let mut builder = BuilderState::new(Arc::clone(&schema));
        builder
            .set(&Name::new("name"), "A".into())
            .unwrap()
            .set(&Name::new("age"), 3i64.into())
            .unwrap()
            .set(&Name::new("nickname"), Value::Null)
            .unwrap();

        assert_eq!(builder.build().unwrap(), direct);
    }

    #[test]
    fn test_unset_nullable_field_builds_as_null() {
        let schema = person_schema();
        let mut builder = BuilderState::new(Arc::clone(&schema));
        builder.set(&Name::new("name"), "A".into()).unwrap();
        builder.set(&Name::new("age"), 3i64.into()).unwrap();

        let instance = builder.build().unwrap();
        assert_eq!(instance.get(&Name::new("nickname")), Some(&Value::Null));
    }

    #[test]
    fn test_unset_required_field_fails_deterministically() {
        let schema = person_schema();
        let mut builder = BuilderState::new(Arc::clone(&schema));
        builder.set(&Name::new("name"), "A".into()).unwrap();

        let err = builder.build().unwrap_err();
        assert_eq!(err, EvalError::unset("test.Person", "age"));
        // Re-building yields the identical failure.
        assert_eq!(builder.build().unwrap_err(), err);
    }

    #[test]
    fn test_unset_is_distinct_from_set_to_null() {
        let schema = person_schema();
        let mut builder = BuilderState::new(Arc::clone(&schema));

        assert_eq!(builder.get(&Name::new("nickname")).unwrap(), None);
        builder.set(&Name::new("nickname"), Value::Null).unwrap();
        assert_eq!(
            builder.get(&Name::new("nickname")).unwrap(),
            Some(&Value::Null)
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let schema = person_schema();
        let mut builder = BuilderState::new(Arc::clone(&schema));
        let err = builder.set(&Name::new("height"), 2i64.into()).unwrap_err();
        assert_eq!(err, EvalError::unknown_field("test.Person", "height"));
    }

    #[test]
    fn test_new_builder_seeds_from_instance() {
        let schema = person_schema();
        let original = construct(&schema, vec!["A".into(), 3i64.into(), "Ace".into()]);

        let builder = BuilderState::from_instance(Arc::clone(&schema), &original);
        assert_eq!(builder.build().unwrap(), original);
    }

    #[test]
    fn test_copy_with_identity_transform_preserves_instance() {
        let schema = person_schema();
        let original = construct(&schema, vec!["A".into(), 3i64.into(), Value::Null]);

        let copied = copy(Arc::clone(&schema), &original, |_| {}).unwrap();
        assert_eq!(copied, original);
    }

    #[test]
    fn test_copy_overrides_single_field() {
        let schema = person_schema();
        let original = construct(&schema, vec!["A".into(), 3i64.into(), Value::Null]);

        let copied = copy(Arc::clone(&schema), &original, |builder| {
            builder.set(&Name::new("age"), 4i64.into()).unwrap();
        })
        .unwrap();

        assert_eq!(copied.get(&Name::new("age")), Some(&Value::Int(4)));
        assert_eq!(copied.get(&Name::new("name")), Some(&Value::Str("A".into())));
    }

    #[test]
    fn test_build_with_configures_fresh_builder() {
        let schema = person_schema();
        let instance = build_with(Arc::clone(&schema), |builder| {
            builder.set(&Name::new("name"), "A".into()).unwrap();
            builder.set(&Name::new("age"), 3i64.into()).unwrap();
        })
        .unwrap();

        assert_eq!(
            instance,
            construct(&schema, vec!["A".into(), 3i64.into(), Value::Null])
        );
    }

    #[test]
    fn test_build_with_empty_callback_requires_nullable_fields_only() {
        let schema = Arc::new(TypeSchema {
            owner: class("Note"),
            fields: vec![Field {
                name: Name::new("text"),
                ty: NamedType::nullable_of(class("String")),
            }],
        });

        let instance = build_with(Arc::clone(&schema), |_| {}).unwrap();
        assert_eq!(instance.get(&Name::new("text")), Some(&Value::Null));
    }
}
