//! # Brickforge
//!
//! Builder-pattern declaration synthesis for host symbol graphs.
//!
//! Given a type definition carrying the builder marker annotation, Brickforge
//! derives and synthesizes a complete, internally-consistent set of companion
//! declarations: a nested builder class, its storage fields and constructor,
//! per-field mutators and properties, a terminal `build`, an instance-bound
//! `newBuilder`, a functional `copy`, and a companion DSL entry taking a
//! single-use callback.
//!
//! The engine is pull-based: the host asks which nested types a class
//! declares, which callable names exist on a namespace, and for the
//! declaration behind one requested identifier. Answers are pure functions of
//! an immutable, constructed-once symbol index, so partial and concurrent
//! host queries are safe and order-independent.
//!
//! ## Quick Start
//!
//! ```
//! use brickforge::prelude::*;
//!
//! let person = ClassId::top_level(FqName::new("com.example"), Name::new("Person"));
//! let mut def = TypeDef::new(person.clone());
//! def.mark_buildable();
//! let mut ctor = CtorDef::new();
//! ctor.add_param(ParamDef::new(
//!     Name::new("name"),
//!     NamedType::new(ClassId::top_level(FqName::new("kotlin"), Name::new("String"))),
//! ));
//! def.set_primary_constructor(ctor);
//!
//! let index = SymbolIndex::from_defs(vec![def]);
//! validate_index(&index, false).unwrap();
//!
//! let engine = SynthesisEngine::new(index, SynthesisOptions::default());
//! let nested = engine.nested_classifier_names(&person);
//! assert_eq!(nested.len(), 1);
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Identifiers, host symbol model, schema resolution,
//!   validation
//! - [`synth`] - Declaration synthesis, the query engine, contracts,
//!   evaluation

pub mod prelude;

/// Identifiers, host symbol model and schema resolution.
pub mod schema {
    pub use brickforge_schema::*;
}

/// Declaration synthesis and the query engine.
pub mod synth {
    pub use brickforge_synth::*;
}
