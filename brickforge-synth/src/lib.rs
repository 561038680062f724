//! # Brickforge Synth
//!
//! Builder declaration synthesis from resolved schemas.
//!
//! This crate provides:
//! - The synthesized declaration model (class, constructor, function,
//!   property)
//! - Per-kind synthesis and the name-routing table
//! - The query engine answering nested-classifier, callable-name and
//!   synthesis queries
//! - Single-invocation callback contracts
//! - An evaluation harness interpreting builders over dynamic values

pub mod classes;
pub mod contract;
pub mod declarations;
pub mod engine;
pub mod error;
pub mod eval;
pub mod functions;
pub mod options;

pub use contract::{CallableContract, InvocationCounter, Occurrences};
pub use declarations::{
    ClassDecl, ConstructorDecl, Dispatch, FunctionDecl, GeneratedSymbol, ParamDecl, PropertyDecl,
    StorageField, Visibility,
};
pub use engine::SynthesisEngine;
pub use error::{EvalError, OptionsError, SynthError};
pub use options::{ENABLE_JAVA_SETTERS_OPTION, SynthesisOptions};

use brickforge_schema::ClassId;
use brickforge_schema::naming::{builder_class_id, companion_class_id};

/// Synthesizes every companion declaration for one owner by driving the
/// engine's own enumeration queries, in the order a host would: the nested
/// builder class, the owner's callables, the builder's constructor, functions
/// and properties, and the companion DSL entry.
///
/// The result is empty for classes outside the engine's jurisdiction. Because
/// the symbols come from the enumeration answers, this is also the executable
/// form of the enumeration/synthesis agreement invariant.
#[must_use]
pub fn synthesize_companions(engine: &SynthesisEngine, owner: &ClassId) -> Vec<GeneratedSymbol> {
    let mut symbols = Vec::new();

    for nested in engine.nested_classifier_names(owner) {
        if let Some(class) = engine.generate_class(&owner.nested(nested)) {
            symbols.push(GeneratedSymbol::Class(class));
        }
    }

    for name in engine.callable_names(owner) {
        if let Some(function) = engine.generate_function(&owner.callable(name)) {
            symbols.push(GeneratedSymbol::Function(function));
        }
    }

    let builder_id = builder_class_id(owner);
    for name in engine.callable_names(&builder_id) {
        if name.is_init() {
            if let Some(ctor) = engine.generate_constructor(&builder_id) {
                symbols.push(GeneratedSymbol::Constructor(ctor));
            }
            continue;
        }
        let id = builder_id.callable(name);
        if let Some(function) = engine.generate_function(&id) {
            symbols.push(GeneratedSymbol::Function(function));
        }
        if let Some(property) = engine.generate_property(&id) {
            symbols.push(GeneratedSymbol::Property(property));
        }
    }

    let companion_id = companion_class_id(owner);
    for name in engine.callable_names(&companion_id) {
        if let Some(function) = engine.generate_function(&companion_id.callable(name)) {
            symbols.push(GeneratedSymbol::Function(function));
        }
    }

    symbols
}
