//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```
//! use brickforge::prelude::*;
//! ```

// Schema types
pub use brickforge_schema::naming::{builder_class_id, companion_class_id};
pub use brickforge_schema::{
    CallableId, CallbackType, ClassId, CtorDef, Field, FqName, Name, NamedType, NamespaceRole,
    ParamDef, SchemaError, SchemaResolver, SymbolIndex, TypeDef, TypeRef, TypeSchema,
    validate_index,
};

// Synthesis types
pub use brickforge_synth::{
    CallableContract, ClassDecl, ConstructorDecl, Dispatch, EvalError, FunctionDecl,
    GeneratedSymbol, OptionsError, ParamDecl, PropertyDecl, StorageField, SynthError,
    SynthesisEngine, SynthesisOptions, Visibility, synthesize_companions,
};

// Evaluation harness
pub use brickforge_synth::eval::{BuilderState, Instance, Value, build_with, construct, copy};
