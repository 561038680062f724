//! # Brickforge Schema
//!
//! Host symbol model and schema resolution for builder synthesis.
//!
//! This crate provides:
//! - Identifiers for classes and callables
//! - Type references and host-supplied type definitions
//! - A constructed-once symbol index over one compilation unit
//! - Schema resolution with a race-tolerant memoizing cache
//! - Naming conventions for synthesized members
//! - Index validation with explicit collision reporting

pub mod error;
pub mod ident;
pub mod index;
pub mod naming;
pub mod resolve;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use ident::{CallableId, ClassId, FqName, Name};
pub use index::{NamespaceRole, SymbolIndex};
pub use resolve::{Field, SchemaResolver, TypeSchema};
pub use types::{CallbackType, CtorDef, NamedType, ParamDef, TypeDef, TypeRef};
pub use validation::validate_index;
