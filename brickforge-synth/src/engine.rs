//! The synthesis engine.
//!
//! The engine answers the host's pull-based queries: which nested
//! classifiers a class declares, which callable names exist on a namespace,
//! and the synthesized declaration for one requested identifier. It never
//! schedules emission of its own; every answer is recomputed (or cache-hit)
//! from the immutable index, so queries for different owners are
//! order-independent and safe to issue concurrently.

use crate::classes::{builder_class, builder_constructor, builder_property};
use crate::declarations::{ClassDecl, ConstructorDecl, FunctionDecl, PropertyDecl};
use crate::functions::{
    build_function, copy_function, dsl_entry_function, fluent_setter, java_setter,
    new_builder_function,
};
use crate::options::SynthesisOptions;
use brickforge_schema::naming::{
    BUILD_FUN_NAME, BUILDER_CLASS_NAME, COPY_FUN_NAME, NEW_BUILDER_FUN_NAME, builder_class_id,
    to_java_setter,
};
use brickforge_schema::{
    CallableId, ClassId, Name, NamespaceRole, SchemaResolver, SymbolIndex, TypeSchema,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Answers synthesis queries for one compilation unit.
pub struct SynthesisEngine {
    index: Arc<SymbolIndex>,
    resolver: SchemaResolver,
    options: SynthesisOptions,
}

impl SynthesisEngine {
    /// Creates an engine over the host's index. The options are fixed for
    /// the engine's lifetime.
    #[must_use]
    pub fn new(index: SymbolIndex, options: SynthesisOptions) -> Self {
        let index = Arc::new(index);
        tracing::debug!(
            "synthesis engine ready (java setters: {})",
            options.enable_java_setters
        );
        Self {
            resolver: SchemaResolver::new(Arc::clone(&index)),
            index,
            options,
        }
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Returns the symbol index the engine reads from.
    #[must_use]
    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    /// Resolves the schema of an owner class through the engine's memoized
    /// resolver. `None` for classes outside the engine's jurisdiction.
    #[must_use]
    pub fn resolve_schema(&self, owner: &ClassId) -> Option<Arc<TypeSchema>> {
        self.resolver.resolve(owner)
    }

    /// Answers "what nested types does this class declare": `{Builder}` for
    /// marker-carrying classes, empty otherwise.
    #[must_use]
    pub fn nested_classifier_names(&self, class_id: &ClassId) -> BTreeSet<Name> {
        let mut names = BTreeSet::new();
        if self.index.is_buildable(class_id) {
            names.insert(Name::new(BUILDER_CLASS_NAME));
        }
        names
    }

    /// Answers "what callable names exist on this namespace". The answer and
    /// per-name synthesis never disagree: every name returned here is
    /// synthesizable as a constructor, function or property, and vice versa.
    #[must_use]
    pub fn callable_names(&self, class_id: &ClassId) -> BTreeSet<Name> {
        let mut names = BTreeSet::new();
        match self.index.classify(class_id) {
            Some(NamespaceRole::Owner) => {
                names.insert(Name::new(NEW_BUILDER_FUN_NAME));
                names.insert(Name::new(COPY_FUN_NAME));
            }
            Some(NamespaceRole::Builder) => {
                names.insert(Name::init());
                names.insert(Name::new(BUILD_FUN_NAME));
                let schema = self.owner_schema(class_id);
                for field in &schema.fields {
                    // Property names exist in both modes; the mutator
                    // function shares the field name only in fluent mode.
                    names.insert(field.name.clone());
                    if self.options.enable_java_setters {
                        names.insert(to_java_setter(&field.name));
                    }
                }
            }
            Some(NamespaceRole::Companion) => {
                names.insert(Name::new(BUILD_FUN_NAME));
            }
            None => {}
        }
        names
    }

    /// Synthesizes the nested builder class, or `None` when the identifier
    /// is not the derived builder of a qualifying owner.
    #[must_use]
    pub fn generate_class(&self, class_id: &ClassId) -> Option<ClassDecl> {
        if class_id.short_name().as_str() != BUILDER_CLASS_NAME {
            return None;
        }
        let owner_id = class_id.outer()?;
        let schema = self.resolver.resolve(&owner_id)?;
        tracing::trace!("synthesizing builder class {}", class_id);
        Some(builder_class(&schema, class_id.clone()))
    }

    /// Synthesizes the builder's constructor, or `None` when the identifier
    /// is not a recognized builder.
    #[must_use]
    pub fn generate_constructor(&self, class_id: &ClassId) -> Option<ConstructorDecl> {
        if !self.index.is_builder(class_id) {
            return None;
        }
        Some(builder_constructor(class_id.clone()))
    }

    /// Synthesizes the function for a requested identifier, routing on the
    /// owning namespace's role and the requested name. Queries outside the
    /// engine's jurisdiction return `None`; the router never guesses.
    #[must_use]
    pub fn generate_function(&self, callable_id: &CallableId) -> Option<FunctionDecl> {
        let role = self.index.classify(&callable_id.owner)?;
        let name = callable_id.name.as_str();

        match role {
            NamespaceRole::Owner => {
                let owner_id = &callable_id.owner;
                let builder_id = builder_class_id(owner_id);
                match name {
                    NEW_BUILDER_FUN_NAME => Some(new_builder_function(
                        owner_id,
                        &builder_id,
                        callable_id.clone(),
                    )),
                    COPY_FUN_NAME => {
                        Some(copy_function(owner_id, &builder_id, callable_id.clone()))
                    }
                    _ => None,
                }
            }
            NamespaceRole::Builder => {
                let builder_id = &callable_id.owner;
                let schema = self.owner_schema(builder_id);
                if name == BUILD_FUN_NAME {
                    return Some(build_function(builder_id, &schema.owner, callable_id.clone()));
                }
                if self.options.enable_java_setters {
                    java_setter(&schema, builder_id, callable_id.clone())
                } else {
                    fluent_setter(&schema, builder_id, callable_id.clone())
                }
            }
            NamespaceRole::Companion => {
                if name != BUILD_FUN_NAME {
                    return None;
                }
                let companion_id = &callable_id.owner;
                let owner_id = self.index.owner_of(companion_id)?;
                let builder_id = builder_class_id(&owner_id);
                Some(dsl_entry_function(
                    companion_id,
                    &owner_id,
                    &builder_id,
                    callable_id.clone(),
                ))
            }
        }
    }

    /// Synthesizes the builder property for a requested identifier, or
    /// `None` when the namespace is not a builder or the name matches no
    /// schema field.
    #[must_use]
    pub fn generate_property(&self, callable_id: &CallableId) -> Option<PropertyDecl> {
        if self.index.classify(&callable_id.owner) != Some(NamespaceRole::Builder) {
            return None;
        }
        let schema = self.owner_schema(&callable_id.owner);
        builder_property(&schema, callable_id.clone())
    }

    /// Resolves the owning schema of a classified builder namespace.
    ///
    /// # Panics
    /// Panics when the resolver cannot locate the builder's outer owner:
    /// the enumeration claimed the namespace, so failure here means the
    /// resolver and synthesizer disagree. That is an engine bug, not a
    /// recoverable condition.
    fn owner_schema(&self, builder_id: &ClassId) -> Arc<TypeSchema> {
        let owner_id = builder_id.outer().unwrap_or_else(|| {
            panic!("builder namespace '{builder_id}' has no outer class")
        });
        self.resolver.resolve(&owner_id).unwrap_or_else(|| {
            panic!("resolver and synthesizer disagree on builder owner '{owner_id}'")
        })
    }
}
