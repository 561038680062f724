//! The constructed-once symbol index.
//!
//! The host builds one [`SymbolIndex`] per compilation unit from its set of
//! user-declared classes and passes it to the resolver and the synthesis
//! engine. The index is immutable for its whole lifetime; every derived set
//! is computed up front so queries are pure lookups.

use crate::ident::ClassId;
use crate::naming::{COMPANION_CLASS_NAME, builder_class_id};
use crate::types::TypeDef;
use std::collections::{HashMap, HashSet};

/// The role a class identifier plays relative to builder synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceRole {
    /// A marker-carrying class whose schema drives synthesis.
    Owner,
    /// The derived nested `Builder` class of an owner.
    Builder,
    /// The companion namespace of an owner.
    Companion,
}

/// Immutable index over all user-declared classes of one compilation unit.
#[derive(Debug)]
pub struct SymbolIndex {
    types: HashMap<ClassId, TypeDef>,
    buildable_ids: HashSet<ClassId>,
    builder_ids: HashSet<ClassId>,
}

impl SymbolIndex {
    /// Builds the index from the host's type definitions. The sets of
    /// marker-carrying classes and derived builder identifiers are computed
    /// once here and never invalidated.
    #[must_use]
    pub fn from_defs(defs: Vec<TypeDef>) -> Self {
        let mut types = HashMap::with_capacity(defs.len());
        let mut buildable_ids = HashSet::new();
        let mut builder_ids = HashSet::new();

        for def in defs {
            if def.buildable {
                buildable_ids.insert(def.id.clone());
                builder_ids.insert(builder_class_id(&def.id));
            }
            types.insert(def.id.clone(), def);
        }

        tracing::debug!(
            "indexed {} classes, {} carry the builder marker",
            types.len(),
            buildable_ids.len()
        );

        Self {
            types,
            buildable_ids,
            builder_ids,
        }
    }

    /// Looks up a type definition.
    #[must_use]
    pub fn get(&self, id: &ClassId) -> Option<&TypeDef> {
        self.types.get(id)
    }

    /// Returns true if the class carries the builder marker annotation.
    #[must_use]
    pub fn is_buildable(&self, id: &ClassId) -> bool {
        self.buildable_ids.contains(id)
    }

    /// Returns true if the identifier is the derived builder of some
    /// marker-carrying class.
    #[must_use]
    pub fn is_builder(&self, id: &ClassId) -> bool {
        self.builder_ids.contains(id)
    }

    /// Iterates over the marker-carrying class identifiers.
    pub fn buildable_ids(&self) -> impl Iterator<Item = &ClassId> {
        self.buildable_ids.iter()
    }

    /// Classifies an identifier by its role in builder synthesis. `None`
    /// means the identifier is outside the engine's jurisdiction.
    #[must_use]
    pub fn classify(&self, id: &ClassId) -> Option<NamespaceRole> {
        if self.is_buildable(id) {
            return Some(NamespaceRole::Owner);
        }
        if self.is_builder(id) {
            return Some(NamespaceRole::Builder);
        }
        if id.short_name().as_str() == COMPANION_CLASS_NAME {
            let outer = id.outer()?;
            if self.is_buildable(&outer) && self.get(&outer).is_some_and(|def| def.has_companion) {
                return Some(NamespaceRole::Companion);
            }
        }
        None
    }

    /// Returns the owner class of a builder or companion identifier, or the
    /// identifier itself for an owner.
    #[must_use]
    pub fn owner_of(&self, id: &ClassId) -> Option<ClassId> {
        match self.classify(id)? {
            NamespaceRole::Owner => Some(id.clone()),
            NamespaceRole::Builder | NamespaceRole::Companion => id.outer(),
        }
    }

}
