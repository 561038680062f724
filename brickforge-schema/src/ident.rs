//! Identifiers for classes and callables.
//!
//! Identifiers are plain values: a `ClassId` is a package plus a nested class
//! path, and a `CallableId` is an owning class plus a callable name. The
//! builder nesting rule lives in [`crate::naming`].

use std::fmt;

/// A bare identifier, including the `<init>` constructor pseudo-name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Creates a name from an identifier string.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The constructor pseudo-name.
    #[must_use]
    pub fn init() -> Self {
        Self(crate::naming::INIT_NAME.to_string())
    }

    /// Returns true if this is the constructor pseudo-name.
    #[must_use]
    pub fn is_init(&self) -> bool {
        self.0 == crate::naming::INIT_NAME
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dot-separated package name. The empty package is the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FqName(Vec<Name>);

impl FqName {
    /// Parses a dotted package name, e.g. `"com.example.model"`.
    #[must_use]
    pub fn new(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self(dotted.split('.').map(Name::new).collect())
    }

    /// The root (empty) package.
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns true if this is the root package.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the package segments.
    #[must_use]
    pub fn segments(&self) -> &[Name] {
        &self.0
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Identifies a class: a package plus a non-empty nested class path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId {
    package: FqName,
    path: Vec<Name>,
}

impl ClassId {
    /// Creates an identifier for a top-level class.
    #[must_use]
    pub fn top_level(package: FqName, name: Name) -> Self {
        Self {
            package,
            path: vec![name],
        }
    }

    /// Creates the identifier of a class nested inside this one.
    #[must_use]
    pub fn nested(&self, name: Name) -> Self {
        let mut path = self.path.clone();
        path.push(name);
        Self {
            package: self.package.clone(),
            path,
        }
    }

    /// Returns the identifier of the enclosing class, if any.
    #[must_use]
    pub fn outer(&self) -> Option<Self> {
        if self.path.len() < 2 {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            path: self.path[..self.path.len() - 1].to_vec(),
        })
    }

    /// Returns the short (innermost) class name.
    #[must_use]
    pub fn short_name(&self) -> &Name {
        self.path.last().expect("class path is never empty")
    }

    /// Returns the package.
    #[must_use]
    pub fn package(&self) -> &FqName {
        &self.package
    }

    /// Returns true if this class is nested inside another.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.path.len() > 1
    }

    /// Creates a callable identifier owned by this class.
    #[must_use]
    pub fn callable(&self, name: Name) -> CallableId {
        CallableId::new(self.clone(), name)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_root() {
            write!(f, "{}.", self.package)?;
        }
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Identifies a callable: an owning class plus a callable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallableId {
    /// The owning class.
    pub owner: ClassId,
    /// The callable name.
    pub name: Name,
}

impl CallableId {
    /// Creates a callable identifier.
    #[must_use]
    pub fn new(owner: ClassId, name: Name) -> Self {
        Self { owner, name }
    }
}

impl fmt::Display for CallableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}
