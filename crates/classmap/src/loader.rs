// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type loading: the capability that turns a type name into a [`TypeHandle`].
//!
//! The registry never resolves symbols itself. The host injects a
//! [`TypeLoader`] at construction time; [`TypeCatalog`] is the stock
//! implementation, an interning table shared by every thread.

use crate::config::RegistryConfig;
use crate::error::LoadError;
use crate::handle::TypeHandle;
use dashmap::DashMap;

/// Resolves type names to handles.
///
/// Loading the same name twice from one loader must return the same
/// identity, otherwise `tag_of` lookups on the second handle miss.
pub trait TypeLoader: Send + Sync {
    /// Resolve `name` to its handle.
    fn load(&self, name: &str) -> Result<TypeHandle, LoadError>;
}

impl<F> TypeLoader for F
where
    F: Fn(&str) -> Result<TypeHandle, LoadError> + Send + Sync,
{
    fn load(&self, name: &str) -> Result<TypeHandle, LoadError> {
        self(name)
    }
}

/// Concurrent interning table of type names.
///
/// - **strict**: only names defined up front (or via [`define`](Self::define))
///   load; everything else is [`UnknownType`](crate::LoadErrorKind::UnknownType)
/// - **open**: any well-formed name is interned on first load
pub struct TypeCatalog {
    types: DashMap<Box<str>, TypeHandle>,
    open: bool,
}

impl TypeCatalog {
    /// Catalog that only knows `names`.
    pub fn strict<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let catalog = Self {
            types: DashMap::new(),
            open: false,
        };
        for name in names {
            catalog.define(name);
        }
        catalog
    }

    /// Strict catalog preloaded with every name of the compiled-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::strict(RegistryConfig::default().names())
    }

    /// Catalog that interns any well-formed name on demand.
    #[must_use]
    pub fn open() -> Self {
        Self {
            types: DashMap::new(),
            open: true,
        }
    }

    /// Add `name` (if missing) and return its handle.
    pub fn define(&self, name: &str) -> TypeHandle {
        self.types
            .entry(name.into())
            .or_insert_with(|| TypeHandle::new(name))
            .clone()
    }

    /// Handle for `name` if already defined, without interning.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TypeHandle> {
        self.types.get(name).map(|entry| entry.value().clone())
    }

    /// Number of defined names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// `true` if unknown names are interned on load.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

impl TypeLoader for TypeCatalog {
    fn load(&self, name: &str) -> Result<TypeHandle, LoadError> {
        if !is_valid_name(name) {
            return Err(LoadError::invalid(name));
        }
        if let Some(handle) = self.get(name) {
            return Ok(handle);
        }
        if self.open {
            Ok(self.define(name))
        } else {
            Err(LoadError::unknown(name))
        }
    }
}

impl std::fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeCatalog")
            .field("types", &self.types.len())
            .field("open", &self.open)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadErrorKind;

    #[test]
    fn strict_catalog_rejects_unknown() {
        let catalog = TypeCatalog::strict(["a.A", "b.B"]);
        assert!(catalog.load("a.A").is_ok());
        let err = catalog.load("c.C").unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::UnknownType);
        assert_eq!(err.name, "c.C");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn loading_twice_returns_same_identity() {
        let catalog = TypeCatalog::open();
        let first = catalog.load("org.example.Header").unwrap();
        let second = catalog.load("org.example.Header").unwrap();
        assert_eq!(first, second);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn open_catalog_still_validates_names() {
        let catalog = TypeCatalog::open();
        assert_eq!(catalog.load("").unwrap_err().kind, LoadErrorKind::InvalidName);
        assert_eq!(
            catalog.load("has space").unwrap_err().kind,
            LoadErrorKind::InvalidName
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn define_extends_strict_catalog() {
        let catalog = TypeCatalog::strict(std::iter::empty());
        assert!(catalog.load("x.Late").is_err());
        let handle = catalog.define("x.Late");
        assert_eq!(catalog.load("x.Late").unwrap(), handle);
    }

    #[test]
    fn builtin_catalog_knows_both_tables() {
        let catalog = TypeCatalog::builtin();
        assert!(!catalog.is_open());
        assert!(catalog.get("org.jgroups.Message").is_some());
        assert!(catalog.get("org.jgroups.protocols.UDP").is_some());
    }

    #[test]
    fn closures_are_loaders() {
        let loader = |name: &str| -> Result<TypeHandle, LoadError> {
            if name.starts_with("ok.") {
                Ok(TypeHandle::new(name))
            } else {
                Err(LoadError::other(name, "rejected by host"))
            }
        };
        assert!(loader.load("ok.Type").is_ok());
        let err = loader.load("nope").unwrap_err();
        assert_eq!(err.to_string(), "failed loading type 'nope': rejected by host");
    }
}
