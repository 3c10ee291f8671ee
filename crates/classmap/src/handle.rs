// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Opaque type identity handed out by a [`TypeLoader`](crate::TypeLoader).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct TypeInfo {
    name: Box<str>,
}

/// Shared identity of a named serializable type.
///
/// Cloning only bumps a reference count. Equality and hashing follow the
/// allocation, not the name: two handles are equal only if they come from
/// the same [`TypeHandle::new`] call, so two loaders interning the same
/// name yield distinct identities.
#[derive(Clone)]
pub struct TypeHandle(Arc<TypeInfo>);

impl TypeHandle {
    /// Mint a fresh identity for `name`.
    #[must_use]
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self(Arc::new(TypeInfo { name: name.into() }))
    }

    /// Fully-qualified type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// `true` if both handles denote the same identity.
    #[inline]
    #[must_use]
    pub fn same_as(&self, other: &TypeHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHandle({}@{:p})", self.0.name, Arc::as_ptr(&self.0))
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_not_name() {
        let a = TypeHandle::new("org.jgroups.Message");
        let b = TypeHandle::new("org.jgroups.Message");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn hash_follows_identity() {
        let a = TypeHandle::new("A");
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(TypeHandle::new("A"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn display_is_name() {
        let h = TypeHandle::new("org.jgroups.View");
        assert_eq!(h.to_string(), "org.jgroups.View");
        assert!(format!("{:?}", h).starts_with("TypeHandle(org.jgroups.View@"));
    }
}
