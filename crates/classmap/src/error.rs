// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for loading, building and extending the registry.
//!
//! Lookup misses are not errors: every lookup returns an `Option` (or the
//! reserved protocol id `0`) instead.

use crate::config::{
    ProtocolId, TypeTag, MAX_MAGIC_VALUE, MIN_CUSTOM_MAGIC_NUMBER, MIN_CUSTOM_PROTOCOL_ID,
};
use std::fmt;

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Why a [`TypeLoader`](crate::TypeLoader) could not produce a handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The loader does not know this type.
    UnknownType,
    /// The name is empty or malformed.
    InvalidName,
    /// Loader-specific failure.
    Other(String),
}

/// Failure to resolve a type name to a [`TypeHandle`](crate::TypeHandle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    /// Name that failed to load.
    pub name: String,
    /// Failure category.
    pub kind: LoadErrorKind,
}

impl LoadError {
    /// Type not known to the loader.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: LoadErrorKind::UnknownType,
        }
    }

    /// Malformed type name.
    pub fn invalid(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: LoadErrorKind::InvalidName,
        }
    }

    /// Loader-specific failure with a free-form reason.
    pub fn other(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: LoadErrorKind::Other(reason.into()),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LoadErrorKind::UnknownType => write!(f, "unknown type '{}'", self.name),
            LoadErrorKind::InvalidName => write!(f, "invalid type name '{}'", self.name),
            LoadErrorKind::Other(reason) => {
                write!(f, "failed loading type '{}': {}", self.name, reason)
            }
        }
    }
}

impl std::error::Error for LoadError {}

// ---------------------------------------------------------------------------
// InitError
// ---------------------------------------------------------------------------

/// Fatal error while building the built-in tables.
///
/// A registry is never returned in a partially built state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// Built-in tag does not fit the fixed magic map.
    TagOutOfRange { tag: TypeTag, name: String },
    /// Two built-in types share a tag.
    DuplicateTag { tag: TypeTag, name: String },
    /// One built-in type is listed under two tags.
    DuplicateType {
        name: String,
        tag: TypeTag,
        existing: TypeTag,
    },
    /// Built-in protocol listed under [`UNSET_PROTOCOL_ID`](crate::UNSET_PROTOCOL_ID).
    ReservedProtocolId { id: ProtocolId, name: String },
    /// One protocol type is listed under two ids.
    DuplicateProtocol { id: ProtocolId, name: String },
    /// A built-in type name could not be resolved.
    Load(LoadError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::TagOutOfRange { tag, name } => write!(
                f,
                "ID {} ({}) is bigger than MAX_MAGIC_VALUE ({}); increase MAX_MAGIC_VALUE",
                tag, name, MAX_MAGIC_VALUE
            ),
            InitError::DuplicateTag { tag, name } => write!(
                f,
                "key {} ({}) is already in magic map; make sure that all keys are unique",
                tag, name
            ),
            InitError::DuplicateType {
                name,
                tag,
                existing,
            } => write!(
                f,
                "type {} listed under key {} is already in magic map under key {}",
                name, tag, existing
            ),
            InitError::ReservedProtocolId { id, name } => write!(
                f,
                "ID {} ({}) is reserved for protocols without an ID",
                id, name
            ),
            InitError::DuplicateProtocol { id, name } => write!(
                f,
                "ID {} ({}) is already in protocol-id map; make sure that all protocol IDs are unique",
                id, name
            ),
            InitError::Load(e) => write!(f, "built-in table: {}", e),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoadError> for InitError {
    fn from(e: LoadError) -> Self {
        InitError::Load(e)
    }
}

// ---------------------------------------------------------------------------
// RegisterError
// ---------------------------------------------------------------------------

/// Rejected runtime registration. Existing state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Tag lies in the built-in range.
    ReservedTag(TypeTag),
    /// Tag already maps to another user type.
    TagTaken {
        tag: TypeTag,
        name: String,
        existing: String,
    },
    /// Type already holds a tag (built-in or user).
    TypeTaken { name: String, existing: TypeTag },
    /// Protocol id lies in the built-in range.
    ReservedProtocolId(ProtocolId),
    /// Protocol type already holds an id.
    ProtocolTaken { name: String, existing: ProtocolId },
    /// Type name could not be resolved by the loader.
    Load(LoadError),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::ReservedTag(tag) => write!(
                f,
                "magic number ({}) needs to be at least {}",
                tag, MIN_CUSTOM_MAGIC_NUMBER
            ),
            RegisterError::TagTaken {
                tag,
                name,
                existing,
            } => write!(
                f,
                "magic number {} for type {} is already taken by {}",
                tag, name, existing
            ),
            RegisterError::TypeTaken { name, existing } => {
                write!(f, "type {} is already present (magic number {})", name, existing)
            }
            RegisterError::ReservedProtocolId(id) => write!(
                f,
                "protocol ID ({}) needs to be greater than {}",
                id, MIN_CUSTOM_PROTOCOL_ID
            ),
            RegisterError::ProtocolTaken { name, existing } => {
                write!(f, "protocol {} is already present (ID {})", name, existing)
            }
            RegisterError::Load(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegisterError::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoadError> for RegisterError {
    fn from(e: LoadError) -> Self {
        RegisterError::Load(e)
    }
}
