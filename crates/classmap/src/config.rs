// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry constants and construction-time configuration.
//!
//! # Architecture
//!
//! - **Level 1 (Static)**: wire-contract constants (tag ranges, protocol ids)
//! - **Level 2 (Construction)**: [`RegistryConfig`], the built-in tables a
//!   [`ClassRegistry`](crate::ClassRegistry) is built from
//!
//! The constants below must match every peer on the wire. **Never change
//! them locally.**

use crate::builtin;

/// Compact wire identifier of a serializable type (a "magic number").
pub type TypeTag = u16;

/// Identifier of a protocol-stack layer type.
pub type ProtocolId = u16;

// =======================================================================
// Wire contract
// =======================================================================

/// Capacity of the built-in magic map. Built-in tags index a fixed array,
/// so every built-in tag must be strictly below this value.
pub const MAX_MAGIC_VALUE: TypeTag = 150;

/// Smallest tag accepted by [`ClassRegistry::register_type`].
///
/// Tags below this value are reserved for the built-in table.
///
/// [`ClassRegistry::register_type`]: crate::ClassRegistry::register_type
pub const MIN_CUSTOM_MAGIC_NUMBER: TypeTag = 1024;

/// Custom protocol ids must be strictly greater than this value.
pub const MIN_CUSTOM_PROTOCOL_ID: ProtocolId = 512;

/// Returned by [`ClassRegistry::protocol_id_of`] for unknown protocols.
/// Never assigned to a real protocol.
///
/// [`ClassRegistry::protocol_id_of`]: crate::ClassRegistry::protocol_id_of
pub const UNSET_PROTOCOL_ID: ProtocolId = 0;

// =======================================================================
// Construction-time tables
// =======================================================================

/// Built-in tables consumed once by the registry constructor.
///
/// `Default` yields the compiled-in wire tables. Hosts that ship extra
/// built-ins (or tests exercising the fatal paths) pass their own slices.
///
/// ```
/// use classmap::config::RegistryConfig;
///
/// let cfg = RegistryConfig::default();
/// assert!(!cfg.types.is_empty());
///
/// let empty = RegistryConfig::empty();
/// assert!(empty.protocols.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RegistryConfig<'a> {
    /// `(tag, type name)` pairs for messages, headers and addresses.
    pub types: &'a [(TypeTag, &'a str)],
    /// `(id, type name)` pairs for protocol layers.
    pub protocols: &'a [(ProtocolId, &'a str)],
}

impl<'a> RegistryConfig<'a> {
    /// Configuration with the given tables.
    #[must_use]
    pub const fn new(
        types: &'a [(TypeTag, &'a str)],
        protocols: &'a [(ProtocolId, &'a str)],
    ) -> Self {
        Self { types, protocols }
    }

    /// Configuration without any built-in entry.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            types: &[],
            protocols: &[],
        }
    }

    /// Iterate over every type name referenced by both tables.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.types
            .iter()
            .map(|(_, name)| *name)
            .chain(self.protocols.iter().map(|(_, name)| *name))
    }
}

impl Default for RegistryConfig<'static> {
    fn default() -> Self {
        Self::new(builtin::MAGIC_MAP, builtin::PROTOCOL_IDS)
    }
}

/// `true` if `tag` falls in the built-in range.
#[inline]
#[must_use]
pub const fn is_builtin_tag(tag: TypeTag) -> bool {
    tag < MIN_CUSTOM_MAGIC_NUMBER
}
