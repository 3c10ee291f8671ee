// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Magic number registry: tag <-> type and protocol id <-> protocol type.
//!
//! # Architecture
//!
//! ```text
//! ClassRegistry
//! +-- magic_map:  Box<[Option<TypeHandle>]>            (built-in, tag < 150, immutable)
//! +-- builtin:    HashMap<TypeHandle, TypeTag>         (reverse of magic_map, immutable)
//! +-- user:       RwLock<UserTypes>                   (tag >= 1024)
//! |   +-- by_tag:  HashMap<TypeTag, TypeHandle>
//! |   +-- by_type: HashMap<TypeHandle, TypeTag>
//! +-- protocols:  RwLock<ProtocolTables>               (built-in + custom id > 512)
//!     +-- ids:     HashMap<TypeHandle, ProtocolId>
//!     +-- by_id:   HashMap<ProtocolId, TypeHandle>
//! ```
//!
//! # Thread Safety
//!
//! - Built-in tables: written once in the constructor, read without locking
//! - `user`: both directions sit under one lock so `resolve` and `tag_of`
//!   always agree
//! - Lookups take read locks only and never block each other

use std::collections::HashMap;
use std::fmt::{self, Write as _};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{
    is_builtin_tag, ProtocolId, RegistryConfig, TypeTag, MAX_MAGIC_VALUE,
    MIN_CUSTOM_MAGIC_NUMBER, MIN_CUSTOM_PROTOCOL_ID, UNSET_PROTOCOL_ID,
};
use crate::error::{InitError, RegisterError};
use crate::handle::TypeHandle;
use crate::loader::TypeLoader;

#[derive(Default)]
struct UserTypes {
    by_tag: HashMap<TypeTag, TypeHandle>,
    by_type: HashMap<TypeHandle, TypeTag>,
}

#[derive(Default)]
struct ProtocolTables {
    ids: HashMap<TypeHandle, ProtocolId>,
    by_id: HashMap<ProtocolId, TypeHandle>,
}

/// Process-wide mapping between wire tags and the types they stand for.
///
/// Built once from a [`RegistryConfig`], then extended at runtime with
/// [`register_type`](Self::register_type) and
/// [`register_protocol`](Self::register_protocol). Share it by reference or
/// `Arc`; every method takes `&self`.
pub struct ClassRegistry {
    magic_map: Box<[Option<TypeHandle>]>,
    builtin: HashMap<TypeHandle, TypeTag>,
    user: RwLock<UserTypes>,
    protocols: RwLock<ProtocolTables>,
    loader: Arc<dyn TypeLoader>,
}

impl ClassRegistry {
    /// Build a registry from the compiled-in tables.
    ///
    /// # Errors
    ///
    /// Any [`InitError`]: the built-in tables are unusable and the host
    /// must not start.
    pub fn new(loader: Arc<dyn TypeLoader>) -> Result<Self, InitError> {
        Self::with_config(RegistryConfig::default(), loader)
    }

    /// Build a registry from explicit built-in tables.
    ///
    /// # Errors
    ///
    /// - [`InitError::TagOutOfRange`] if a tag does not fit the magic map
    /// - [`InitError::Load`] if the loader cannot resolve a name
    /// - [`InitError::DuplicateTag`] / [`InitError::DuplicateType`] if the
    ///   type table is not a bijection
    /// - [`InitError::ReservedProtocolId`] if a protocol uses id `0`
    /// - [`InitError::DuplicateProtocol`] if a protocol type is listed twice
    pub fn with_config(
        config: RegistryConfig<'_>,
        loader: Arc<dyn TypeLoader>,
    ) -> Result<Self, InitError> {
        let mut magic_map: Box<[Option<TypeHandle>]> =
            vec![None; usize::from(MAX_MAGIC_VALUE)].into_boxed_slice();
        let mut builtin: HashMap<TypeHandle, TypeTag> =
            HashMap::with_capacity(config.types.len());

        for &(tag, name) in config.types {
            if tag >= MAX_MAGIC_VALUE {
                return Err(InitError::TagOutOfRange {
                    tag,
                    name: name.to_string(),
                });
            }
            let handle = loader.load(name)?;
            let slot = &mut magic_map[usize::from(tag)];
            if slot.is_some() {
                return Err(InitError::DuplicateTag {
                    tag,
                    name: handle.name().to_string(),
                });
            }
            if let Some(&existing) = builtin.get(&handle) {
                return Err(InitError::DuplicateType {
                    name: handle.name().to_string(),
                    tag,
                    existing,
                });
            }
            *slot = Some(handle.clone());
            builtin.insert(handle, tag);
        }

        let mut protocols = ProtocolTables::default();
        for &(id, name) in config.protocols {
            if id == UNSET_PROTOCOL_ID {
                return Err(InitError::ReservedProtocolId {
                    id,
                    name: name.to_string(),
                });
            }
            let handle = loader.load(name)?;
            if protocols.ids.contains_key(&handle) {
                return Err(InitError::DuplicateProtocol {
                    id,
                    name: handle.name().to_string(),
                });
            }
            protocols.ids.insert(handle.clone(), id);
            protocols.by_id.insert(id, handle);
        }

        log::info!(
            "class registry ready: {} built-in types, {} protocols",
            builtin.len(),
            protocols.ids.len()
        );

        Ok(Self {
            magic_map,
            builtin,
            user: RwLock::new(UserTypes::default()),
            protocols: RwLock::new(protocols),
            loader,
        })
    }

    // ===================================================================
    // Registration
    // ===================================================================

    /// Register a user-defined type under `tag`.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::ReservedTag`] if `tag < 1024`
    /// - [`RegisterError::TagTaken`] if another type holds `tag`
    /// - [`RegisterError::TypeTaken`] if `handle` already holds a tag
    pub fn register_type(&self, tag: TypeTag, handle: TypeHandle) -> Result<(), RegisterError> {
        if tag < MIN_CUSTOM_MAGIC_NUMBER {
            log::debug!("rejecting {} under reserved tag {}", handle, tag);
            return Err(RegisterError::ReservedTag(tag));
        }

        let mut user = self.user.write();
        if let Some(current) = user.by_tag.get(&tag) {
            log::debug!("rejecting {}: tag {} held by {}", handle, tag, current);
            return Err(RegisterError::TagTaken {
                tag,
                name: handle.name().to_string(),
                existing: current.name().to_string(),
            });
        }
        let existing = self
            .builtin
            .get(&handle)
            .or_else(|| user.by_type.get(&handle))
            .copied();
        if let Some(existing) = existing {
            log::debug!("rejecting {}: already under tag {}", handle, existing);
            return Err(RegisterError::TypeTaken {
                name: handle.name().to_string(),
                existing,
            });
        }
        user.by_tag.insert(tag, handle.clone());
        user.by_type.insert(handle.clone(), tag);
        drop(user);

        log::debug!("registered {} as magic number {}", handle, tag);
        Ok(())
    }

    /// Resolve `name` with the registry's loader, then [`register_type`](Self::register_type).
    ///
    /// # Errors
    ///
    /// [`RegisterError::Load`] if the name does not resolve, otherwise as
    /// [`register_type`](Self::register_type).
    pub fn register_type_name(
        &self,
        tag: TypeTag,
        name: &str,
    ) -> Result<TypeHandle, RegisterError> {
        let handle = self.loader.load(name)?;
        self.register_type(tag, handle.clone())?;
        Ok(handle)
    }

    /// Register a user-defined protocol layer under `id`.
    ///
    /// Only the protocol type is checked for uniqueness. A second protocol
    /// under an already used `id` replaces the `id -> protocol` entry while
    /// the first keeps its `protocol -> id` entry.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::ReservedProtocolId`] if `id <= 512`
    /// - [`RegisterError::ProtocolTaken`] if `handle` already holds an id
    pub fn register_protocol(
        &self,
        id: ProtocolId,
        handle: TypeHandle,
    ) -> Result<(), RegisterError> {
        if id <= MIN_CUSTOM_PROTOCOL_ID {
            log::debug!("rejecting protocol {} under reserved id {}", handle, id);
            return Err(RegisterError::ReservedProtocolId(id));
        }

        let mut protocols = self.protocols.write();
        if let Some(&existing) = protocols.ids.get(&handle) {
            log::debug!("rejecting protocol {}: already under id {}", handle, existing);
            return Err(RegisterError::ProtocolTaken {
                name: handle.name().to_string(),
                existing,
            });
        }
        protocols.ids.insert(handle.clone(), id);
        if let Some(previous) = protocols.by_id.insert(id, handle.clone()) {
            log::debug!("protocol id {} moved from {} to {}", id, previous, handle);
        }
        drop(protocols);

        log::debug!("registered protocol {} as id {}", handle, id);
        Ok(())
    }

    /// Resolve `name` with the registry's loader, then [`register_protocol`](Self::register_protocol).
    ///
    /// # Errors
    ///
    /// [`RegisterError::Load`] if the name does not resolve, otherwise as
    /// [`register_protocol`](Self::register_protocol).
    pub fn register_protocol_name(
        &self,
        id: ProtocolId,
        name: &str,
    ) -> Result<TypeHandle, RegisterError> {
        let handle = self.loader.load(name)?;
        self.register_protocol(id, handle.clone())?;
        Ok(handle)
    }

    // ===================================================================
    // Lookup
    // ===================================================================

    /// Type registered under `tag`, if any.
    #[must_use]
    pub fn resolve(&self, tag: TypeTag) -> Option<TypeHandle> {
        if is_builtin_tag(tag) {
            self.magic_map.get(usize::from(tag)).and_then(Clone::clone)
        } else {
            self.user.read().by_tag.get(&tag).cloned()
        }
    }

    /// Load `name` through the registry's loader.
    ///
    /// Loader failures are logged and reported as `None`: callers probe
    /// candidate names and treat a miss as "unknown type".
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<TypeHandle> {
        match self.loader.load(name) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("failed loading type {}: {}", name, e);
                None
            }
        }
    }

    /// Tag of `handle`, or `None` if it was never registered.
    #[must_use]
    pub fn tag_of(&self, handle: &TypeHandle) -> Option<TypeTag> {
        if let Some(&tag) = self.builtin.get(handle) {
            return Some(tag);
        }
        self.user.read().by_type.get(handle).copied()
    }

    /// Protocol id of `handle`, or [`UNSET_PROTOCOL_ID`] (`0`) when unknown.
    #[must_use]
    pub fn protocol_id_of(&self, handle: &TypeHandle) -> ProtocolId {
        self.protocols
            .read()
            .ids
            .get(handle)
            .copied()
            .unwrap_or(UNSET_PROTOCOL_ID)
    }

    /// Protocol registered under `id`, if any.
    #[must_use]
    pub fn protocol_of(&self, id: ProtocolId) -> Option<TypeHandle> {
        self.protocols.read().by_id.get(&id).cloned()
    }

    /// Loader this registry resolves names with.
    #[must_use]
    pub fn loader(&self) -> &Arc<dyn TypeLoader> {
        &self.loader
    }

    // ===================================================================
    // Snapshots & diagnostics
    // ===================================================================

    /// Every registered `(tag, type)`, built-in then user, ascending by tag.
    #[must_use]
    pub fn type_entries(&self) -> Vec<(TypeTag, TypeHandle)> {
        let mut entries: Vec<(TypeTag, TypeHandle)> = self
            .magic_map
            .iter()
            .enumerate()
            .filter_map(|(tag, slot)| {
                let handle = slot.as_ref()?;
                Some((TypeTag::try_from(tag).ok()?, handle.clone()))
            })
            .collect();

        let user = self.user.read();
        let first_user = entries.len();
        entries.extend(user.by_tag.iter().map(|(tag, h)| (*tag, h.clone())));
        drop(user);

        entries[first_user..].sort_unstable_by_key(|(tag, _)| *tag);
        entries
    }

    /// Every registered `(id, protocol)`, ascending by id.
    #[must_use]
    pub fn protocol_entries(&self) -> Vec<(ProtocolId, TypeHandle)> {
        let mut entries: Vec<(ProtocolId, TypeHandle)> = self
            .protocols
            .read()
            .by_id
            .iter()
            .map(|(id, h)| (*id, h.clone()))
            .collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        entries
    }

    /// Number of registered types (built-in and user).
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.builtin.len() + self.user.read().by_tag.len()
    }

    /// Number of protocol types holding an id.
    #[must_use]
    pub fn protocol_count(&self) -> usize {
        self.protocols.read().ids.len()
    }

    /// One `"<tag>:\t<type>"` line per registered tag, ascending.
    #[must_use]
    pub fn describe_tag_table(&self) -> String {
        let mut out = String::new();
        for (tag, handle) in self.type_entries() {
            let _ = writeln!(out, "{}:\t{}", tag, handle);
        }
        out
    }

    /// One `"<type>: <tag>"` line per registered type, in no particular order.
    #[must_use]
    pub fn describe_reverse_table(&self) -> String {
        let mut out = String::new();
        for (handle, tag) in &self.builtin {
            let _ = writeln!(out, "{}: {}", handle, tag);
        }
        for (handle, tag) in &self.user.read().by_type {
            let _ = writeln!(out, "{}: {}", handle, tag);
        }
        out
    }

    /// One `"<id>:\t<protocol>"` line per protocol id, ascending.
    #[must_use]
    pub fn describe_protocol_table(&self) -> String {
        let mut out = String::new();
        for (id, handle) in self.protocol_entries() {
            let _ = writeln!(out, "{}:\t{}", id, handle);
        }
        out
    }
}

impl fmt::Display for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe_tag_table())
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassRegistry")
            .field("builtin_types", &self.builtin.len())
            .field("user_types", &self.user.read().by_tag.len())
            .field("protocols", &self.protocol_count())
            .finish_non_exhaustive()
    }
}
