// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Optional process-wide registry.
//!
//! Hosts that prefer passing an `Arc<ClassRegistry>` around never touch this
//! module. Others publish one registry at bootstrap and fetch it anywhere
//! with [`get`]. Publication happens once; later attempts observe the first
//! value.

use std::sync::{Arc, OnceLock};

use crate::error::InitError;
use crate::loader::TypeLoader;
use crate::registry::ClassRegistry;

// @audit-ok: Global registry published once via OnceLock, read-only handle afterwards.
static REGISTRY: OnceLock<ClassRegistry> = OnceLock::new();

/// Publish `registry` unless one is already installed.
///
/// Returns the installed registry, which is `registry` only for the first
/// caller.
pub fn install(registry: ClassRegistry) -> &'static ClassRegistry {
    let mut fresh = false;
    let installed = REGISTRY.get_or_init(|| {
        fresh = true;
        registry
    });
    if fresh {
        log::debug!("installed process-wide class registry");
    } else {
        log::debug!("class registry already installed, dropping new instance");
    }
    installed
}

/// Build a registry from the compiled-in tables and publish it.
///
/// # Errors
///
/// Propagates [`InitError`] from [`ClassRegistry::new`]. Does nothing (and
/// cannot fail) if a registry is already installed.
pub fn init(loader: Arc<dyn TypeLoader>) -> Result<&'static ClassRegistry, InitError> {
    if let Some(existing) = REGISTRY.get() {
        return Ok(existing);
    }
    let registry = ClassRegistry::new(loader)?;
    Ok(install(registry))
}

/// The installed registry, if any.
#[must_use]
pub fn get() -> Option<&'static ClassRegistry> {
    REGISTRY.get()
}
