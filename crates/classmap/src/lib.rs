// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # classmap - magic number registry for group-communication wire formats
//!
//! Serialized messages carry a 2-byte tag ("magic number") instead of a
//! fully-qualified type name. `classmap` owns the mapping between those
//! tags and the types they stand for, plus the separate protocol-id space
//! used by the protocol-stack assembler.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use classmap::{ClassRegistry, TypeCatalog, TypeHandle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ClassRegistry::new(Arc::new(TypeCatalog::builtin()))?;
//!
//! // Built-in tags resolve straight away
//! let message = registry.resolve(30).expect("built-in");
//! assert_eq!(message.name(), "org.jgroups.Message");
//! assert_eq!(registry.tag_of(&message), Some(30));
//!
//! // Applications add their own headers above the reserved range
//! let header = TypeHandle::new("com.example.AuditHeader");
//! registry.register_type(2048, header.clone())?;
//! assert_eq!(registry.resolve(2048), Some(header));
//! # Ok(())
//! # }
//! ```
//!
//! ## Tag spaces
//!
//! | Space | Built-in | Custom |
//! |-------|----------|--------|
//! | Type tags | `0..150` (compiled-in) | `>= 1024` via [`ClassRegistry::register_type`] |
//! | Protocol ids | small integers | `> 512` via [`ClassRegistry::register_protocol`] |
//!
//! ## Modules Overview
//!
//! - [`registry`] - the registry itself
//! - [`config`] - wire constants and construction-time tables
//! - [`builtin`] - compiled-in tag and protocol tables
//! - [`loader`] - the injected name -> type capability
//! - [`global`] - optional process-wide instance

pub mod builtin;
pub mod config;
pub mod error;
pub mod global;
pub mod handle;
pub mod loader;
pub mod registry;

pub use config::{
    ProtocolId, RegistryConfig, TypeTag, MAX_MAGIC_VALUE, MIN_CUSTOM_MAGIC_NUMBER,
    MIN_CUSTOM_PROTOCOL_ID, UNSET_PROTOCOL_ID,
};
pub use error::{InitError, LoadError, LoadErrorKind, RegisterError};
pub use handle::TypeHandle;
pub use loader::{TypeCatalog, TypeLoader};
pub use registry::ClassRegistry;
