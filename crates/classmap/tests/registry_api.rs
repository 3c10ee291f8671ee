// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test readability over pedantic
#![allow(clippy::unreadable_literal)] // Tag constants
#![allow(clippy::missing_panics_doc)] // Tests panic on failure

//! Public API integration tests for the class registry.
//!
//! Validates the wire tables, the custom ranges and the lookup contract
//! as seen by the serialization layer and the protocol-stack assembler.

use classmap::builtin::{MAGIC_MAP, PROTOCOL_IDS};
use classmap::{
    ClassRegistry, InitError, LoadError, RegisterError, RegistryConfig, TypeCatalog, TypeHandle,
    TypeLoader, MIN_CUSTOM_MAGIC_NUMBER, MIN_CUSTOM_PROTOCOL_ID,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn registry() -> (ClassRegistry, Arc<TypeCatalog>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let catalog = Arc::new(TypeCatalog::builtin());
    let registry = ClassRegistry::new(catalog.clone()).unwrap();
    (registry, catalog)
}

#[test]
fn test_wire_tags_match_reference_stack() {
    let (registry, _) = registry();
    let expected = [
        (1, "org.jgroups.stack.IpAddress"),
        (7, "org.jgroups.protocols.FragHeader"),
        (24, "org.jgroups.protocols.pbcast.GMS$GmsHeader"),
        (31, "org.jgroups.View"),
        (68, "org.jgroups.util.UUID"),
        (102, "org.jgroups.protocols.relay.CanBeSiteMasterTopology"),
    ];
    for (tag, name) in expected {
        assert_eq!(registry.resolve(tag).unwrap().name(), name, "tag {}", tag);
    }
}

#[test]
fn test_every_builtin_resolves_and_reverses() {
    let (registry, catalog) = registry();
    for &(tag, name) in MAGIC_MAP {
        let by_name = registry.resolve_name(name).unwrap();
        assert_eq!(registry.resolve(tag), Some(by_name.clone()));
        assert_eq!(registry.tag_of(&by_name), Some(tag));
        assert_eq!(catalog.get(name), Some(by_name));
    }
    for &(id, name) in PROTOCOL_IDS {
        let protocol = registry.resolve_name(name).unwrap();
        assert_eq!(registry.protocol_id_of(&protocol), id);
        assert_eq!(registry.protocol_of(id), Some(protocol));
    }
}

#[test]
fn test_custom_ranges_boundaries() {
    let (registry, _) = registry();

    let low = TypeHandle::new("app.Low");
    assert!(matches!(
        registry.register_type(MIN_CUSTOM_MAGIC_NUMBER - 1, low.clone()),
        Err(RegisterError::ReservedTag(1023))
    ));
    registry
        .register_type(MIN_CUSTOM_MAGIC_NUMBER, low.clone())
        .unwrap();
    assert_eq!(registry.tag_of(&low), Some(1024));

    let proto = TypeHandle::new("app.PROTO");
    assert!(matches!(
        registry.register_protocol(MIN_CUSTOM_PROTOCOL_ID, proto.clone()),
        Err(RegisterError::ReservedProtocolId(512))
    ));
    registry
        .register_protocol(MIN_CUSTOM_PROTOCOL_ID + 1, proto.clone())
        .unwrap();
    assert_eq!(registry.protocol_id_of(&proto), 513);
}

#[test]
fn test_conflicts_leave_state_intact() {
    let (registry, _) = registry();
    let a = TypeHandle::new("app.A");
    let b = TypeHandle::new("app.B");

    registry.register_type(4242, a.clone()).unwrap();
    assert!(registry.register_type(4242, b.clone()).is_err());
    assert!(registry.register_type(4243, a.clone()).is_err());

    assert_eq!(registry.resolve(4242), Some(a.clone()));
    assert_eq!(registry.tag_of(&a), Some(4242));
    assert!(registry.tag_of(&b).is_none());
    assert!(registry.resolve(4243).is_none());

    // b is still free for another tag
    registry.register_type(4243, b.clone()).unwrap();
    assert_eq!(registry.tag_of(&b), Some(4243));
}

#[test]
fn test_registration_order_does_not_matter() {
    let (forward, _) = registry();
    let (backward, _) = registry();
    let x = TypeHandle::new("app.X");
    let y = TypeHandle::new("app.Y");

    forward.register_type(1100, x.clone()).unwrap();
    forward.register_type(1200, y.clone()).unwrap();
    backward.register_type(1200, y.clone()).unwrap();
    backward.register_type(1100, x.clone()).unwrap();

    assert_eq!(forward.describe_tag_table(), backward.describe_tag_table());
    assert_eq!(forward.tag_of(&x), backward.tag_of(&x));
}

#[test]
fn test_unregistered_lookups() {
    let (registry, _) = registry();
    let unknown = TypeHandle::new("app.Unknown");
    assert_eq!(registry.tag_of(&unknown), None);
    assert_eq!(registry.protocol_id_of(&unknown), 0);
    assert_eq!(registry.resolve(60000), None);
    assert_eq!(registry.resolve_name("app.Unknown"), None);
}

#[test]
fn test_tag_table_merges_builtin_and_user() {
    let (registry, _) = registry();
    registry.register_type(65535, TypeHandle::new("app.Max")).unwrap();
    registry.register_type(1024, TypeHandle::new("app.Min")).unwrap();

    let first = registry.describe_tag_table();
    let lines: Vec<&str> = first.lines().collect();
    assert_eq!(lines.len(), MAGIC_MAP.len() + 2);
    assert_eq!(lines[lines.len() - 2], "1024:\tapp.Min");
    assert_eq!(lines[lines.len() - 1], "65535:\tapp.Max");
    assert_eq!(
        lines[lines.len() - 3],
        "102:\torg.jgroups.protocols.relay.CanBeSiteMasterTopology"
    );
    assert_eq!(first, registry.describe_tag_table());
}

#[test]
fn test_host_supplied_loader() {
    let calls = Arc::new(AtomicUsize::new(0));
    let catalog = TypeCatalog::builtin();
    let counter = calls.clone();
    let loader = move |name: &str| -> Result<TypeHandle, LoadError> {
        counter.fetch_add(1, Ordering::Relaxed);
        catalog.load(name)
    };

    let registry = ClassRegistry::new(Arc::new(loader)).unwrap();
    assert_eq!(
        calls.load(Ordering::Relaxed),
        MAGIC_MAP.len() + PROTOCOL_IDS.len()
    );

    assert!(registry.resolve_name("org.jgroups.View").is_some());
    assert!(registry.resolve_name("com.example.Missing").is_none());
}

#[test]
fn test_host_tables_extend_builtin_set() {
    let mut types = MAGIC_MAP.to_vec();
    types.push((140, "com.example.VendorHeader"));
    let config = RegistryConfig::new(&types, PROTOCOL_IDS);

    let registry = ClassRegistry::with_config(config, Arc::new(TypeCatalog::open())).unwrap();
    assert_eq!(
        registry.resolve(140).unwrap().name(),
        "com.example.VendorHeader"
    );
    assert_eq!(registry.type_count(), MAGIC_MAP.len() + 1);
}

#[test]
fn test_bad_tables_fail_construction() {
    let loader = || Arc::new(TypeCatalog::open());

    let out_of_range = [(200, "a.Big")];
    assert!(matches!(
        ClassRegistry::with_config(RegistryConfig::new(&out_of_range, &[]), loader()),
        Err(InitError::TagOutOfRange { tag: 200, .. })
    ));

    let duplicate = [(5, "a.One"), (5, "a.Two")];
    assert!(matches!(
        ClassRegistry::with_config(RegistryConfig::new(&duplicate, &[]), loader()),
        Err(InitError::DuplicateTag { tag: 5, .. })
    ));

    let unknown = [(5, "a.Missing")];
    let strict = Arc::new(TypeCatalog::strict(std::iter::empty()));
    assert!(matches!(
        ClassRegistry::with_config(RegistryConfig::new(&unknown, &[]), strict),
        Err(InitError::Load(_))
    ));
}
