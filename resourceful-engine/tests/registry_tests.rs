mod common;

use common::ScriptedEngine;
use resourceful_engine::{
    init, Engine, EngineConfig, EngineError, EngineFactory, EngineRegistry, Host,
    BASE_ENGINE_NAME,
};
use std::sync::Arc;

fn scripted_factory() -> EngineFactory {
    Arc::new(|config: EngineConfig, _host: &Host| {
        Ok(Arc::new(ScriptedEngine::with_config(config)) as Arc<dyn Engine>)
    })
}

#[test]
fn new_registry_is_empty() {
    let registry = EngineRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.names().is_empty());
}

#[test]
fn init_registers_base_engine() {
    let mut registry = EngineRegistry::new();
    init(&mut registry);
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(BASE_ENGINE_NAME));
    assert_eq!(registry.names(), vec!["BaseEngine"]);
}

#[test]
fn resolve_unknown_engine_fails() {
    let registry = EngineRegistry::new();
    let err = registry.resolve("Couchdb").err().unwrap();
    assert!(matches!(err, EngineError::UnknownEngine(ref name) if name == "Couchdb"));
    assert_eq!(err.to_string(), "unknown engine: Couchdb");
}

#[test]
fn create_constructs_from_config() {
    let mut registry = EngineRegistry::new();
    init(&mut registry);

    let engine = registry
        .create("BaseEngine", EngineConfig::with_uri("dummy"), &Host::default())
        .unwrap();
    assert_eq!(engine.base().base_uri(), "dummy/");
    assert_eq!(engine.protocol(), "baseengine");
}

#[test]
fn create_surfaces_configuration_errors() {
    let mut registry = EngineRegistry::new();
    init(&mut registry);

    let err = registry
        .create("BaseEngine", EngineConfig::default(), &Host::default())
        .err()
        .unwrap();
    assert!(matches!(err, EngineError::Configuration(_)));
}

#[test]
fn register_replaces_existing_entry() {
    let mut registry = EngineRegistry::new();
    init(&mut registry);
    registry.register(BASE_ENGINE_NAME, scripted_factory());

    assert_eq!(registry.len(), 1);
    let engine = registry
        .create(
            BASE_ENGINE_NAME,
            EngineConfig::with_uri("dummy").protocol("scripted"),
            &Host::default(),
        )
        .unwrap();
    assert_eq!(engine.protocol(), "scripted");
}

#[test]
fn registries_are_independent() {
    let mut a = EngineRegistry::new();
    let b = EngineRegistry::new();
    init(&mut a);
    assert!(a.contains(BASE_ENGINE_NAME));
    assert!(!b.contains(BASE_ENGINE_NAME));
}

#[test]
fn debug_lists_engine_names() {
    let mut registry = EngineRegistry::new();
    init(&mut registry);
    registry.register("Memory", scripted_factory());
    let debug = format!("{registry:?}");
    assert!(debug.contains("BaseEngine"));
    assert!(debug.contains("Memory"));
}
