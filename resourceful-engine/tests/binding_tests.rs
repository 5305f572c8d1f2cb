mod common;

use common::{doc, ScriptedEngine, STORE_URI};
use pretty_assertions::assert_eq;
use resourceful_engine::{
    init, Capabilities, Document, EngineConfig, EngineError, EngineRegistry, Host, Method,
    Operation, ResourceBinding,
};
use serde_json::json;
use std::sync::Arc;

fn bind(engine: ScriptedEngine) -> (ResourceBinding, Arc<ScriptedEngine>) {
    let engine = Arc::new(engine);
    (ResourceBinding::new("Company", engine.clone()), engine)
}

// ── Binding through the registry ─────────────────────────────────

#[tokio::test]
async fn bind_dummy_to_base_engine() {
    let mut registry = EngineRegistry::new();
    init(&mut registry);
    let binding = ResourceBinding::bind(
        &registry,
        &Host::default(),
        "dummy",
        "BaseEngine",
        EngineConfig::with_uri("dummy"),
    )
    .unwrap();
    assert_eq!(binding.name(), "dummy");

    let err = binding.destroy("06675651").await.unwrap_err();
    assert_eq!(err.to_string(), "No delete method.");

    let err = binding.get("06675651").await.unwrap_err();
    assert_eq!(err.to_string(), "No get method.");

    let err = binding.create(Document::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "No post method.");
}

#[test]
fn bind_unknown_engine_fails() {
    let registry = EngineRegistry::new();
    let err = ResourceBinding::bind(
        &registry,
        &Host::default(),
        "dummy",
        "Couchdb",
        EngineConfig::with_uri("dummy"),
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::UnknownEngine(_)));
}

// ── Resource tagging ─────────────────────────────────────────────

#[tokio::test]
async fn create_tags_resource_and_targets_collection() {
    let (binding, engine) = bind(ScriptedEngine::new());
    engine.respond_ok(Method::Post, json!({}));

    binding.create(doc(json!({"name": "acme"}))).await.unwrap();

    let posts = engine.calls_for(Method::Post);
    assert_eq!(posts[0].doc, Some(doc(json!({"name": "acme", "resource": "Company"}))));
    assert_eq!(posts[0].target, format!("{STORE_URI}/companies"));
}

#[tokio::test]
async fn create_keeps_explicit_resource() {
    let (binding, engine) = bind(ScriptedEngine::new());
    engine.respond_ok(Method::Post, json!({}));

    binding.create(doc(json!({"resource": "Branch"}))).await.unwrap();
    assert_eq!(
        engine.calls_for(Method::Post)[0].target,
        format!("{STORE_URI}/branches")
    );
}

#[tokio::test]
async fn save_without_id_tags_resource() {
    let (binding, engine) = bind(ScriptedEngine::new());
    engine.respond_ok(Method::Post, json!({}));

    binding.save(None, doc(json!({}))).await.unwrap();
    let posts = engine.calls_for(Method::Post);
    assert_eq!(posts[0].doc, Some(doc(json!({"resource": "Company"}))));
}

#[tokio::test]
async fn save_with_id_leaves_doc_untouched() {
    let (binding, engine) = bind(ScriptedEngine::new());
    engine.respond_ok(Method::Put, json!({}));

    binding.save(Some("c1"), doc(json!({"a": 1}))).await.unwrap();
    let puts = engine.calls_for(Method::Put);
    assert_eq!(puts[0].doc, Some(doc(json!({"a": 1}))));
}

// ── Capability gating ────────────────────────────────────────────

#[tokio::test]
async fn operations_outside_capabilities_never_reach_engine() {
    let (binding, engine) =
        bind(ScriptedEngine::new().with_capabilities(Capabilities::base().without(Operation::Destroy)));

    let err = binding.destroy("c1").await.unwrap_err();
    assert_eq!(err.to_string(), "Method destroy is not available for engine scripted");
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn read_only_engine_refuses_writes() {
    let read_only = Capabilities::from_iter([Operation::Get, Operation::Head]);
    let (binding, engine) = bind(ScriptedEngine::new().with_capabilities(read_only));
    engine.respond_ok(Method::Get, json!({"name": "acme"}));

    assert!(binding.get("c1").await.is_ok());
    for err in [
        binding.put("c1", doc(json!({}))).await.unwrap_err(),
        binding.post(doc(json!({}))).await.unwrap_err(),
        binding.save(Some("c1"), doc(json!({}))).await.unwrap_err(),
        binding.update("c1", doc(json!({}))).await.unwrap_err(),
        binding.request(Method::Get, Some("c1"), None).await.unwrap_err(),
    ] {
        assert!(err.is_unsupported(), "{err:?}");
    }
    assert_eq!(engine.calls().len(), 1);
}

#[tokio::test]
async fn declared_capability_without_override_still_fails() {
    let (binding, _engine) = bind(ScriptedEngine::new().with_capabilities(Capabilities::all()));
    let err = binding.all().await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Unsupported { operation: Operation::All, .. }
    ));
}

#[tokio::test]
async fn head_and_update_dispatch_when_supported() {
    let (binding, engine) = bind(ScriptedEngine::new());
    engine.respond_ok(Method::Head, json!({"status": 200}));
    engine.respond_ok(Method::Get, json!({"status": 404}));
    engine.respond_ok(Method::Put, json!({}));

    assert_eq!(binding.head("c1").await.unwrap().status(), Some(200));
    assert!(binding.update("c1", doc(json!({"a": 1}))).await.unwrap().is_written());
}

#[test]
fn debug_shows_name_and_base() {
    let (binding, _engine) = bind(ScriptedEngine::new());
    let debug = format!("{binding:?}");
    assert!(debug.contains("Company"));
    assert!(debug.contains(STORE_URI));
}
