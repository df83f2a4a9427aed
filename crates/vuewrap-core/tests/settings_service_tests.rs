//! Settings service tests
//!
//! Repair-on-read, patch and replace semantics against an in-memory option store.

mod common;

use serde_json::json;
use std::sync::Arc;

use common::*;
use vuewrap_core::settings::{FieldValue, SettingsService};
use vuewrap_types::error::Error;

#[tokio::test]
async fn test_empty_store_initializes_defaults() {
	let store = Arc::new(MemoryOptionAdapter::new());
	let svc = SettingsService::new(example_schema(), OPTION_NAME, store.clone());

	let record = svc.get_all().await.unwrap();

	let expected = json!({"email": "a@b.com", "sites": "10", "is_guest": true});
	assert_eq!(record.to_json(), expected);
	assert_eq!(store.stored(OPTION_NAME), Some(expected));
	assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn test_get_all_is_idempotent() {
	let store = Arc::new(MemoryOptionAdapter::new());
	let svc = service(store.clone());

	let first = svc.get_all().await.unwrap();
	let second = svc.get_all().await.unwrap();

	assert_eq!(first, second);
	// Only the first read needed a repair
	assert_eq!(store.writes(), 1);
	assert_eq!(store.reads(), 2);
}

#[tokio::test]
async fn test_missing_field_is_backfilled() {
	let store = Arc::new(MemoryOptionAdapter::new().with_option(
		OPTION_NAME,
		json!({"email": "me@example.org", "sites": "3", "is_guest": false, "max_items": 9}),
	));
	let svc = service(store.clone());

	let record = svc.get_all().await.unwrap();

	assert_eq!(record.get("api_key"), Some(&FieldValue::from("dummyApiKey")));
	assert_eq!(record.get("email"), Some(&FieldValue::from("me@example.org")));
	assert_eq!(record.get("is_guest"), Some(&FieldValue::Bool(false)));
	assert_eq!(store.stored(OPTION_NAME).unwrap()["api_key"], "dummyApiKey");
	assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn test_complete_record_is_not_rewritten() {
	let stored = json!({
		"email": "x@y.z", "sites": "1", "is_guest": true, "api_key": "k", "max_items": 2
	});
	let store = Arc::new(MemoryOptionAdapter::new().with_option(OPTION_NAME, stored.clone()));
	let svc = service(store.clone());

	let record = svc.get_all().await.unwrap();

	assert_eq!(record.to_json(), stored);
	assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_malformed_value_resets_to_defaults() {
	for malformed in [json!("not-a-record"), json!([1, 2, 3]), json!(42), serde_json::Value::Null] {
		let store = Arc::new(MemoryOptionAdapter::new().with_option(OPTION_NAME, malformed));
		let svc = service(store.clone());

		let record = svc.get_all().await.unwrap();

		assert_eq!(record, svc.schema().defaults());
		assert_eq!(store.stored(OPTION_NAME), Some(svc.schema().defaults().to_json()));
	}
}

#[tokio::test]
async fn test_unknown_stored_keys_are_preserved() {
	let store = Arc::new(
		MemoryOptionAdapter::new().with_option(OPTION_NAME, json!({"legacy_flag": "on"})),
	);
	let svc = service(store.clone());

	let record = svc.get_all().await.unwrap();

	assert_eq!(record.get("legacy_flag"), Some(&FieldValue::from("on")));
	assert_eq!(record.len(), svc.schema().len() + 1);
}

#[tokio::test]
async fn test_get_one() {
	let store = Arc::new(MemoryOptionAdapter::new());
	let svc = service(store.clone());

	let email = svc.get_one("email", FieldValue::from("fallback")).await.unwrap();
	assert_eq!(email, FieldValue::from("a@b.com"));

	let missing = svc.get_one("nope", FieldValue::from("fallback")).await.unwrap();
	assert_eq!(missing, FieldValue::from("fallback"));
}

#[tokio::test]
async fn test_update_many_is_selective() {
	let store = Arc::new(MemoryOptionAdapter::new());
	let svc = service(store.clone());

	let patch = json!({"api_key": "X", "bogus": "Y"});
	let record = svc.update_many(patch.as_object().unwrap()).await.unwrap();

	assert_eq!(record.get("api_key"), Some(&FieldValue::from("X")));
	assert!(record.get("bogus").is_none());
	assert_eq!(record.get("email"), Some(&FieldValue::from("a@b.com")));

	let stored = store.stored(OPTION_NAME).unwrap();
	assert_eq!(stored["api_key"], "X");
	assert!(stored.get("bogus").is_none());
}

#[tokio::test]
async fn test_update_many_does_not_coerce() {
	let store = Arc::new(MemoryOptionAdapter::new());
	let svc = service(store.clone());

	let patch = json!({"is_guest": "yes", "max_items": "12", "sites": 7});
	let record = svc.update_many(patch.as_object().unwrap()).await.unwrap();

	assert_eq!(record.get("is_guest"), Some(&FieldValue::from("yes")));
	assert_eq!(record.get("max_items"), Some(&FieldValue::from("12")));
	assert_eq!(record.get("sites"), Some(&FieldValue::Int(7)));
}

#[tokio::test]
async fn test_update_many_reads_and_writes_once() {
	// Empty store needs a repair; the repair and the patch share one write
	let store = Arc::new(MemoryOptionAdapter::new());
	let svc = service(store.clone());

	svc.update_many(json!({"email": "new@x.org"}).as_object().unwrap()).await.unwrap();

	assert_eq!(store.reads(), 1);
	assert_eq!(store.writes(), 1);
	assert_eq!(store.stored(OPTION_NAME).unwrap()["email"], "new@x.org");
	assert_eq!(store.stored(OPTION_NAME).unwrap()["sites"], "10");
}

#[tokio::test]
async fn test_update_many_can_touch_unknown_stored_keys() {
	// Keys present in the stored record are patchable even if the schema lacks them
	let store = Arc::new(MemoryOptionAdapter::new().with_option(OPTION_NAME, json!({"legacy": 1})));
	let svc = service(store.clone());

	let record = svc.update_many(json!({"legacy": 2}).as_object().unwrap()).await.unwrap();

	assert_eq!(record.get("legacy"), Some(&FieldValue::Int(2)));
}

#[tokio::test]
async fn test_empty_patch_still_persists() {
	let stored = json!({
		"email": "x@y.z", "sites": "1", "is_guest": true, "api_key": "k", "max_items": 2
	});
	let store = Arc::new(MemoryOptionAdapter::new().with_option(OPTION_NAME, stored.clone()));
	let svc = service(store.clone());

	let record = svc.update_many(&serde_json::Map::new()).await.unwrap();

	assert_eq!(record.to_json(), stored);
	assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn test_sanitize_replaces_fully() {
	let svc = service(Arc::new(MemoryOptionAdapter::new()));

	let record = svc.sanitize(&json!({"is_guest": "yes"}));

	let mut expected = svc.schema().defaults();
	expected.insert("is_guest", FieldValue::Bool(true));
	assert_eq!(record, expected);

	let record = svc.sanitize(&json!({"is_guest": "0"}));
	assert_eq!(record.get("is_guest"), Some(&FieldValue::Bool(false)));
}

#[tokio::test]
async fn test_sanitize_non_object_gives_defaults() {
	let svc = service(Arc::new(MemoryOptionAdapter::new()));

	assert_eq!(svc.sanitize(&json!("not-an-object")), svc.schema().defaults());
	assert_eq!(svc.sanitize(&json!([1, 2])), svc.schema().defaults());
	assert_eq!(svc.sanitize(&serde_json::Value::Null), svc.schema().defaults());
}

#[tokio::test]
async fn test_sanitize_coerces_by_type() {
	let svc = service(Arc::new(MemoryOptionAdapter::new()));

	let record = svc.sanitize(&json!({
		"email": "  <b>boss</b>@example.com \n",
		"sites": 25,
		"is_guest": 0,
		"api_key": null,
		"max_items": "42 items",
		"unknown": "dropped",
	}));

	assert_eq!(record.get("email"), Some(&FieldValue::from("boss@example.com")));
	assert_eq!(record.get("sites"), Some(&FieldValue::from("25")));
	assert_eq!(record.get("is_guest"), Some(&FieldValue::Bool(false)));
	// null counts as absent
	assert_eq!(record.get("api_key"), Some(&FieldValue::from("dummyApiKey")));
	assert_eq!(record.get("max_items"), Some(&FieldValue::Int(42)));
	assert!(record.get("unknown").is_none());
	assert_eq!(record.len(), svc.schema().len());
}

#[tokio::test]
async fn test_replace_overwrites_without_reading() {
	let store = Arc::new(
		MemoryOptionAdapter::new()
			.with_option(OPTION_NAME, json!({"email": "old@x.org", "legacy": true})),
	);
	let svc = service(store.clone());

	let record = svc.replace(&json!({"email": "new@x.org"})).await.unwrap();

	assert_eq!(store.reads(), 0);
	assert_eq!(store.writes(), 1);
	assert_eq!(record.get("email"), Some(&FieldValue::from("new@x.org")));
	assert_eq!(record.get("sites"), Some(&FieldValue::from("10")));
	assert!(store.stored(OPTION_NAME).unwrap().get("legacy").is_none());
}

#[tokio::test]
async fn test_store_errors_propagate() {
	let store = Arc::new(MemoryOptionAdapter::new());
	store.set_failing(true);
	let svc = service(store.clone());

	assert!(matches!(svc.get_all().await, Err(Error::DbError)));
	assert!(matches!(svc.replace(&json!({})).await, Err(Error::DbError)));
}

// vim: ts=4
