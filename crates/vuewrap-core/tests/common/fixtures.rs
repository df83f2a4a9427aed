//! Test schema, app construction and request helpers

use axum::{
	Router,
	body::Body,
	http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

use vuewrap_core::access::{AccessPolicy, CapabilityPolicy};
use vuewrap_core::app::{App, AppOpts, AppState};
use vuewrap_core::menu::default_menu;
use vuewrap_core::settings::{
	FieldDefinition, FieldRegistry, FieldSchema, FieldType, SettingsService,
};
use vuewrap_core::shell::ShellConfig;
use vuewrap_types::auth::{AuthCtx, MANAGE_OPTIONS};

use super::MemoryOptionAdapter;

pub const OPTION_NAME: &str = "vue-wp-app_custom_fields";
pub const API: &str = "/wp-json/vue-wp-app/v1";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";

/// email/sites/is_guest plus an api_key and an integer field
pub fn test_schema() -> Arc<FieldSchema> {
	let mut registry = FieldRegistry::new();
	for def in [
		FieldDefinition::builder("email").default("a@b.com").build(),
		FieldDefinition::builder("sites").default("10").build(),
		FieldDefinition::builder("is_guest").field_type(FieldType::Boolean).default(true).build(),
		FieldDefinition::builder("api_key").default("dummyApiKey").build(),
		FieldDefinition::builder("max_items").field_type(FieldType::Integer).default(5_i64).build(),
	] {
		registry.register(def.unwrap()).unwrap();
	}
	Arc::new(registry.freeze())
}

/// Schema of the example scenario: exactly email, sites, is_guest
pub fn example_schema() -> Arc<FieldSchema> {
	let mut registry = FieldRegistry::new();
	for def in [
		FieldDefinition::builder("email").default("a@b.com").build(),
		FieldDefinition::builder("sites").default("10").build(),
		FieldDefinition::builder("is_guest").field_type(FieldType::Boolean).default(true).build(),
	] {
		registry.register(def.unwrap()).unwrap();
	}
	Arc::new(registry.freeze())
}

pub fn service(store: Arc<MemoryOptionAdapter>) -> SettingsService {
	SettingsService::new(test_schema(), OPTION_NAME, store)
}

pub fn build_app_with(
	store: Arc<MemoryOptionAdapter>,
	schema: Arc<FieldSchema>,
	shell: ShellConfig,
	access: Arc<dyn AccessPolicy>,
) -> App {
	let settings = Arc::new(SettingsService::new(schema.clone(), shell.option_name(), store));
	let api_tokens = HashMap::from([
		(Box::from(ADMIN_TOKEN), AuthCtx::new("admin", [MANAGE_OPTIONS])),
		(Box::from(EDITOR_TOKEN), AuthCtx::new("editor", ["edit_posts"])),
	]);

	Arc::new(AppState {
		opts: AppOpts::default(),
		shell,
		menu: default_menu(),
		access,
		settings,
		field_schema: schema,
		api_tokens,
	})
}

pub fn build_app(store: Arc<MemoryOptionAdapter>) -> App {
	build_app_with(store, test_schema(), ShellConfig::default(), Arc::new(CapabilityPolicy::default()))
}

pub fn router(app: App) -> Router {
	vuewrap_core::routes::init(app)
}

pub struct TestResponse {
	pub status: StatusCode,
	pub headers: axum::http::HeaderMap,
	pub body: serde_json::Value,
}

pub async fn send(
	router: &Router,
	method: Method,
	path: &str,
	token: Option<&str>,
	body: Option<&str>,
) -> TestResponse {
	let mut req = Request::builder().method(method).uri(path);
	if let Some(token) = token {
		req = req.header("Authorization", format!("Bearer {}", token));
	}
	if body.is_some() {
		req = req.header("Content-Type", "application/json");
	}
	let req = req.body(body.map_or_else(Body::empty, |b| Body::from(b.to_string()))).unwrap();

	let res = router.clone().oneshot(req).await.unwrap();
	let status = res.status();
	let headers = res.headers().clone();
	let bytes = res.into_body().collect().await.unwrap().to_bytes();
	let body = if bytes.is_empty() {
		serde_json::Value::Null
	} else {
		serde_json::from_slice(&bytes).unwrap()
	};

	TestResponse { status, headers, body }
}

// vim: ts=4
