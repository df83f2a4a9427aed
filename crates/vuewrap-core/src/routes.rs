//! HTTP routes

use axum::{
	Json, Router,
	extract::State,
	middleware::{from_fn, from_fn_with_state},
	routing::get,
};

use crate::app::VERSION;
use crate::prelude::*;
use crate::settings::handler;
use crate::{middleware, shell};

async fn health(State(_app): State<App>) -> Json<serde_json::Value> {
	Json(serde_json::json!({ "status": "ok", "version": VERSION }))
}

fn init_api() -> Router<App> {
	Router::new()
		.route("/settings", get(handler::list_settings).post(handler::patch_settings))
		.route("/settings/{name}", get(handler::get_setting))
		.route("/custom-fields", get(handler::get_custom_fields).post(handler::post_custom_fields))
		.route("/shell", get(shell::get_shell))
}

pub fn init(app: App) -> Router {
	let mut router = Router::new().route("/health", get(health));

	if app.shell.api_enabled() {
		let namespace = app.shell.namespace();
		info!("Serving API under {}", namespace);
		router = router.nest(&namespace, init_api());
	} else {
		info!("Frontend and backend are both disabled, API routes not registered");
	}

	router
		.layer(from_fn_with_state(app.clone(), middleware::bearer_auth))
		.layer(from_fn(middleware::request_id))
		.with_state(app)
}

// vim: ts=4
