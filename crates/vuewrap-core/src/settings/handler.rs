//! Settings management handlers
//!
//! `POST /settings` patches known keys; `POST /custom-fields` replaces the
//! whole record with a sanitized one. Both read the same option slot.

use axum::{
	Json,
	body::Bytes,
	extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
	extract::{OptionalRequestId, OptionsManager},
	prelude::*,
	settings::types::{FieldValue, SettingsRecord},
};

/// Response for a single setting
#[derive(Debug, Serialize)]
pub struct SettingResponse {
	pub name: String,
	pub value: FieldValue,
}

#[derive(Debug, Deserialize)]
pub struct GetSettingQuery {
	/// Returned when the record has no such key
	pub default: Option<String>,
}

fn parse_json_body(body: &Bytes) -> VwResult<serde_json::Value> {
	serde_json::from_slice(body)
		.map_err(|_| Error::InvalidInput("Request body must be valid JSON".into()))
}

/// GET /settings - Get the full settings record
pub async fn list_settings(
	State(app): State<App>,
	_manager: OptionsManager,
) -> VwResult<Json<SettingsRecord>> {
	Ok(Json(app.settings.get_all().await?))
}

/// GET /settings/{name} - Get one setting
pub async fn get_setting(
	State(app): State<App>,
	_manager: OptionsManager,
	Path(name): Path<String>,
	Query(query): Query<GetSettingQuery>,
) -> VwResult<Json<SettingResponse>> {
	let value = match query.default {
		Some(fallback) => app.settings.get_one(&name, FieldValue::String(fallback)).await?,
		None => app.settings.get_all().await?.get(&name).cloned().ok_or(Error::NotFound)?,
	};

	Ok(Json(SettingResponse { name, value }))
}

/// POST /settings - Patch known settings
///
/// The body must be a JSON object. Keys the record does not have are ignored.
pub async fn patch_settings(
	State(app): State<App>,
	manager: OptionsManager,
	OptionalRequestId(req_id): OptionalRequestId,
	body: Bytes,
) -> VwResult<Json<SettingsRecord>> {
	let patch = match parse_json_body(&body) {
		Ok(serde_json::Value::Object(map)) => map,
		_ => return Err(Error::InvalidInput("Fields must be provided as an object".into())),
	};

	let record = app.settings.update_many(&patch).await?;
	info!(
		req_id = req_id.as_deref().unwrap_or_default(),
		"User {} patched {} setting key(s)",
		manager.id_tag(),
		patch.len()
	);

	Ok(Json(record))
}

/// GET /custom-fields - Get the full custom field record
pub async fn get_custom_fields(
	State(app): State<App>,
	_manager: OptionsManager,
) -> VwResult<Json<SettingsRecord>> {
	Ok(Json(app.settings.get_all().await?))
}

/// POST /custom-fields - Replace the custom field record
///
/// Fields missing from the body fall back to their defaults; a body that is
/// valid JSON but not an object resets every field.
pub async fn post_custom_fields(
	State(app): State<App>,
	manager: OptionsManager,
	OptionalRequestId(req_id): OptionalRequestId,
	body: Bytes,
) -> VwResult<Json<SettingsRecord>> {
	let raw = parse_json_body(&body)?;

	let record = app.settings.replace(&raw).await?;
	info!(
		req_id = req_id.as_deref().unwrap_or_default(),
		"User {} replaced custom fields",
		manager.id_tag()
	);

	Ok(Json(record))
}

// vim: ts=4
