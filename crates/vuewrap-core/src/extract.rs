//! Custom extractors for vuewrap-specific data

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::prelude::*;
use vuewrap_types::auth::AuthCtx;

// Auth //
//******//
/// Caller identity, inserted into request extensions by the authentication middleware
#[derive(Debug, Clone)]
pub struct Auth(pub AuthCtx);

// OptionsManager //
//*****************//
/// Caller that passed the app's access policy for managing options.
///
/// Rejects with `PermissionDenied` before any body extractor runs, so a denied
/// request never reaches the option store.
#[derive(Debug, Clone)]
pub struct OptionsManager(pub Option<AuthCtx>);

impl FromRequestParts<App> for OptionsManager {
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, app: &App) -> Result<Self, Self::Rejection> {
		let auth = parts.extensions.get::<Auth>().map(|a| a.0.clone());
		if app.access.can_manage_options(auth.as_ref()) {
			Ok(OptionsManager(auth))
		} else {
			warn!(
				"Options access denied for {} on {}",
				auth.as_ref().map_or("anonymous", |a| a.id_tag.as_ref()),
				parts.uri.path()
			);
			Err(Error::PermissionDenied)
		}
	}
}

impl OptionsManager {
	/// Identity for log lines
	pub fn id_tag(&self) -> &str {
		self.0.as_ref().map_or("anonymous", |a| a.id_tag.as_ref())
	}
}

// RequestId //
//***********//
/// Request ID for tracing and debugging
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Optional Request ID extractor - always succeeds, returns None if not available
#[derive(Clone, Debug)]
pub struct OptionalRequestId(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalRequestId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let req_id = parts.extensions.get::<RequestId>().map(|r| r.0.clone());
		Ok(OptionalRequestId(req_id))
	}
}

// vim: ts=4
