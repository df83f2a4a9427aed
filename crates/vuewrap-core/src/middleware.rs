//! Request middleware: request ids and bearer-token identity

use axum::{
	body::Body,
	extract::State,
	http::{HeaderValue, Request, Response},
	middleware::Next,
};

use crate::extract::{Auth, RequestId};
use crate::prelude::*;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach a request id to the request extensions and the response headers.
/// A well-formed id sent by the client is reused.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response<Body> {
	let id = req
		.headers()
		.get(REQUEST_ID_HEADER)
		.and_then(|h| h.to_str().ok())
		.filter(|id| !id.is_empty() && id.len() <= 64 && id.chars().all(|c| c.is_ascii_graphic()))
		.map_or_else(|| uuid::Uuid::new_v4().to_string(), str::to_string);

	req.extensions_mut().insert(RequestId(id.clone()));
	let mut res = next.run(req).await;
	if let Ok(val) = HeaderValue::from_str(&id) {
		res.headers_mut().insert(REQUEST_ID_HEADER, val);
	}
	res
}

/// Resolve `Authorization: Bearer <token>` against the configured tokens.
///
/// Never rejects: requests without a valid token simply carry no identity and
/// are turned away later by the access policy where it matters.
pub async fn bearer_auth(State(app): State<App>, mut req: Request<Body>, next: Next) -> Response<Body> {
	let token = req
		.headers()
		.get("Authorization")
		.and_then(|h| h.to_str().ok())
		.and_then(|h| h.strip_prefix("Bearer "))
		.map(str::trim);

	if let Some(token) = token {
		if let Some(auth) = app.api_tokens.get(token) {
			debug!("Authenticated {} by bearer token", auth.id_tag);
			req.extensions_mut().insert(Auth(auth.clone()));
		} else {
			debug!("Unknown bearer token");
		}
	}

	next.run(req).await
}

// vim: ts=4
