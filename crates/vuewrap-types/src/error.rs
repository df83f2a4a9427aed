//! Error type shared by every vuewrap crate.
//!
//! Request-level failures are surfaced to HTTP callers as
//! `{"error": {"code": "...", "message": "..."}}` with a matching status code.
//! Storage-level problems (missing or malformed option values) are not errors:
//! the settings service repairs them instead.

use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};

pub type VwResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	/// The caller failed the authorization predicate
	PermissionDenied,
	/// Request body does not have the required shape
	InvalidInput(String),
	ConfigError(String),
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	/// Machine-readable error code sent to HTTP callers
	pub fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-NOT-FOUND",
			Error::PermissionDenied => "E-FORBIDDEN",
			Error::InvalidInput(_) => "E-INVALID-INPUT",
			Error::ConfigError(_) | Error::DbError | Error::Internal(_) | Error::Io(_) => {
				"E-INTERNAL"
			}
		}
	}

	pub fn status(&self) -> StatusCode {
		match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
			Error::ConfigError(_) | Error::DbError | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	fn public_message(&self) -> String {
		match self {
			Error::NotFound => "Not found".into(),
			Error::PermissionDenied => {
				"Sorry, you are not allowed to manage these settings".into()
			}
			Error::InvalidInput(msg) => msg.clone(),
			Error::ConfigError(_) | Error::DbError | Error::Internal(_) | Error::Io(_) => {
				"Internal server error".into()
			}
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Internal(format!("JSON error: {}", err))
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "I/O error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		if self.status().is_server_error() {
			tracing::error!("Request failed: {}", self);
		}
		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": self.public_message(),
			}
		});
		(self.status(), Json(body)).into_response()
	}
}


// vim: ts=4
