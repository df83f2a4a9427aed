//! Caller identity as seen by the authorization predicate.

use serde::{Deserialize, Serialize};

/// Capability required to read and write the application's settings.
pub const MANAGE_OPTIONS: &str = "manage_options";

/// Authenticated caller, placed into request extensions by the host's
/// authentication middleware.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCtx {
	pub id_tag: Box<str>,
	pub capabilities: Box<[Box<str>]>,
}

impl AuthCtx {
	pub fn new(
		id_tag: impl Into<Box<str>>,
		capabilities: impl IntoIterator<Item = impl Into<Box<str>>>,
	) -> Self {
		Self {
			id_tag: id_tag.into(),
			capabilities: capabilities.into_iter().map(Into::into).collect(),
		}
	}

	pub fn has_capability(&self, capability: &str) -> bool {
		self.capabilities.iter().any(|c| c.as_ref() == capability)
	}
}


// vim: ts=4
