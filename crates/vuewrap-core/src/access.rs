//! Authorization predicate guarding the settings API
//!
//! The host decides who may manage options. The predicate is evaluated before
//! the request body is read and before the option store is touched.

use vuewrap_types::auth::{AuthCtx, MANAGE_OPTIONS};

pub trait AccessPolicy: Send + Sync {
	/// Whether `caller` may read and write the settings record.
	/// `None` means the request carries no identity.
	fn can_manage_options(&self, caller: Option<&AuthCtx>) -> bool;
}

/// Any `Fn(Option<&AuthCtx>) -> bool` can serve as a policy
impl<F> AccessPolicy for F
where
	F: Fn(Option<&AuthCtx>) -> bool + Send + Sync,
{
	fn can_manage_options(&self, caller: Option<&AuthCtx>) -> bool {
		self(caller)
	}
}

/// Stock policy: the caller must hold a given capability
#[derive(Debug, Clone)]
pub struct CapabilityPolicy {
	capability: Box<str>,
}

impl CapabilityPolicy {
	pub fn new(capability: impl Into<Box<str>>) -> Self {
		Self { capability: capability.into() }
	}
}

impl Default for CapabilityPolicy {
	fn default() -> Self {
		Self::new(MANAGE_OPTIONS)
	}
}

impl AccessPolicy for CapabilityPolicy {
	fn can_manage_options(&self, caller: Option<&AuthCtx>) -> bool {
		caller.is_some_and(|auth| auth.has_capability(&self.capability))
	}
}


// vim: ts=4
