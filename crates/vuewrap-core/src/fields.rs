//! Stock custom fields of the application

use crate::prelude::*;
use crate::settings::{FieldDefinition, FieldRegistry, FieldType};

/// Register all stock fields
pub fn register_fields(registry: &mut FieldRegistry) -> VwResult<()> {
	registry.register(
		FieldDefinition::builder("email")
			.description("Contact email address")
			.default("dummyEmail@gmail.com")
			.build()?,
	)?;

	// Kept as a string for compatibility with existing stored records
	registry.register(
		FieldDefinition::builder("sites")
			.description("Number of sites covered by the license")
			.default("10")
			.build()?,
	)?;

	registry.register(
		FieldDefinition::builder("api_key")
			.description("Key for the remote API")
			.default("dummyApiKey")
			.build()?,
	)?;

	registry.register(
		FieldDefinition::builder("is_guest")
			.description("Whether the account is a guest account")
			.field_type(FieldType::Boolean)
			.default(true)
			.build()?,
	)?;

	registry.register(
		FieldDefinition::builder("license")
			.description("License key")
			.default("dummyLicense")
			.build()?,
	)?;

	Ok(())
}


// vim: ts=4
