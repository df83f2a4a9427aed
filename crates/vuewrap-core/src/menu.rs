//! Admin menu configuration
//!
//! Each item becomes one admin page. The page slug is the application's base
//! menu slug followed by the item's slug suffix; the main page has an empty suffix.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
	pub title: String,
	/// Suffix appended to the base menu slug
	pub slug: String,
	/// Client-side route rendered on this page
	pub route: String,
	pub icon: String,
}

impl MenuItem {
	pub fn new(title: &str, slug: &str, route: &str, icon: &str) -> Self {
		Self { title: title.into(), slug: slug.into(), route: route.into(), icon: icon.into() }
	}

	pub fn page_slug(&self, base: &str) -> String {
		format!("{}{}", base, self.slug)
	}
}

pub fn default_menu() -> Vec<MenuItem> {
	vec![
		MenuItem::new("Dashboard", "", "/", "dashicons-dashboard"),
		MenuItem::new("Settings", "-settings", "/settings", "dashicons-admin-settings"),
		MenuItem::new("Tools", "-tools", "/tools", "dashicons-admin-tools"),
	]
}

/// Page slugs of all menu items, in menu order
pub fn menu_slugs(base: &str, items: &[MenuItem]) -> Vec<String> {
	items.iter().map(|item| item.page_slug(base)).collect()
}


// vim: ts=4
