//! folio: single-page portfolio site with animated canvas backgrounds.
//!
//! A client-side-rendered Leptos app. Page sections (hero, about, skills,
//! projects, contact) each layer their content over a decorative particle
//! field driven by one shared, parameterized canvas engine.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

pub use components::particle_field::{FieldConfig, ParticleCanvas};
pub use content::SiteContent;

use components::sections::{About, Contact, Footer, Hero, Navbar, Projects, Skills};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio: logging initialized");
}

/// Load site content from a script element with id="site-content".
/// Expected format: JSON matching [`SiteContent`]; missing fields fall
/// back to the built-in defaults.
fn load_site_content() -> Option<SiteContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-content")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteContent>(&json_text) {
		Ok(content) => {
			info!(
				"folio: loaded content with {} skills, {} projects",
				content.skills.len(),
				content.projects.len()
			);
			Some(content)
		}
		Err(e) => {
			warn!("folio: failed to parse site content, using defaults: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads content from the DOM and renders every page section.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_site_content().unwrap_or_default();
	let title = format!("{} — {}", content.profile.name, content.profile.title);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Navbar brand=content.profile.name.clone() />
		<main class="page">
			<Hero profile=content.profile.clone() />
			<About
				profile=content.profile.clone()
				experiences=content.experiences.clone()
				education=content.education.clone()
				interests=content.interests.clone()
			/>
			<Skills skills=content.skills.clone() categories=content.skill_categories() />
			<Projects projects=content.projects.clone() categories=content.project_categories() />
			<Contact contacts=content.contacts.clone() />
		</main>
		<Footer name=content.profile.name.clone() />
	}
}
