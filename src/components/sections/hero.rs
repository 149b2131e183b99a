//! Landing section: name, title, and the layered hero animations.

use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};
use crate::content::Profile;

/// Fullscreen hero with a wrap-around drift field behind a falling-star
/// field. The star field disables itself on narrow viewports.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
	view! {
		<section id="hero" class="hero">
			<div class="hero-backdrop">
				<ParticleCanvas config=FieldConfig::drift() fullscreen=true />
			</div>
			<div class="hero-stars">
				<ParticleCanvas config=FieldConfig::starfall() fullscreen=true />
			</div>
			<div class="hero-copy">
				<h1>{profile.name}</h1>
				<h2>{profile.title}</h2>
				<p class="hero-tagline">{profile.tagline}</p>
				<p class="hero-location">{profile.location}</p>
				<a class="hero-scroll-hint" href="#about">"scroll"</a>
			</div>
		</section>
	}
}
