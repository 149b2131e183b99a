//! Contact section: outbound links over a pulsing network field.

use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};
use crate::content::ContactLink;

/// Contact links rendered over the network pulse background.
#[component]
pub fn Contact(contacts: Vec<ContactLink>) -> impl IntoView {
	view! {
		<section id="contact" class="contact">
			<div class="section-backdrop">
				<ParticleCanvas config=FieldConfig::network() />
			</div>
			<h2>"Get in touch"</h2>
			<ul class="contact-links">
				{contacts
					.into_iter()
					.map(|c| {
						view! {
							<li>
								<a href=c.href target="_blank" rel="noopener">{c.label}</a>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</section>
	}
}
