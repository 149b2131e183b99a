//! Skills section: category-filtered skill bars over a weave field.

use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};
use crate::content::Skill;

/// Skill list with category filter buttons. `None` shows every category.
#[component]
pub fn Skills(skills: Vec<Skill>, categories: Vec<String>) -> impl IntoView {
	let selected = RwSignal::new(None::<String>);
	let skills = StoredValue::new(skills);

	view! {
		<section id="skills" class="skills">
			<div class="section-backdrop">
				<ParticleCanvas config=FieldConfig::weave() />
			</div>
			<h2>"Skills"</h2>
			<div class="filter-row">
				<button
					class="filter-button"
					class:active=move || selected.get().is_none()
					on:click=move |_| selected.set(None)
				>
					"All"
				</button>
				{categories
					.into_iter()
					.map(|cat| {
						let is_active = cat.clone();
						let on_pick = cat.clone();
						view! {
							<button
								class="filter-button"
								class:active=move || selected.get().as_deref() == Some(is_active.as_str())
								on:click=move |_| selected.set(Some(on_pick.clone()))
							>
								{cat}
							</button>
						}
					})
					.collect_view()}
			</div>
			<ul class="skills-list">
				{move || {
					let filter = selected.get();
					skills.with_value(|list| {
						list.iter()
							.filter(|s| filter.as_deref().is_none_or(|c| s.category == c))
							.map(|s| {
								view! {
									<li class="skill">
										<span class="skill-name">{s.name.clone()}</span>
										<span class="skill-category muted">{s.category.clone()}</span>
										<div class="skill-bar">
											<div
												class="skill-bar-fill"
												style:width=format!("{}%", s.level.min(100))
											/>
										</div>
									</li>
								}
							})
							.collect_view()
					})
				}}
			</ul>
		</section>
	}
}
