//! Projects section: searchable, category-filtered cards over a pulsing
//! network field.

use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};
use crate::content::Project;

/// True when `project` passes the active category and search filters.
/// The search term matches title, description, or any tag,
/// case-insensitively; an empty term matches everything.
fn project_matches(project: &Project, category: Option<&str>, search: &str) -> bool {
	if let Some(cat) = category {
		if project.category != cat {
			return false;
		}
	}
	if search.is_empty() {
		return true;
	}
	let needle = search.to_lowercase();
	project.title.to_lowercase().contains(&needle)
		|| project.description.to_lowercase().contains(&needle)
		|| project
			.tags
			.iter()
			.any(|t| t.to_lowercase().contains(&needle))
}

/// Project card grid with category buttons and a free-text search box.
#[component]
pub fn Projects(projects: Vec<Project>, categories: Vec<String>) -> impl IntoView {
	let selected = RwSignal::new(None::<String>);
	let search = RwSignal::new(String::new());
	let projects = StoredValue::new(projects);

	view! {
		<section id="projects" class="projects">
			<div class="section-backdrop">
				<ParticleCanvas config=FieldConfig::network() />
			</div>
			<h2>"Projects"</h2>
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
				<input
					class="project-search"
					type="search"
					placeholder="Search projects"
					prop:value=move || search.get()
					on:input=move |ev| search.set(event_target_value(&ev))
				/>
			</div>
			<ul class="project-grid">
				{move || {
					let category = selected.get();
					let term = search.get();
					projects.with_value(|list| {
						list.iter()
							.filter(|p| project_matches(p, category.as_deref(), &term))
							.map(|p| {
								view! {
									<li class="project-card">
										<h3>{p.title.clone()}</h3>
										<span class="muted">{p.category.clone()}</span>
										<p>{p.description.clone()}</p>
										<div class="project-tags">
											{p.tags
												.iter()
												.map(|t| view! { <span class="tag">{t.clone()}</span> })
												.collect_view()}
										</div>
										{p.url.clone().map(|url| {
											view! { <a href=url target="_blank" rel="noopener">"View source"</a> }
										})}
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

#[cfg(test)]
mod tests {
	use super::*;

	fn project() -> Project {
		Project {
			title: "Ledgerline".into(),
			description: "Budgeting dashboard".into(),
			category: "Web App".into(),
			tags: vec!["Rust".into(), "PostgreSQL".into()],
			url: None,
		}
	}

	#[test]
	fn empty_filters_match_everything() {
		assert!(project_matches(&project(), None, ""));
	}

	#[test]
	fn category_filter_is_exact() {
		assert!(project_matches(&project(), Some("Web App"), ""));
		assert!(!project_matches(&project(), Some("Mobile"), ""));
	}

	#[test]
	fn search_is_case_insensitive_across_fields() {
		assert!(project_matches(&project(), None, "ledger"));
		assert!(project_matches(&project(), None, "DASHBOARD"));
		assert!(project_matches(&project(), None, "postgres"));
		assert!(!project_matches(&project(), None, "kubernetes"));
	}

	#[test]
	fn category_and_search_combine() {
		assert!(project_matches(&project(), Some("Web App"), "rust"));
		assert!(!project_matches(&project(), Some("Mobile"), "rust"));
	}
}
