//! About section: tabbed biography panels over a constellation field.

use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};
use crate::content::{Education, Experience, Interest, Profile};

/// Which biography panel is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
	About,
	Experience,
	Education,
	Interests,
}

const TABS: [(Tab, &str); 4] = [
	(Tab::About, "About"),
	(Tab::Experience, "Experience"),
	(Tab::Education, "Education"),
	(Tab::Interests, "Interests"),
];

/// Tabbed about/experience/education/interests panels with a bouncing
/// particle field and dot grid behind them.
#[component]
pub fn About(
	profile: Profile,
	experiences: Vec<Experience>,
	education: Vec<Education>,
	interests: Vec<Interest>,
) -> impl IntoView {
	let active = RwSignal::new(Tab::About);
	let profile = StoredValue::new(profile);
	let experiences = StoredValue::new(experiences);
	let education = StoredValue::new(education);
	let interests = StoredValue::new(interests);

	view! {
		<section id="about" class="about">
			<div class="section-backdrop">
				<ParticleCanvas config=FieldConfig::constellation() />
			</div>
			<div class="about-panel">
				<div class="tab-row">
					{TABS
						.into_iter()
						.map(|(tab, label)| {
							view! {
								<button
									class="tab-button"
									class:active=move || active.get() == tab
									on:click=move |_| active.set(tab)
								>
									{label}
								</button>
							}
						})
						.collect_view()}
				</div>
				<div class="tab-panel">
					{move || match active.get() {
						Tab::About => about_panel(&profile.get_value()).into_any(),
						Tab::Experience => experience_panel(&experiences.get_value()).into_any(),
						Tab::Education => education_panel(&education.get_value()).into_any(),
						Tab::Interests => interests_panel(&interests.get_value()).into_any(),
					}}
				</div>
			</div>
		</section>
	}
}

fn about_panel(profile: &Profile) -> impl IntoView {
	view! {
		<div class="panel panel-about">
			<h3>{profile.name.clone()}</h3>
			<p>{profile.tagline.clone()}</p>
			<p class="muted">{profile.location.clone()}</p>
		</div>
	}
}

fn experience_panel(experiences: &[Experience]) -> impl IntoView {
	view! {
		<ul class="panel panel-experience">
			{experiences
				.iter()
				.map(|e| {
					view! {
						<li>
							<h4>{e.role.clone()}" · "{e.company.clone()}</h4>
							<span class="muted">{e.period.clone()}</span>
							<p>{e.summary.clone()}</p>
						</li>
					}
				})
				.collect_view()}
		</ul>
	}
}

fn education_panel(education: &[Education]) -> impl IntoView {
	view! {
		<ul class="panel panel-education">
			{education
				.iter()
				.map(|e| {
					view! {
						<li>
							<h4>{e.degree.clone()}</h4>
							<p>{e.school.clone()}</p>
							<span class="muted">{e.period.clone()}</span>
						</li>
					}
				})
				.collect_view()}
		</ul>
	}
}

fn interests_panel(interests: &[Interest]) -> impl IntoView {
	view! {
		<ul class="panel panel-interests">
			{interests
				.iter()
				.map(|i| {
					view! {
						<li>
							<h4>{i.title.clone()}</h4>
							<p>{i.blurb.clone()}</p>
						</li>
					}
				})
				.collect_view()}
		</ul>
	}
}
