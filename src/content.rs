//! Site content model.
//!
//! All copy shown by the sections lives here as plain data. Content can be
//! overridden at deploy time via a JSON `<script id="site-content">` block
//! in the host page; anything missing falls back to the built-in defaults.

use serde::Deserialize;

/// Who the site is about.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	pub title: String,
	pub tagline: String,
	pub location: String,
}

impl Default for Profile {
	fn default() -> Self {
		Self {
			name: "Alex Moreau".into(),
			title: "Full Stack Developer".into(),
			tagline: "Building fast, quiet software for the web.".into(),
			location: "Lyon, France".into(),
		}
	}
}

/// One skill with a rough proficiency level (0-100).
#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
	pub name: String,
	pub category: String,
	#[serde(default)]
	pub level: u8,
}

/// A portfolio project.
#[derive(Clone, Debug, Deserialize)]
pub struct Project {
	pub title: String,
	pub description: String,
	pub category: String,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub url: Option<String>,
}

/// A work experience entry.
#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
	pub role: String,
	pub company: String,
	pub period: String,
	pub summary: String,
}

/// An education entry.
#[derive(Clone, Debug, Deserialize)]
pub struct Education {
	pub degree: String,
	pub school: String,
	pub period: String,
}

/// A personal interest shown on the about panel.
#[derive(Clone, Debug, Deserialize)]
pub struct Interest {
	pub title: String,
	pub blurb: String,
}

/// An outbound contact link.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactLink {
	pub label: String,
	pub href: String,
}

/// Everything the sections render.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteContent {
	pub profile: Profile,
	pub skills: Vec<Skill>,
	pub projects: Vec<Project>,
	pub experiences: Vec<Experience>,
	pub education: Vec<Education>,
	pub interests: Vec<Interest>,
	pub contacts: Vec<ContactLink>,
}

impl SiteContent {
	/// Distinct skill categories in first-appearance order.
	pub fn skill_categories(&self) -> Vec<String> {
		let mut seen = Vec::new();
		for skill in &self.skills {
			if !seen.contains(&skill.category) {
				seen.push(skill.category.clone());
			}
		}
		seen
	}

	/// Distinct project categories in first-appearance order.
	pub fn project_categories(&self) -> Vec<String> {
		let mut seen = Vec::new();
		for project in &self.projects {
			if !seen.contains(&project.category) {
				seen.push(project.category.clone());
			}
		}
		seen
	}
}

impl Default for SiteContent {
	fn default() -> Self {
		Self {
			profile: Profile::default(),
			skills: vec![
				skill("TypeScript", "Frontend", 90),
				skill("React", "Frontend", 85),
				skill("CSS", "Frontend", 80),
				skill("Rust", "Backend", 75),
				skill("PostgreSQL", "Backend", 70),
				skill("Node.js", "Backend", 80),
				skill("Docker", "Tooling", 65),
				skill("CI pipelines", "Tooling", 60),
			],
			projects: vec![
				Project {
					title: "Ledgerline".into(),
					description: "Self-hosted budgeting dashboard with CSV import and \
					              multi-currency accounts."
						.into(),
					category: "Web App".into(),
					tags: vec!["React".into(), "Rust".into(), "PostgreSQL".into()],
					url: Some("https://github.com/example/ledgerline".into()),
				},
				Project {
					title: "Waymark".into(),
					description: "Offline-first hiking trail journal with GPX trace overlays."
						.into(),
					category: "Mobile".into(),
					tags: vec!["TypeScript".into(), "SQLite".into()],
					url: None,
				},
				Project {
					title: "Pressgang".into(),
					description: "Static site generator tuned for photo-heavy portfolios."
						.into(),
					category: "Tooling".into(),
					tags: vec!["Rust".into()],
					url: Some("https://github.com/example/pressgang".into()),
				},
			],
			experiences: vec![
				Experience {
					role: "Senior Developer".into(),
					company: "Atelier Numerique".into(),
					period: "2022 — present".into(),
					summary: "Leading the storefront platform team; shipped the headless \
					          checkout rewrite."
						.into(),
				},
				Experience {
					role: "Developer".into(),
					company: "Studio Brume".into(),
					period: "2019 — 2022".into(),
					summary: "Built client sites and internal tooling for a design agency."
						.into(),
				},
			],
			education: vec![Education {
				degree: "MSc Computer Science".into(),
				school: "Université Claude Bernard".into(),
				period: "2017 — 2019".into(),
			}],
			interests: vec![
				Interest {
					title: "Film photography".into(),
					blurb: "Mostly 35mm street work, developed at home.".into(),
				},
				Interest {
					title: "Trail running".into(),
					blurb: "Slowly collecting the Alpine classics.".into(),
				},
			],
			contacts: vec![
				ContactLink {
					label: "Email".into(),
					href: "mailto:hello@example.dev".into(),
				},
				ContactLink {
					label: "GitHub".into(),
					href: "https://github.com/example".into(),
				},
				ContactLink {
					label: "LinkedIn".into(),
					href: "https://linkedin.com/in/example".into(),
				},
			],
		}
	}
}

fn skill(name: &str, category: &str, level: u8) -> Skill {
	Skill {
		name: name.into(),
		category: category.into(),
		level,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_cover_every_section() {
		let content = SiteContent::default();
		assert!(!content.skills.is_empty());
		assert!(!content.projects.is_empty());
		assert!(!content.experiences.is_empty());
		assert!(!content.education.is_empty());
		assert!(!content.interests.is_empty());
		assert!(!content.contacts.is_empty());
	}

	#[test]
	fn categories_are_distinct_and_ordered() {
		let content = SiteContent::default();
		let cats = content.skill_categories();
		assert_eq!(cats, vec!["Frontend", "Backend", "Tooling"]);
		let mut deduped = cats.clone();
		deduped.dedup();
		assert_eq!(cats, deduped);
	}

	#[test]
	fn partial_json_falls_back_to_defaults() {
		let json = r#"{ "profile": { "name": "Jo" }, "skills": [] }"#;
		let content: SiteContent = serde_json::from_str(json).unwrap();
		assert_eq!(content.profile.name, "Jo");
		// Unspecified profile fields and sections keep their defaults.
		assert_eq!(content.profile.title, Profile::default().title);
		assert!(content.skills.is_empty());
		assert!(!content.projects.is_empty());
	}

	#[test]
	fn full_json_overrides_everything() {
		let json = r#"{
			"projects": [
				{ "title": "T", "description": "D", "category": "C", "tags": ["x"] }
			]
		}"#;
		let content: SiteContent = serde_json::from_str(json).unwrap();
		assert_eq!(content.projects.len(), 1);
		assert_eq!(content.projects[0].tags, vec!["x"]);
		assert_eq!(content.projects[0].url, None);
		assert_eq!(content.project_categories(), vec!["C"]);
	}
}
