//! Fixed navigation bar with section anchors.

use leptos::prelude::*;

const LINKS: [(&str, &str); 5] = [
	("#hero", "Home"),
	("#about", "About"),
	("#skills", "Skills"),
	("#projects", "Projects"),
	("#contact", "Contact"),
];

/// Top navigation linking to each page section.
#[component]
pub fn Navbar(
	/// Short name shown as the brand mark.
	brand: String,
) -> impl IntoView {
	view! {
		<nav class="navbar">
			<a class="navbar-brand" href="#hero">{brand}</a>
			<ul class="navbar-links">
				{LINKS
					.into_iter()
					.map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
					.collect_view()}
			</ul>
		</nav>
	}
}
