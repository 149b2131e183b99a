//! Page footer.

use leptos::prelude::*;

/// Minimal footer with the site owner's name.
#[component]
pub fn Footer(name: String) -> impl IntoView {
	view! {
		<footer class="footer">
			<p>{name}" · built with Leptos"</p>
		</footer>
	}
}
