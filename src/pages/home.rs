use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::matrix_rain::MatrixBackground;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;

/// Single-page portfolio: every section stacked over the glyph rain.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="page">
				<MatrixBackground />
				<Navbar />
				<main class="content">
					<Hero />
					<About />
					<Projects />
					<Skills />
					<Contact />
				</main>
			</div>
		</ErrorBoundary>
	}
}
