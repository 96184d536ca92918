use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for any route other than `/`.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"Nothing lives at this address."</p>
			<A href="/">"Back to the portfolio"</A>
		</div>
	}
}
