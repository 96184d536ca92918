use leptos::prelude::*;

use super::navbar::scroll_to_section;
use crate::content::{OWNER_INITIALS, OWNER_NAME, SOCIAL_LINKS, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
	view! {
		<section id="home" class="hero">
			<div class="hero-inner">
				<div class="hero-avatar">
					<div class="avatar-ring"></div>
					<div class="avatar-ring dashed"></div>
					<span class="avatar-initials">{OWNER_INITIALS}</span>
				</div>
				<div class="hero-text">
					<h2 class="hero-greeting">"Hi, I'm"</h2>
					<h1 class="hero-name">{OWNER_NAME}</h1>
					<p class="hero-tagline">{TAGLINE}</p>
					<p class="hero-location">{SOCIAL_LINKS.location}</p>
					<div class="hero-social">
						<a href=SOCIAL_LINKS.linkedin target="_blank" rel="noreferrer">
							"LinkedIn"
						</a>
						<a href=SOCIAL_LINKS.github target="_blank" rel="noreferrer">
							"GitHub"
						</a>
						<a href=format!("mailto:{}", SOCIAL_LINKS.email)>"Email"</a>
					</div>
					<div class="hero-explore" on:click=move |_| {
						scroll_to_section("about");
					}>
						<span>"Explore My Work"</span>
						<span class="bounce">"↓"</span>
					</div>
				</div>
			</div>
		</section>
	}
}
