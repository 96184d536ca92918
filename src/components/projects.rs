use leptos::prelude::*;

use crate::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
	view! {
		<section id="projects" class="section projects">
			<div class="section-inner">
				<h2 class="section-heading">"AI Projects"</h2>
				<div class="project-grid">
					{PROJECTS
						.iter()
						.map(|project| {
							view! {
								<article class="project-card">
									<header>
										<h3>{project.title}</h3>
										<span class="project-icon">{project.icon}</span>
									</header>
									<div class="tags">
										{project
											.tags
											.iter()
											.map(|tag| view! { <span class="tag">{*tag}</span> })
											.collect_view()}
									</div>
									<ul class="points">
										{project
											.description
											.iter()
											.map(|point| view! { <li>{*point}</li> })
											.collect_view()}
									</ul>
									<a class="repo-link" href=project.repo target="_blank" rel="noreferrer">
										"View on GitHub"
									</a>
								</article>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}
