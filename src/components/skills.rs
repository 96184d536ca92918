use leptos::prelude::*;

use super::skill_network::SkillNetwork;
use crate::content::{CERTIFICATIONS, SKILLS_CORE, SKILLS_PROGRAMMING, skill_catalog};

/// Number of core skills listed under "ML & AI"; the rest go under "Deep Learning & NLP".
const CORE_SPLIT: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
	#[default]
	Network,
	List,
}

fn split_core<'a>(skills: &'a [&'static str]) -> (&'a [&'static str], &'a [&'static str]) {
	skills.split_at(CORE_SPLIT.min(skills.len()))
}

fn skill_list(skills: &'static [&'static str]) -> impl IntoView {
	let items = skills
		.iter()
		.map(|skill| view! { <li>{*skill}</li> })
		.collect_view();
	view! { <ul class="skill-list">{items}</ul> }
}

#[component]
pub fn Skills() -> impl IntoView {
	let (mode, set_mode) = signal(ViewMode::default());
	let network_visible = Signal::derive(move || mode.get() == ViewMode::Network);
	let (ml, deep) = split_core(SKILLS_CORE);

	view! {
		<section id="skills" class="section skills">
			<div class="section-inner">
				<div class="skills-header">
					<h2>"Technical Expertise"</h2>
					<div class="view-toggle">
						<button
							class:selected=move || mode.get() == ViewMode::Network
							on:click=move |_| set_mode.set(ViewMode::Network)
						>
							"Interactive"
						</button>
						<button
							class:selected=move || mode.get() == ViewMode::List
							on:click=move |_| set_mode.set(ViewMode::List)
						>
							"List View"
						</button>
					</div>
				</div>
				<div class="skills-stage">
					<div class="network-layer" class:shown=move || network_visible.get()>
						<SkillNetwork visible=network_visible catalog=skill_catalog() />
					</div>
					<div class="list-layer" class:shown=move || mode.get() == ViewMode::List>
						<div class="list-column">
							<h3>"Core Competencies"</h3>
							<h4>"ML & AI"</h4>
							{skill_list(ml)}
							<h4>"Deep Learning & NLP"</h4>
							{skill_list(deep)}
						</div>
						<div class="list-column">
							<h3>"Programming & Tools"</h3>
							{SKILLS_PROGRAMMING
								.iter()
								.map(|group| {
									view! {
										<h4>{group.category}</h4>
										<div class="badges">
											{group
												.items
												.iter()
												.map(|item| view! { <span class="badge">{*item}</span> })
												.collect_view()}
										</div>
									}
								})
								.collect_view()}
						</div>
						<div class="list-column">
							<h3>"Certifications"</h3>
							{CERTIFICATIONS
								.iter()
								.map(|cert| {
									view! {
										<div class="cert-card">
											<h4>{cert.name}</h4>
											<div class="cert-meta">
												<span>{cert.issuer}</span>
												<span>{format!("• {}", cert.year)}</span>
											</div>
										</div>
									}
								})
								.collect_view()}
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn core_skills_split_after_four() {
		let (ml, deep) = split_core(SKILLS_CORE);
		assert_eq!(ml.len(), 4);
		assert_eq!(deep.len(), SKILLS_CORE.len() - 4);
	}

	#[test]
	fn short_core_list_has_no_second_group() {
		let (ml, deep) = split_core(&["A", "B"]);
		assert_eq!(ml, ["A", "B"]);
		assert!(deep.is_empty());
	}

	#[test]
	fn network_is_the_default_view() {
		assert_eq!(ViewMode::default(), ViewMode::Network);
	}
}
