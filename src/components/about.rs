use leptos::prelude::*;

use crate::content::{BIO, EDUCATION, MOTTO};

#[component]
pub fn About() -> impl IntoView {
	view! {
		<section id="about" class="section about">
			<div class="section-inner">
				<div class="section-title">
					<h2>"About Me"</h2>
				</div>
				<div class="about-grid">
					<div class="about-story">
						<div class="bio">{BIO.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}</div>
						<h3>"What Drives Me"</h3>
						<blockquote class="motto">{format!("\"{}\"", MOTTO)}</blockquote>
					</div>
					<div class="about-journey">
						<h3>"My Journey"</h3>
						<div class="timeline">
							{EDUCATION
								.iter()
								.map(|edu| {
									view! {
										<div class="timeline-entry">
											<div class="timeline-dot"></div>
											<h4>{edu.school}</h4>
											<p class="degree">{edu.degree}</p>
											<p class="period">
												{edu.period}
												<span class="sep">"•"</span>
												{edu.grade.unwrap_or(edu.location)}
											</p>
											{edu
												.coursework
												.map(|c| {
													view! {
														<p class="coursework">
															<span class="muted">"Coursework: "</span>
															{c}
														</p>
													}
												})}
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
