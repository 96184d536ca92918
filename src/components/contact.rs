use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::{info, warn};
use thiserror::Error;

use crate::content::{OWNER_NAME, SOCIAL_LINKS};

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
	/// First name, email and message are required; last name is optional.
	#[error("Please fill in all required fields.")]
	MissingFields(Vec<&'static str>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub message: String,
}

impl ContactForm {
	pub fn validate(&self) -> Result<(), ContactError> {
		let missing: Vec<&'static str> = [
			("first_name", &self.first_name),
			("email", &self.email),
			("message", &self.message),
		]
		.into_iter()
		.filter(|(_, value)| value.is_empty())
		.map(|(field, _)| field)
		.collect();
		if missing.is_empty() {
			Ok(())
		} else {
			Err(ContactError::MissingFields(missing))
		}
	}

	pub fn subject(&self) -> String {
		format!("Portfolio Contact: {} {}", self.first_name, self.last_name)
	}

	pub fn body(&self) -> String {
		format!(
			"Name: {} {}\nEmail: {}\n\nMessage:\n{}",
			self.first_name, self.last_name, self.email, self.message
		)
	}

	/// Draft link for the visitor's mail client.
	pub fn mailto(&self, to: &str) -> Result<String, ContactError> {
		self.validate()?;
		Ok(format!(
			"mailto:{}?subject={}&body={}",
			to,
			urlencoding::encode(&self.subject()),
			urlencoding::encode(&self.body())
		))
	}
}

fn open_mail_client(link: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if window.location().set_href(link).is_err() {
		warn!("contact: could not open mail client");
	}
}

fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

#[component]
pub fn Contact() -> impl IntoView {
	let (form, set_form) = signal(ContactForm::default());
	let (sent, set_sent) = signal(false);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		match form.with_untracked(|f| f.mailto(SOCIAL_LINKS.email)) {
			Ok(link) => {
				info!("contact: drafting message");
				open_mail_client(&link);
				set_sent.set(true);
				set_form.set(ContactForm::default());
			}
			Err(err) => alert(&err.to_string()),
		}
	};

	let form_view = move || {
		view! {
			<form class="contact-form" on:submit=on_submit>
				<div class="form-row">
					<div class="form-field">
						<label for="firstName">"Name*"</label>
						<input
							type="text"
							id="firstName"
							placeholder="Your name"
							required
							prop:value=move || form.with(|f| f.first_name.clone())
							on:input=move |ev| {
								let v = event_target_value(&ev);
								set_form.update(|f| f.first_name = v);
							}
						/>
					</div>
					<div class="form-field">
						<label for="lastName">"Last name"</label>
						<input
							type="text"
							id="lastName"
							placeholder="Your last name"
							prop:value=move || form.with(|f| f.last_name.clone())
							on:input=move |ev| {
								let v = event_target_value(&ev);
								set_form.update(|f| f.last_name = v);
							}
						/>
					</div>
				</div>
				<div class="form-field">
					<label for="email">"Email*"</label>
					<input
						type="email"
						id="email"
						placeholder="Your email address"
						required
						prop:value=move || form.with(|f| f.email.clone())
						on:input=move |ev| {
							let v = event_target_value(&ev);
							set_form.update(|f| f.email = v);
						}
					/>
				</div>
				<div class="form-field">
					<label for="message">"Message*"</label>
					<textarea
						id="message"
						rows="5"
						placeholder="Enter your message"
						required
						prop:value=move || form.with(|f| f.message.clone())
						on:input=move |ev| {
							let v = event_target_value(&ev);
							set_form.update(|f| f.message = v);
						}
					></textarea>
				</div>
				<div class="form-actions">
					<button type="submit" class="submit">"SUBMIT"</button>
				</div>
			</form>
		}
	};

	let sent_view = move || {
		view! {
			<div class="contact-sent">
				<button class="sent-close" aria-label="Close" on:click=move |_| set_sent.set(false)>
					"✕"
				</button>
				<div class="sent-icon">"✓"</div>
				<h3>"Sent"</h3>
				<p>"Your message has been drafted. Please check your email client to hit send."</p>
				<button class="sent-again" on:click=move |_| set_sent.set(false)>
					"Send another"
				</button>
			</div>
		}
	};

	view! {
		<section id="contact" class="section contact">
			<div class="section-inner">
				<div class="section-header">
					<h2>"Partner With Me !!"</h2>
					<p>"Let's collaborate on projects that push the boundaries of intelligence and innovation"</p>
				</div>
				<div class="contact-grid">
					<div class="contact-card">
						<Show when=move || sent.get() fallback=form_view>
							{sent_view()}
						</Show>
					</div>
					<div class="contact-visual"></div>
				</div>
				<footer class="footer">
					<p class="footer-quote">"\"Building the future of AI, one model at a time.\""</p>
					<div class="footer-links">
						<a href=format!("mailto:{}", SOCIAL_LINKS.email)>"Email"</a>
						<a href=SOCIAL_LINKS.linkedin target="_blank" rel="noreferrer">
							"LinkedIn"
						</a>
						<a href=SOCIAL_LINKS.github target="_blank" rel="noreferrer">
							"GitHub"
						</a>
					</div>
					<p class="footer-copy">{format!("© 2025 {}. All rights reserved.", OWNER_NAME)}</p>
				</footer>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> ContactForm {
		ContactForm {
			first_name: "Ada".into(),
			last_name: "Lovelace".into(),
			email: "ada@example.com".into(),
			message: "Hi!".into(),
		}
	}

	#[test]
	fn missing_required_fields_are_reported() {
		let form = ContactForm {
			last_name: "Lovelace".into(),
			..ContactForm::default()
		};
		let err = form.validate().unwrap_err();
		assert_eq!(
			err,
			ContactError::MissingFields(vec!["first_name", "email", "message"])
		);
		assert_eq!(err.to_string(), "Please fill in all required fields.");
	}

	#[test]
	fn last_name_is_optional() {
		let form = ContactForm {
			last_name: String::new(),
			..filled()
		};
		assert!(form.validate().is_ok());
		assert_eq!(form.subject(), "Portfolio Contact: Ada ");
	}

	#[test]
	fn mailto_encodes_subject_and_body() {
		let link = filled().mailto("hello@example.com").unwrap();
		assert_eq!(
			link,
			"mailto:hello@example.com\
			 ?subject=Portfolio%20Contact%3A%20Ada%20Lovelace\
			 &body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0AHi%21"
		);
	}

	#[test]
	fn invalid_form_builds_no_link() {
		let form = ContactForm {
			message: String::new(),
			..filled()
		};
		assert_eq!(
			form.mailto("hello@example.com"),
			Err(ContactError::MissingFields(vec!["message"]))
		);
	}
}
