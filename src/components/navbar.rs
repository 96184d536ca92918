use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::content::OWNER_INITIALS;

pub struct NavLink {
	pub name: &'static str,
	pub id: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
	NavLink { name: "HOME", id: "home" },
	NavLink { name: "ABOUT", id: "about" },
	NavLink { name: "PROJECTS", id: "projects" },
	NavLink { name: "SKILLS", id: "skills" },
	NavLink { name: "CONTACT", id: "contact" },
];

/// Offset below the top of the viewport used to decide which section is "current".
const SPY_OFFSET: f64 = 150.0;
/// Distance from the bottom that counts as scrolled to the end.
const BOTTOM_SLACK: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
	pub id: &'static str,
	pub top: f64,
	pub height: f64,
}

/// Section the navbar should highlight for the given scroll position.
pub fn active_section(
	scroll_y: f64,
	viewport_height: f64,
	document_height: f64,
	sections: &[SectionBox],
	current: &'static str,
) -> &'static str {
	// The last section is often too short to reach the probe line.
	if viewport_height + scroll_y >= document_height - BOTTOM_SLACK {
		return "contact";
	}
	let probe = scroll_y + SPY_OFFSET;
	sections
		.iter()
		.rev()
		.find(|s| probe >= s.top && probe < s.top + s.height)
		.map_or(current, |s| s.id)
}

fn measure_sections() -> Option<(f64, f64, f64, Vec<SectionBox>)> {
	let window = web_sys::window()?;
	let document = window.document()?;
	let scroll_y = window.scroll_y().ok()?;
	let viewport = window.inner_height().ok()?.as_f64()?;
	let doc_height = document.document_element()?.scroll_height() as f64;
	let sections = NAV_LINKS
		.iter()
		.filter_map(|link| {
			let el: HtmlElement = document.get_element_by_id(link.id)?.dyn_into().ok()?;
			Some(SectionBox {
				id: link.id,
				top: el.offset_top() as f64,
				height: el.offset_height() as f64,
			})
		})
		.collect();
	Some((scroll_y, viewport, doc_height, sections))
}

/// Smooth-scroll the section with this id into view. False when it is not on the page.
pub fn scroll_to_section(id: &str) -> bool {
	let Some(el) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		return false;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	el.scroll_into_view_with_scroll_into_view_options(&options);
	true
}

#[component]
pub fn Navbar() -> impl IntoView {
	let (scrolled, set_scrolled) = signal(false);
	let (active, set_active) = signal("home");
	let (menu_open, set_menu_open) = signal(false);

	let spy = move || {
		let Some((scroll_y, viewport, doc_height, sections)) = measure_sections() else {
			return;
		};
		set_scrolled.set(scroll_y > 20.0);
		set_active.set(active_section(
			scroll_y,
			viewport,
			doc_height,
			&sections,
			active.get_untracked(),
		));
	};

	Effect::new(move |_| spy());
	let on_scroll = window_event_listener(ev::scroll, move |_| spy());
	let on_resize = window_event_listener(ev::resize, move |_| spy());
	on_cleanup(move || {
		on_scroll.remove();
		on_resize.remove();
	});

	let scroll_to = move |id: &'static str| {
		set_menu_open.set(false);
		if scroll_to_section(id) {
			set_active.set(id);
		}
	};

	let links = move |class: &'static str| {
		NAV_LINKS
			.iter()
			.map(|link| {
				view! {
					<button
						class=class
						class:active=move || active.get() == link.id
						on:click=move |_| scroll_to(link.id)
					>
						{link.name}
					</button>
				}
			})
			.collect_view()
	};

	view! {
		<nav class="navbar" class:scrolled=move || scrolled.get() || menu_open.get()>
			<div class="navbar-inner">
				<div class="brand" on:click=move |_| scroll_to("home")>
					<div class="brand-badge">{OWNER_INITIALS}</div>
					<div class="brand-text">
						{OWNER_INITIALS}
						<span class="accent">"."</span>
					</div>
				</div>
				<div class="nav-links">{links("nav-link")}</div>
				<button
					class="menu-toggle"
					aria-label="Toggle menu"
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "✕" } else { "☰" }}
				</button>
			</div>
			<div class="mobile-menu" class:open=move || menu_open.get()>
				{links("mobile-link")}
			</div>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn layout() -> Vec<SectionBox> {
		let heights = [800.0, 900.0, 1000.0, 1100.0, 700.0];
		let mut top = 0.0;
		NAV_LINKS
			.iter()
			.zip(heights)
			.map(|(link, height)| {
				let section = SectionBox {
					id: link.id,
					top,
					height,
				};
				top += height;
				section
			})
			.collect()
	}

	#[test]
	fn probe_line_picks_the_containing_section() {
		let sections = layout();
		assert_eq!(active_section(0.0, 800.0, 4500.0, &sections, "home"), "home");
		assert_eq!(active_section(700.0, 800.0, 4500.0, &sections, "home"), "about");
		assert_eq!(active_section(1600.0, 800.0, 4500.0, &sections, "about"), "projects");
	}

	#[test]
	fn bottom_of_page_is_contact() {
		let sections = layout();
		assert_eq!(active_section(3660.0, 800.0, 4500.0, &sections, "skills"), "contact");
	}

	#[test]
	fn gaps_keep_the_current_section() {
		let sections = vec![SectionBox {
			id: "about",
			top: 2000.0,
			height: 500.0,
		}];
		assert_eq!(active_section(0.0, 800.0, 5000.0, &sections, "home"), "home");
	}
}
