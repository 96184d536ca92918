use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

use super::interaction::Cursor;
use super::render;
use super::state::SkillNetworkState;
use super::types::{Hub, SkillCatalog};

type SharedState = Rc<RefCell<Option<SkillNetworkState>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// CSS size of the drawing area: fixed props win, then the parent element's box.
fn surface_size(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}

/// Size the backing store for the device pixel ratio and draw in CSS pixels.
fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
	let dpr = web_sys::window()
		.map(|win| win.device_pixel_ratio())
		.filter(|dpr| *dpr > 0.0)
		.unwrap_or(1.0);
	canvas.set_width((w * dpr) as u32);
	canvas.set_height((h * dpr) as u32);
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

fn local_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

fn set_cursor(canvas: &HtmlCanvasElement, cursor: Cursor) {
	// Inherent `style()` is shadowed by the leptos element extension trait.
	let _ = HtmlElement::style(canvas).set_property("cursor", cursor.as_css());
}

#[component]
pub fn SkillNetwork(
	#[prop(into)] visible: Signal<bool>,
	catalog: SkillCatalog,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let frame_id = StoredValue::new(None::<i32>);
	let animate_slot = StoredValue::new_local(animate.clone());
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx,
			_ => {
				warn!("skill network: no 2d context, not starting");
				return;
			}
		};
		let Ok(mut ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			warn!("skill network: context is not a CanvasRenderingContext2d");
			return;
		};

		let (w, h) = surface_size(&canvas, width, height);
		fit_canvas(&canvas, &ctx, w, h);
		let network = SkillNetworkState::new(&catalog, w, h, &mut js_sys::Math::random);
		info!(
			"skill network mounted: {} nodes, {} links, {}x{}",
			network.graph.nodes.len(),
			network.graph.links.len(),
			w,
			h
		);
		*state_init.borrow_mut() = Some(network);

		let (state_resize, canvas_resize, ctx_resize) =
			(state_init.clone(), canvas.clone(), ctx.clone());
		let on_resize = window_event_listener(ev::resize, move |_| {
			let (nw, nh) = surface_size(&canvas_resize, width, height);
			fit_canvas(&canvas_resize, &ctx_resize, nw, nh);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		});

		let (state_mm, canvas_mm) = (state_init.clone(), canvas.clone());
		let on_mousemove = window_event_listener(ev::mousemove, move |ev| {
			if !visible.get_untracked() {
				return;
			}
			let (x, y) = local_point(&canvas_mm, ev.client_x(), ev.client_y());
			if let Some(ref mut s) = *state_mm.borrow_mut() {
				set_cursor(&canvas_mm, s.pointer_moved(x, y));
			}
		});

		let (state_tm, canvas_tm) = (state_init.clone(), canvas.clone());
		let on_touchmove = window_event_listener(ev::touchmove, move |ev| {
			if !visible.get_untracked() {
				return;
			}
			let Some(touch) = ev.touches().get(0) else {
				return;
			};
			let (x, y) = local_point(&canvas_tm, touch.client_x(), touch.client_y());
			if let Some(ref mut s) = *state_tm.borrow_mut() {
				if s.pointer_moved(x, y) == Cursor::Grabbing {
					ev.prevent_default();
				}
			}
		});

		let (state_mu, canvas_mu) = (state_init.clone(), canvas.clone());
		let on_mouseup = window_event_listener(ev::mouseup, move |_| {
			if let Some(ref mut s) = *state_mu.borrow_mut() {
				set_cursor(&canvas_mu, s.pointer_up());
			}
		});

		let state_te = state_init.clone();
		let on_touchend = window_event_listener(ev::touchend, move |_| {
			if let Some(ref mut s) = *state_te.borrow_mut() {
				s.pointer_up();
			}
		});

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// Keep the loop alive while hidden so it resumes instantly.
			if visible.get_untracked() {
				if let Some(ref mut s) = *state_anim.borrow_mut() {
					s.tick();
					render::render(s, &mut ctx, js_sys::Date::now());
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(Ok(id)) = web_sys::window()
					.map(|win| win.request_animation_frame(cb.as_ref().unchecked_ref()))
				{
					frame_id.set_value(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Some(Ok(id)) =
				web_sys::window().map(|win| win.request_animation_frame(cb.as_ref().unchecked_ref()))
			{
				frame_id.set_value(Some(id));
			}
		}

		on_cleanup(move || {
			on_resize.remove();
			on_mousemove.remove();
			on_touchmove.remove();
			on_mouseup.remove();
			on_touchend.remove();
			if let (Some(Some(id)), Some(win)) = (frame_id.try_get_value(), web_sys::window()) {
				let _ = win.cancel_animation_frame(id);
			}
			// Dropping the callback breaks its self-reference.
			animate_slot.try_update_value(|cb| cb.borrow_mut().take());
			info!("skill network unmounted");
		});
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if !visible.get_untracked() {
			return;
		}
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			set_cursor(&canvas, s.pointer_down());
		}
	};

	let state_ts = state.clone();
	let on_touchstart = move |ev: TouchEvent| {
		if !visible.get_untracked() {
			return;
		}
		let (Some(canvas), Some(touch)) = (canvas_ref.get_untracked(), ev.touches().get(0)) else {
			return;
		};
		let (x, y) = local_point(&canvas, touch.client_x(), touch.client_y());
		if let Some(ref mut s) = *state_ts.borrow_mut() {
			let cursor = s.touch_start(x, y);
			if cursor == Cursor::Grabbing {
				ev.prevent_default();
			}
			set_cursor(&canvas, cursor);
		}
	};

	view! {
		<div class="skill-network">
			<canvas
				node_ref=canvas_ref
				class="skill-network-canvas"
				on:mousedown=on_mousedown
				on:touchstart=on_touchstart
			/>
			<div class="skill-network-legend" class:faded=move || !visible.get()>
				{Hub::ALL
					.into_iter()
					.map(|hub| {
						view! {
							<div class="legend-item">
								<span class="legend-dot" style=format!("background: {}", hub.color())></span>
								<span>{hub.legend()}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
