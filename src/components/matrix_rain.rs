use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Window};

const GLYPHS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ@#$%^&*";
pub const FONT_SIZE: f64 = 14.0;
const FRAME_MS: i32 = 33;
/// A drop past the bottom restarts only when a roll beats this.
const RESTART_ROLL: f64 = 0.975;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
	pub ch: char,
	pub x: f64,
	pub y: f64,
	pub color: &'static str,
}

/// Mostly red, with the odd blue or green glyph.
fn glyph_color(roll: f64) -> &'static str {
	if roll > 0.90 {
		"#3b82f6"
	} else if roll > 0.80 {
		"#22c55e"
	} else if roll > 0.50 {
		"#ef4444"
	} else {
		"#7f1d1d"
	}
}

/// One falling column per `FONT_SIZE` pixels. Drop positions are in rows.
pub struct MatrixRain {
	drops: Vec<f64>,
	width: f64,
	height: f64,
}

impl MatrixRain {
	pub fn new(width: f64, height: f64, random: &mut impl FnMut() -> f64) -> Self {
		let mut rain = Self {
			drops: Vec::new(),
			width,
			height,
		};
		rain.resize(width, height, random);
		rain
	}

	pub fn columns(width: f64) -> usize {
		(width / FONT_SIZE).ceil().max(0.0) as usize
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Columns are only ever added; shrinking leaves the extra drops off-screen.
	pub fn resize(&mut self, width: f64, height: f64, random: &mut impl FnMut() -> f64) {
		self.width = width;
		self.height = height;
		let columns = Self::columns(width);
		while self.drops.len() < columns {
			self.drops.push(random() * -100.0);
		}
	}

	pub fn advance(&mut self, random: &mut impl FnMut() -> f64, mut emit: impl FnMut(Glyph)) {
		for (i, drop) in self.drops.iter_mut().enumerate() {
			let pick = ((random() * GLYPHS.len() as f64) as usize).min(GLYPHS.len() - 1);
			emit(Glyph {
				ch: GLYPHS[pick] as char,
				x: i as f64 * FONT_SIZE,
				y: *drop * FONT_SIZE,
				color: glyph_color(random()),
			});
			if *drop * FONT_SIZE > self.height && random() > RESTART_ROLL {
				*drop = 0.0;
			}
			*drop += 1.0;
		}
	}
}

fn window_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Decorative falling-glyph canvas behind the page.
#[component]
pub fn MatrixBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let interval = StoredValue::new(None::<i32>);
	let tick_slot = StoredValue::new_local(None::<Closure<dyn FnMut()>>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("matrix background: no 2d context");
			return;
		};

		let (w, h) = window_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let rain = Rc::new(RefCell::new(MatrixRain::new(w, h, &mut js_sys::Math::random)));

		let rain_tick = rain.clone();
		let tick = Closure::<dyn FnMut()>::new(move || {
			let mut rain = rain_tick.borrow_mut();
			let (w, h) = rain.size();
			ctx.set_fill_style_str("rgba(0, 0, 0, 0.05)");
			ctx.fill_rect(0.0, 0.0, w, h);
			ctx.set_font(&format!("{}px monospace", FONT_SIZE));
			rain.advance(&mut js_sys::Math::random, |glyph| {
				ctx.set_fill_style_str(glyph.color);
				let _ = ctx.fill_text(&glyph.ch.to_string(), glyph.x, glyph.y);
			});
		});
		match window.set_interval_with_callback_and_timeout_and_arguments_0(
			tick.as_ref().unchecked_ref(),
			FRAME_MS,
		) {
			Ok(id) => interval.set_value(Some(id)),
			Err(_) => warn!("matrix background: failed to start interval"),
		}
		tick_slot.set_value(Some(tick));

		let on_resize = window_event_listener(ev::resize, move |_| {
			let Some(window) = web_sys::window() else {
				return;
			};
			let (w, h) = window_size(&window);
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			rain.borrow_mut().resize(w, h, &mut js_sys::Math::random);
		});

		on_cleanup(move || {
			on_resize.remove();
			if let (Some(Some(id)), Some(win)) = (interval.try_get_value(), web_sys::window()) {
				win.clear_interval_with_handle(id);
			}
			tick_slot.try_update_value(|slot| slot.take());
		});
	});

	view! { <canvas node_ref=canvas_ref class="matrix-background" /> }
}
