use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke<'a> {
	pub color: &'a str,
	pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow<'a> {
	pub color: &'a str,
	pub blur: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle<'a> {
	pub fill: &'a str,
	pub stroke: Option<Stroke<'a>>,
	pub glow: Option<Glow<'a>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelStyle<'a> {
	pub fill: &'a str,
	pub border: Stroke<'a>,
	pub shadow: Glow<'a>,
	pub corner: f64,
}

/// Where a text position sits relative to the glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
	Center,
	TopLeft,
}

/// The handful of drawing primitives the skill network needs. Implemented for the
/// browser's 2d context; tests implement it with a recorder.
pub trait Surface {
	fn clear(&mut self, width: f64, height: f64);
	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, alpha: f64, width: f64);
	fn circle(&mut self, center: (f64, f64), radius: f64, style: &CircleStyle);
	fn text(&mut self, text: &str, at: (f64, f64), font: &str, color: &str, anchor: Anchor);
	fn text_width(&mut self, text: &str, font: &str) -> f64;
	fn panel(&mut self, rect: Rect, style: &PanelStyle);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn line(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), color: &str, alpha: f64, width: f64) {
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.set_stroke_style_str(color);
		self.set_global_alpha(alpha);
		self.set_line_width(width);
		self.stroke();
		self.set_global_alpha(1.0);
	}

	fn circle(&mut self, (x, y): (f64, f64), radius: f64, style: &CircleStyle) {
		if let Some(glow) = style.glow {
			self.set_shadow_color(glow.color);
			self.set_shadow_blur(glow.blur);
		}
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(style.fill);
		self.fill();
		if let Some(stroke) = style.stroke {
			self.set_stroke_style_str(stroke.color);
			self.set_line_width(stroke.width);
			self.stroke();
		}
		self.set_shadow_blur(0.0);
	}

	fn text(&mut self, text: &str, (x, y): (f64, f64), font: &str, color: &str, anchor: Anchor) {
		let (align, baseline) = match anchor {
			Anchor::Center => ("center", "middle"),
			Anchor::TopLeft => ("left", "top"),
		};
		self.set_font(font);
		self.set_fill_style_str(color);
		self.set_text_align(align);
		self.set_text_baseline(baseline);
		let _ = self.fill_text(text, x, y);
	}

	fn text_width(&mut self, text: &str, font: &str) -> f64 {
		self.set_font(font);
		self.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
	}

	fn panel(&mut self, rect: Rect, style: &PanelStyle) {
		let Rect { x, y, width: w, height: h } = rect;
		let r = style.corner;

		self.set_shadow_color(style.shadow.color);
		self.set_shadow_blur(style.shadow.blur);
		self.set_fill_style_str(style.fill);
		self.set_stroke_style_str(style.border.color);

		self.begin_path();
		self.move_to(x + r, y);
		self.line_to(x + w - r, y);
		self.quadratic_curve_to(x + w, y, x + w, y + r);
		self.line_to(x + w, y + h - r);
		self.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
		self.line_to(x + r, y + h);
		self.quadratic_curve_to(x, y + h, x, y + h - r);
		self.line_to(x, y + r);
		self.quadratic_curve_to(x, y, x + r, y);
		self.close_path();
		self.fill();
		self.set_line_width(style.border.width);
		self.stroke();
		self.set_shadow_blur(0.0);
	}
}
