use super::state::SkillNetworkState;
use super::surface::{Anchor, CircleStyle, Glow, PanelStyle, Rect, Stroke, Surface};
use super::types::{Hub, Node, NodeKind};

pub const TOOLTIP_HEIGHT: f64 = 52.0;
pub const TOOLTIP_OFFSET: f64 = 18.0;
const TOOLTIP_PADDING: f64 = 12.0;
const TOOLTIP_MARGIN: f64 = 10.0;
const TITLE_FONT: &str = "bold 15px Inter, sans-serif";
const DESC_FONT: &str = "12px Inter, sans-serif";

const DRAG_SCALE: f64 = 1.15;
const DRAG_GLOW: &str = "rgba(239, 68, 68, 0.9)";
const WHITE: &str = "#ffffff";

/// Scale and alpha of the core hub's halo at `now_ms`. One cycle is 2π / 0.002 ms, about 3.1 s.
pub fn pulse(now_ms: f64) -> (f64, f64) {
	let wave = (now_ms * 0.002).sin();
	(1.0 + wave * 0.08, 0.2 + wave * 0.1)
}

/// Tooltip box for `node`: right of the node unless that overflows, then left.
pub fn tooltip_rect(node: &Node, box_width: f64, width: f64, height: f64) -> Rect {
	let radius = node.radius();
	let mut x = node.x + radius + TOOLTIP_OFFSET;
	if x + box_width > width {
		x = node.x - radius - TOOLTIP_OFFSET - box_width;
	}

	let mut y = node.y - TOOLTIP_HEIGHT / 2.0;
	if y < TOOLTIP_MARGIN {
		y = TOOLTIP_MARGIN;
	}
	if y + TOOLTIP_HEIGHT > height - TOOLTIP_MARGIN {
		y = height - TOOLTIP_HEIGHT - TOOLTIP_MARGIN;
	}

	Rect {
		x,
		y,
		width: box_width,
		height: TOOLTIP_HEIGHT,
	}
}

pub fn render(state: &SkillNetworkState, surface: &mut impl Surface, now_ms: f64) {
	surface.clear(state.width, state.height);
	draw_links(state, surface);
	draw_core_pulse(state, surface, now_ms);
	draw_nodes(state, surface);
	draw_tooltip(state, surface);
}

fn draw_links(state: &SkillNetworkState, surface: &mut impl Surface) {
	let focused = state.focused_id();
	for link in &state.graph.links {
		let (source, target) = (&state.graph.nodes[link.source], &state.graph.nodes[link.target]);
		let connected =
			focused.is_some_and(|id| id == source.id.as_str() || id == target.id.as_str());
		let (alpha, width) = if connected { (1.0, 2.0) } else { (0.2, 1.0) };
		surface.line(
			(source.x, source.y),
			(target.x, target.y),
			source.group.color(),
			alpha,
			width,
		);
	}
}

fn draw_core_pulse(state: &SkillNetworkState, surface: &mut impl Surface, now_ms: f64) {
	let Some(core) = state.graph.hub_node(Hub::Core) else {
		return;
	};
	let (scale, alpha) = pulse(now_ms);
	let radius = core.radius() * scale;

	let inner = format!("rgba(239, 68, 68, {alpha})");
	let outer = format!("rgba(239, 68, 68, {})", alpha * 0.5);
	for (r, fill) in [(radius, &inner), (radius * 1.15, &outer)] {
		surface.circle(
			(core.x, core.y),
			r,
			&CircleStyle {
				fill,
				stroke: None,
				glow: None,
			},
		);
	}
}

fn draw_nodes(state: &SkillNetworkState, surface: &mut impl Surface) {
	let dragged = state.dragged_index();
	for (idx, node) in state.graph.nodes.iter().enumerate() {
		if Some(idx) != dragged {
			draw_node(state, surface, node, false);
		}
	}
	// Last, so it sits above everything it is pushed through.
	if let Some(idx) = dragged {
		draw_node(state, surface, &state.graph.nodes[idx], true);
	}
}

fn draw_node(state: &SkillNetworkState, surface: &mut impl Surface, node: &Node, dragged: bool) {
	let hovered = state.focused_id() == Some(node.id.as_str());
	let highlighted = hovered || dragged;
	let hub_color = node.group.color();

	let (fill, outline, font, text_color) = match node.kind {
		NodeKind::Hub => (node.color(), WHITE, "bold 20px Inter, sans-serif", "#000"),
		NodeKind::Leaf { .. } if highlighted => ("#333", WHITE, "bold 14px Inter, sans-serif", "#fff"),
		NodeKind::Leaf { .. } => ("#1a1a1a", hub_color, "bold 14px Inter, sans-serif", "#fff"),
	};

	let stroke = if highlighted {
		Some(Stroke {
			color: WHITE,
			width: 4.0,
		})
	} else if node.is_hub() {
		None
	} else {
		Some(Stroke {
			color: outline,
			width: 2.0,
		})
	};

	let glow = if dragged {
		Some(Glow {
			color: DRAG_GLOW,
			blur: 40.0,
		})
	} else if node.is_hub() || hovered {
		Some(Glow {
			color: outline,
			blur: 20.0,
		})
	} else {
		None
	};

	let radius = if dragged {
		node.radius() * DRAG_SCALE
	} else {
		node.radius()
	};

	surface.circle((node.x, node.y), radius, &CircleStyle { fill, stroke, glow });
	surface.text(&node.label, (node.x, node.y), font, text_color, Anchor::Center);
}

fn draw_tooltip(state: &SkillNetworkState, surface: &mut impl Surface) {
	let Some(node) = state.hovered_id().and_then(|id| state.graph.node(id)) else {
		return;
	};
	let description = node.description();

	let box_width = surface
		.text_width(&node.label, TITLE_FONT)
		.max(surface.text_width(description, DESC_FONT))
		+ TOOLTIP_PADDING * 2.0;
	let rect = tooltip_rect(node, box_width, state.width, state.height);

	surface.panel(
		rect,
		&PanelStyle {
			fill: "rgba(10, 10, 10, 0.95)",
			border: Stroke {
				color: "rgba(239, 68, 68, 0.4)",
				width: 1.0,
			},
			shadow: Glow {
				color: "rgba(0,0,0,0.5)",
				blur: 10.0,
			},
			corner: 8.0,
		},
	);
	surface.text(
		&node.label,
		(rect.x + TOOLTIP_PADDING, rect.y + TOOLTIP_PADDING - 2.0),
		TITLE_FONT,
		WHITE,
		Anchor::TopLeft,
	);
	surface.text(
		description,
		(rect.x + TOOLTIP_PADDING, rect.y + TOOLTIP_PADDING + 20.0),
		DESC_FONT,
		"#9ca3af",
		Anchor::TopLeft,
	);
}
