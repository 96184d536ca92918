use log::debug;

use super::state::SkillNetworkState;

/// What the pointer is currently doing to the graph. Nodes are referenced by id
/// and looked up on use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
	#[default]
	Idle,
	Hovering(String),
	Dragging(String),
}

/// Pointer affordance the canvas should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
	Default,
	Pointer,
	Grabbing,
}

impl Cursor {
	pub fn as_css(self) -> &'static str {
		match self {
			Cursor::Default => "default",
			Cursor::Pointer => "pointer",
			Cursor::Grabbing => "grabbing",
		}
	}
}

impl SkillNetworkState {
	/// Topmost node under the point. Later nodes are drawn on top, so search backwards.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		self.graph.nodes.iter().rposition(|node| node.contains(x, y))
	}

	fn idle_cursor(&self) -> Cursor {
		match self.interaction {
			Interaction::Hovering(_) => Cursor::Pointer,
			_ => Cursor::Default,
		}
	}

	fn refresh_hover(&mut self, x: f64, y: f64) {
		self.interaction = match self.node_at_position(x, y) {
			Some(idx) => Interaction::Hovering(self.graph.nodes[idx].id.clone()),
			None => Interaction::Idle,
		};
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) -> Cursor {
		self.pointer = Some((x, y));

		if let Some(idx) = self.dragged_index() {
			let (width, height) = (self.width, self.height);
			let node = &mut self.graph.nodes[idx];
			let margin = node.radius();
			// min/max rather than clamp: a surface narrower than the node must not panic.
			node.x = x.min(width - margin).max(margin);
			node.y = y.min(height - margin).max(margin);
			node.vx = 0.0;
			node.vy = 0.0;
			return Cursor::Grabbing;
		}

		self.refresh_hover(x, y);
		self.idle_cursor()
	}

	/// Mouse button pressed. Only grabs if something is already hovered.
	pub fn pointer_down(&mut self) -> Cursor {
		if let Interaction::Hovering(id) = &self.interaction {
			debug!("drag start: {id}");
			self.interaction = Interaction::Dragging(id.clone());
			return Cursor::Grabbing;
		}
		self.idle_cursor()
	}

	/// Touch has no hover phase, so hit-test at the touch point before grabbing.
	pub fn touch_start(&mut self, x: f64, y: f64) -> Cursor {
		self.pointer = Some((x, y));
		if let Some(idx) = self.node_at_position(x, y) {
			self.interaction = Interaction::Hovering(self.graph.nodes[idx].id.clone());
		}
		self.pointer_down()
	}

	/// Release. The dropped node stays hovered until the next move says otherwise.
	pub fn pointer_up(&mut self) -> Cursor {
		if let Interaction::Dragging(id) = &self.interaction {
			debug!("drag end: {id}");
			self.interaction = Interaction::Hovering(id.clone());
		}
		self.idle_cursor()
	}
}
