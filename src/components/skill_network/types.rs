pub const HUB_RADIUS: f64 = 60.0;
pub const LEAF_COLOR: &str = "#ffffff";

/// The four top-level categories. Every leaf belongs to exactly one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hub {
	Core,
	Languages,
	DataScience,
	BigData,
}

impl Hub {
	pub const ALL: [Hub; 4] = [Hub::Core, Hub::Languages, Hub::DataScience, Hub::BigData];

	pub fn id(self) -> &'static str {
		match self {
			Hub::Core => "core",
			Hub::Languages => "lang",
			Hub::DataScience => "data",
			Hub::BigData => "tools",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Hub::Core => "AI & ML",
			Hub::Languages => "Languages",
			Hub::DataScience => "Data Sci",
			Hub::BigData => "Big Data",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			Hub::Core => "#ef4444",
			Hub::Languages => "#3b82f6",
			Hub::DataScience => "#eab308",
			Hub::BigData => "#10b981",
		}
	}

	/// Name shown in the legend overlay.
	pub fn legend(self) -> &'static str {
		match self {
			Hub::Core => "AI & ML Core",
			Hub::Languages => "Languages",
			Hub::DataScience => "Data Science",
			Hub::BigData => "Big Data & Tools",
		}
	}

	/// Tooltip line for leaves of this group.
	pub fn leaf_description(self) -> &'static str {
		match self {
			Hub::Core => "Core Competency & Research Focus",
			Hub::Languages => "Programming & Scripting",
			Hub::DataScience => "Data Analysis & Visualization",
			Hub::BigData => "Big Data & Database Tech",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
	Hub,
	Leaf { radius: f64 },
}

impl NodeKind {
	/// Leaf size grows with the label so the text fits, bounded to [30, 70].
	pub fn leaf(label: &str) -> Self {
		let len = label.chars().count() as f64;
		NodeKind::Leaf {
			radius: (20.0 + 2.8 * len).clamp(30.0, 70.0),
		}
	}
}

#[derive(Clone, Debug)]
pub struct Node {
	pub id: String,
	pub label: String,
	pub group: Hub,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub kind: NodeKind,
}

impl Node {
	pub fn radius(&self) -> f64 {
		match self.kind {
			NodeKind::Hub => HUB_RADIUS,
			NodeKind::Leaf { radius } => radius,
		}
	}

	pub fn is_hub(&self) -> bool {
		matches!(self.kind, NodeKind::Hub)
	}

	pub fn color(&self) -> &'static str {
		match self.kind {
			NodeKind::Hub => self.group.color(),
			NodeKind::Leaf { .. } => LEAF_COLOR,
		}
	}

	pub fn description(&self) -> &'static str {
		match self.kind {
			NodeKind::Hub => "Primary Knowledge Domain",
			NodeKind::Leaf { .. } => self.group.leaf_description(),
		}
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		let (dx, dy) = (self.x - x, self.y - y);
		let r = self.radius();
		dx * dx + dy * dy < r * r
	}
}

/// Hub → leaf edge, as indices into the node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
	pub source: usize,
	pub target: usize,
}

#[derive(Clone, Debug, Default)]
pub struct SkillGraph {
	pub nodes: Vec<Node>,
	pub links: Vec<Link>,
}

impl SkillGraph {
	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn hub_node(&self, hub: Hub) -> Option<&Node> {
		self.nodes.iter().find(|n| n.is_hub() && n.group == hub)
	}

	/// Sum of squared velocities.
	#[cfg(test)]
	pub fn kinetic_energy(&self) -> f64 {
		self.nodes.iter().map(|n| n.vx * n.vx + n.vy * n.vy).sum()
	}
}

/// Labels to attach to each hub, in display order.
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
	pub core: Vec<String>,
	pub languages: Vec<String>,
	pub data_tools: Vec<String>,
	pub big_data: Vec<String>,
}

impl SkillCatalog {
	pub fn items(&self, hub: Hub) -> &[String] {
		match hub {
			Hub::Core => &self.core,
			Hub::Languages => &self.languages,
			Hub::DataScience => &self.data_tools,
			Hub::BigData => &self.big_data,
		}
	}
}
