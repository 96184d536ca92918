use std::collections::HashSet;

use log::debug;

use super::interaction::Interaction;
use super::physics::PhysicsParams;
use super::types::{Hub, Link, Node, NodeKind, SkillCatalog, SkillGraph};

/// Full width of the random spread around the canvas center for hubs.
const HUB_JITTER: f64 = 50.0;
/// Full width of the random spread around the owning hub for leaves.
const LEAF_JITTER: f64 = 100.0;

/// Build the two-level hub/leaf graph.
///
/// `random` yields values in `[0, 1)`; it only perturbs starting positions so
/// that no two nodes begin exactly on top of each other.
pub fn build_graph(
	catalog: &SkillCatalog,
	width: f64,
	height: f64,
	random: &mut impl FnMut() -> f64,
) -> SkillGraph {
	let mut graph = SkillGraph::default();
	let mut taken = HashSet::new();
	let (cx, cy) = (width / 2.0, height / 2.0);

	for hub in Hub::ALL {
		taken.insert(hub.id().to_string());
		let x = cx + (random() - 0.5) * HUB_JITTER;
		let y = cy + (random() - 0.5) * HUB_JITTER;
		graph.nodes.push(Node {
			id: hub.id().into(),
			label: hub.label().into(),
			group: hub,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			kind: NodeKind::Hub,
		});
	}

	for (hub_idx, hub) in Hub::ALL.into_iter().enumerate() {
		let (hx, hy) = (graph.nodes[hub_idx].x, graph.nodes[hub_idx].y);
		for label in catalog.items(hub) {
			let x = hx + (random() - 0.5) * LEAF_JITTER;
			let y = hy + (random() - 0.5) * LEAF_JITTER;
			let target = graph.nodes.len();
			graph.nodes.push(Node {
				id: unique_id(label, &mut taken),
				label: label.clone(),
				group: hub,
				x,
				y,
				vx: 0.0,
				vy: 0.0,
				kind: NodeKind::leaf(label),
			});
			graph.links.push(Link {
				source: hub_idx,
				target,
			});
		}
	}

	graph
}

fn unique_id(label: &str, taken: &mut HashSet<String>) -> String {
	if taken.insert(label.to_string()) {
		return label.to_string();
	}
	let mut n = 2;
	loop {
		let candidate = format!("{label}#{n}");
		if taken.insert(candidate.clone()) {
			return candidate;
		}
		n += 1;
	}
}

pub struct SkillNetworkState {
	pub graph: SkillGraph,
	pub params: PhysicsParams,
	pub interaction: Interaction,
	pub pointer: Option<(f64, f64)>,
	pub width: f64,
	pub height: f64,
}

impl SkillNetworkState {
	pub fn new(
		catalog: &SkillCatalog,
		width: f64,
		height: f64,
		random: &mut impl FnMut() -> f64,
	) -> Self {
		Self {
			graph: build_graph(catalog, width, height, random),
			params: PhysicsParams::default(),
			interaction: Interaction::Idle,
			pointer: None,
			width,
			height,
		}
	}

	pub fn hovered_id(&self) -> Option<&str> {
		match &self.interaction {
			Interaction::Hovering(id) => Some(id.as_str()),
			_ => None,
		}
	}

	pub fn dragged_id(&self) -> Option<&str> {
		match &self.interaction {
			Interaction::Dragging(id) => Some(id.as_str()),
			_ => None,
		}
	}

	/// Node that should render highlighted: the hovered one, or the one in hand.
	pub fn focused_id(&self) -> Option<&str> {
		self.hovered_id().or_else(|| self.dragged_id())
	}

	pub fn dragged_index(&self) -> Option<usize> {
		self.dragged_id().and_then(|id| self.graph.index_of(id))
	}

	pub fn tick(&mut self) {
		let dragged = self.dragged_index();
		self.graph
			.step(&self.params, (self.width, self.height), self.pointer, dragged);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		debug!("skill network resized to {width}x{height}");
		self.width = width;
		self.height = height;
	}
}

/// Deterministic stand-in for `Math.random` in tests.
#[cfg(test)]
pub(crate) fn seeded(seed: u64) -> impl FnMut() -> f64 {
	let mut state = seed;
	move || {
		state = (state * 9301 + 49297) % 233280;
		state as f64 / 233280.0
	}
}

#[cfg(test)]
pub(crate) fn sample_catalog() -> SkillCatalog {
	let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
	SkillCatalog {
		core: owned(&[
			"Supervised/Unsupervised ML",
			"Generative AI, LLMs",
			"Prompt Engineering",
			"Recommender Systems",
			"TensorFlow, PyTorch, Keras",
			"CNNs, RNNs, Transformers",
			"NLTK, spaCy",
		]),
		languages: owned(&["Python", "SQL", "C", "R", "JavaScript", "HTML/CSS"]),
		data_tools: owned(&["Pandas", "NumPy", "Matplotlib", "Seaborn", "Power BI", "Tableau"]),
		big_data: owned(&["MySQL", "MongoDB", "Hadoop", "Spark", "Hive"]),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_hubs_leaves_and_links() {
		let graph = build_graph(&sample_catalog(), 1200.0, 900.0, &mut seeded(1));
		assert_eq!(graph.nodes.len(), 4 + 7 + 6 + 6 + 5);
		assert_eq!(graph.links.len(), 24);

		let hub_ids = ["core", "lang", "data", "tools"];
		for link in &graph.links {
			let source = &graph.nodes[link.source];
			let target = &graph.nodes[link.target];
			assert!(hub_ids.contains(&source.id.as_str()));
			assert!(source.is_hub());
			assert!(!target.is_hub());
			assert_eq!(target.group, source.group);
		}
	}

	#[test]
	fn every_leaf_has_exactly_one_link() {
		let graph = build_graph(&sample_catalog(), 1200.0, 900.0, &mut seeded(2));
		for (idx, node) in graph.nodes.iter().enumerate().filter(|(_, n)| !n.is_hub()) {
			let count = graph.links.iter().filter(|l| l.target == idx).count();
			assert_eq!(count, 1, "{} has {} links", node.id, count);
			assert!(graph.hub_node(node.group).is_some());
		}
		assert!(graph.links.iter().all(|l| graph.nodes[l.source].is_hub()));
	}

	#[test]
	fn starting_positions_stay_within_jitter() {
		let (w, h) = (1000.0, 800.0);
		let graph = build_graph(&sample_catalog(), w, h, &mut seeded(3));
		for node in graph.nodes.iter().filter(|n| n.is_hub()) {
			assert!((node.x - w / 2.0).abs() <= 25.0);
			assert!((node.y - h / 2.0).abs() <= 25.0);
			assert_eq!(node.radius(), 60.0);
		}
		for link in &graph.links {
			let (hub, leaf) = (&graph.nodes[link.source], &graph.nodes[link.target]);
			assert!((leaf.x - hub.x).abs() <= 50.0);
			assert!((leaf.y - hub.y).abs() <= 50.0);
			assert_eq!((leaf.vx, leaf.vy), (0.0, 0.0));
		}
	}

	#[test]
	fn leaf_radius_tracks_label_length() {
		let graph = build_graph(&sample_catalog(), 1200.0, 900.0, &mut seeded(4));
		assert_eq!(graph.node("C").map(Node::radius), Some(30.0));
		assert_eq!(graph.node("Python").map(Node::radius), Some(20.0 + 2.8 * 6.0));
		assert_eq!(graph.node("Supervised/Unsupervised ML").map(Node::radius), Some(70.0));
	}

	#[test]
	fn empty_categories_leave_hubs_bare() {
		let graph = build_graph(&SkillCatalog::default(), 800.0, 600.0, &mut seeded(5));
		assert_eq!(graph.nodes.len(), 4);
		assert!(graph.links.is_empty());
	}

	#[test]
	fn duplicate_labels_get_distinct_ids() {
		let catalog = SkillCatalog {
			core: vec!["Python".into()],
			languages: vec!["Python".into(), "core".into()],
			..Default::default()
		};
		let graph = build_graph(&catalog, 800.0, 600.0, &mut seeded(6));
		let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), graph.nodes.len());
		assert!(ids.contains("Python#2"));
		assert!(ids.contains("core#2"));
	}

	#[test]
	fn tick_leaves_the_dragged_node_in_place() {
		let mut state = SkillNetworkState::new(&sample_catalog(), 1200.0, 900.0, &mut seeded(8));
		state.interaction = Interaction::Dragging("SQL".into());
		let idx = state.dragged_index().unwrap();
		let before = (state.graph.nodes[idx].x, state.graph.nodes[idx].y);
		for _ in 0..5 {
			state.tick();
		}
		let node = &state.graph.nodes[idx];
		assert_eq!((node.x, node.y), before);
	}
}
