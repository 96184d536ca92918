//! Force-directed skill graph: hub categories with attached skill leaves, laid out
//! by a small per-frame physics simulation and drawn to a canvas.

mod component;
mod interaction;
mod physics;
mod render;
mod state;
mod surface;
mod types;

pub use component::SkillNetwork;
pub use types::SkillCatalog;
