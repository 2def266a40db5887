//! Scene graph module
//!
//! A minimal hierarchy the animation player and camera controller write into:
//! - Node: scene node (parent/child links, transform, surface properties)
//! - Transform: TRS component with matrix caches and dirty checking
//! - Scene: node arena plus hierarchy operations
//! - `transform_system`: decoupled world-matrix update

pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle addressing a [`Node`] inside a [`Scene`].
    pub struct NodeHandle;
}
