use glam::{Affine3A, Vec4};

use crate::scene::NodeHandle;
use crate::scene::transform::Transform;

/// A scene node: hierarchy links, a transform, and the small set of surface
/// properties the animation player can write.
///
/// # Hierarchy
///
/// Nodes form a tree through `parent` / `children` links. The parent link is
/// a plain optional handle into the owning [`Scene`](crate::scene::Scene)
/// arena, so there is no ownership cycle.
///
/// # Animatable surface
///
/// Besides the transform TRS, a node carries `color` and `opacity`. The core
/// does no shading itself; these are plain values an external renderer reads
/// back, and they exist so color and scalar keyframe tracks have a concrete
/// assignment target.
#[derive(Debug, Clone)]
pub struct Node {
    /// Display name, used to resolve animation track bindings.
    pub name: String,

    /// Parent node handle (None for root nodes)
    pub(crate) parent: Option<NodeHandle>,
    /// Child node handles
    pub(crate) children: Vec<NodeHandle>,

    /// Transform component (hot data accessed every frame)
    pub transform: Transform,

    /// RGBA tint, target of color tracks.
    pub color: Vec4,
    /// Target of scalar tracks.
    pub opacity: f32,

    pub visible: bool,
}

impl Node {
    /// Creates an unnamed node with a default transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            color: Vec4::ONE,
            opacity: 1.0,
            visible: true,
        }
    }

    /// Creates a named node.
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::new()
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns a reference to the cached world transformation matrix.
    ///
    /// Valid after the last [`Scene::update_matrix_world`](crate::scene::Scene::update_matrix_world)
    /// pass.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
