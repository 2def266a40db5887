use crate::scene::NodeHandle;

/// The node property a track writes to.
///
/// `Translation` / `Scale` carry Vec3 data, `Rotation` carries Quat,
/// `Color` carries Vec4, `Opacity` carries f32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // transform.position
    Rotation,    // transform.rotation
    Scale,       // transform.scale
    Color,       // node.color
    Opacity,     // node.opacity
}

/// Binding relationship: maps track `track_index` from a clip to the target
/// property of `node` in the scene.
#[derive(Debug, Clone)]
pub struct PropertyBinding {
    pub track_index: usize,
    pub node: NodeHandle,
    pub target: TargetPath,
}
