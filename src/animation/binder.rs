use crate::animation::binding::PropertyBinding;
use crate::animation::clip::AnimationClip;
use crate::scene::Scene;

pub struct Binder;

impl Binder {
    /// Resolves a clip's tracks to concrete node handles by node name.
    ///
    /// Tracks whose node cannot be found are skipped with a warning; they
    /// simply do not animate anything.
    #[must_use]
    pub fn bind(scene: &Scene, clip: &AnimationClip) -> Vec<PropertyBinding> {
        let mut bindings = Vec::with_capacity(clip.tracks.len());

        for (track_index, track) in clip.tracks.iter().enumerate() {
            let node_name = &track.meta.node_name;

            if let Some(node) = scene.find_node_by_name(node_name) {
                bindings.push(PropertyBinding {
                    track_index,
                    node,
                    target: track.meta.target,
                });
            } else {
                log::warn!("Animation track targets unknown node '{node_name}', skipping");
            }
        }

        bindings
    }
}
