use glam::Vec3;

use crate::scene::{NodeHandle, Scene};

/// How a following camera couples to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupling {
    /// The camera becomes a child of the target and inherits its full
    /// transform through scene-graph composition. No per-frame work.
    Rigid,
    /// The camera stays at the scene root, tracks the target's position
    /// with a fixed offset, and re-orients toward it every frame.
    Decoupled,
}

/// Observable controller state, for the GUI to mirror into its widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowState {
    Unfollowing,
    FollowingRigid,
    FollowingDecoupled,
}

/// Manages a camera node's attachment to a chosen target node.
///
/// Every transition (picking a target, dropping it, toggling coupling)
/// preserves the camera's world transform at the instant of the switch, so
/// the view never jumps. In rigid mode that means reparenting the camera
/// under the target with a recomputed local transform; in decoupled mode the
/// camera rides at the scene root and [`FollowController::update`] repositions
/// it from the target's world position each frame.
pub struct FollowController {
    camera: NodeHandle,
    followable: Vec<NodeHandle>,
    target: Option<NodeHandle>,
    coupling: Coupling,
    /// Camera world position minus target world position, captured when
    /// decoupled tracking began or coupling last changed.
    offset: Vec3,
}

impl FollowController {
    #[must_use]
    pub fn new(camera: NodeHandle) -> Self {
        Self {
            camera,
            followable: Vec::new(),
            target: None,
            coupling: Coupling::Rigid,
            offset: Vec3::ZERO,
        }
    }

    /// Registers a node the GUI may offer as a follow target.
    pub fn add_followable(&mut self, node: NodeHandle) {
        self.followable.push(node);
    }

    /// Registers several followable nodes at once.
    pub fn add_followables(&mut self, nodes: &[NodeHandle]) {
        self.followable.extend_from_slice(nodes);
    }

    /// Nodes registered as follow targets, in registration order. The GUI
    /// builds its target drop-down from this list.
    #[must_use]
    pub fn followable(&self) -> &[NodeHandle] {
        &self.followable
    }

    #[must_use]
    pub fn camera(&self) -> NodeHandle {
        self.camera
    }

    #[must_use]
    pub fn target(&self) -> Option<NodeHandle> {
        self.target
    }

    #[must_use]
    pub fn coupling(&self) -> Coupling {
        self.coupling
    }

    #[must_use]
    pub fn state(&self) -> FollowState {
        match (self.target, self.coupling) {
            (None, _) => FollowState::Unfollowing,
            (Some(_), Coupling::Rigid) => FollowState::FollowingRigid,
            (Some(_), Coupling::Decoupled) => FollowState::FollowingDecoupled,
        }
    }

    /// Selects the node to follow, or `None` to stop following.
    ///
    /// `target` is not checked against the followable list; the GUI is
    /// expected to only offer registered nodes. Switching target while
    /// already following re-runs the attach/offset computation against the
    /// new target.
    pub fn set_target(&mut self, scene: &mut Scene, target: Option<NodeHandle>) {
        self.target = target;
        match target {
            None => {
                scene.detach_to_root_preserving_world(self.camera);
            }
            Some(node) => {
                self.enter_coupled_state(scene, node);
            }
        }
    }

    /// Switches the coupling mode. When a target is set, the camera
    /// re-enters the follow state for the new mode via the same transition
    /// logic as [`FollowController::set_target`], so toggling never moves
    /// the camera.
    pub fn set_coupling(&mut self, scene: &mut Scene, mode: Coupling) {
        if mode == self.coupling {
            return;
        }
        self.coupling = mode;

        if let Some(node) = self.target {
            self.enter_coupled_state(scene, node);
        }
    }

    /// Per-frame tracking, called by the render loop after the scene's
    /// world matrices are refreshed. Only does work in decoupled mode:
    /// repositions the camera at the target plus the captured offset and
    /// re-orients it toward the target (+Y up, so only yaw and pitch
    /// change). A stale target degrades to a no-op.
    pub fn update(&mut self, scene: &mut Scene) {
        if self.coupling != Coupling::Decoupled {
            return;
        }
        let Some(target) = self.target else {
            return;
        };
        let Some(target_pos) = scene.world_position(target) else {
            return;
        };
        let Some(camera) = scene.get_node_mut(self.camera) else {
            return;
        };

        // The camera rides at the scene root in decoupled mode, so its local
        // transform is its world transform.
        camera.transform.position = target_pos + self.offset;
        camera.transform.look_at(target_pos, Vec3::Y);
    }

    fn enter_coupled_state(&mut self, scene: &mut Scene, target: NodeHandle) {
        match self.coupling {
            Coupling::Rigid => {
                scene.attach_preserving_world(self.camera, target);
            }
            Coupling::Decoupled => {
                scene.detach_to_root_preserving_world(self.camera);

                let camera_pos = scene.world_position(self.camera).unwrap_or(Vec3::ZERO);
                let target_pos = scene.world_position(target).unwrap_or(Vec3::ZERO);
                self.offset = camera_pos - target_pos;
            }
        }
    }
}
