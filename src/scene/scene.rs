use glam::{Affine3A, Vec3};
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;
use crate::scene::transform_system;

/// Scene graph container.
///
/// Pure data layer: a node arena plus the hierarchy operations the animation
/// player and camera controller need. Rendering, materials and GUI widgets
/// live outside this crate; they address nodes through [`NodeHandle`]s.
#[derive(Default)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Inserts an unnamed node at the scene root.
    pub fn create_node(&mut self) -> NodeHandle {
        self.add_node(Node::new())
    }

    /// Inserts a named node at the scene root.
    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        self.add_node(Node::with_name(name))
    }

    /// Adds a node to the scene root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        } else {
            log::warn!("Parent node not found, adding to root instead");
            self.root_nodes.push(handle);
            return handle;
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent);
        }

        handle
    }

    /// Removes a node and its whole subtree.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let children = if let Some(node) = self.nodes.get(handle) {
            node.children.clone()
        } else {
            return;
        };

        for child in children {
            self.remove_node(child);
        }

        let parent_opt = self.nodes.get(handle).and_then(|n| n.parent);
        if let Some(parent_handle) = parent_opt {
            if let Some(parent) = self.nodes.get_mut(parent_handle)
                && let Some(pos) = parent.children.iter().position(|&x| x == handle)
            {
                parent.children.remove(pos);
            }
        } else if let Some(pos) = self.root_nodes.iter().position(|&x| x == handle) {
            self.root_nodes.remove(pos);
        }

        self.nodes.remove(handle);
    }

    /// Reparents `child` under `parent`, keeping the child's *local*
    /// transform as is. For the world-preserving variant used when a camera
    /// attaches to a moving target, see
    /// [`Scene::attach_preserving_world`].
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }

        // 1. Detach from the old parent (or the root list).
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to the new parent.
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        } else {
            log::error!("Parent node not found during attach!");
            self.root_nodes.push(child);
            return;
        }

        // 3. Update the child.
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Moves a node back to the scene root, keeping its local transform.
    pub fn detach_to_root(&mut self, handle: NodeHandle) {
        let old_parent = self.nodes.get(handle).and_then(|n| n.parent);
        let Some(p) = old_parent else {
            return; // already a root
        };

        if let Some(n) = self.nodes.get_mut(p)
            && let Some(i) = n.children.iter().position(|&x| x == handle)
        {
            n.children.remove(i);
        }

        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = None;
            c.transform.mark_dirty();
        }
        self.root_nodes.push(handle);
    }

    /// Reparents `child` under `parent` while keeping the child's *world*
    /// transform unchanged: the child's local transform is recomputed
    /// relative to the new parent at the moment of reparenting, so nothing
    /// moves on screen.
    pub fn attach_preserving_world(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        let Some(child_world) = self.compute_world_transform(child) else {
            return;
        };
        let Some(parent_world) = self.compute_world_transform(parent) else {
            return;
        };

        self.attach(child, parent);

        let new_local = parent_world.inverse() * child_world;
        if let Some(node) = self.nodes.get_mut(child) {
            node.transform.apply_local_matrix(new_local);
        }
        transform_system::update_subtree(&mut self.nodes, child);
    }

    /// Moves a node to the scene root while keeping its world transform
    /// unchanged: at the root, local transform == world transform.
    pub fn detach_to_root_preserving_world(&mut self, handle: NodeHandle) {
        let Some(world) = self.compute_world_transform(handle) else {
            return;
        };

        self.detach_to_root(handle);

        if let Some(node) = self.nodes.get_mut(handle) {
            node.transform.apply_local_matrix(world);
        }
        transform_system::update_subtree(&mut self.nodes, handle);
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(|n| n.name.as_str())
    }

    pub fn set_name(&mut self, handle: NodeHandle, name: &str) {
        if let Some(node) = self.nodes.get_mut(handle) {
            node.name = name.to_string();
        }
    }

    /// Finds a node by name. Names are expected to be unique; with
    /// duplicates, which one is returned is unspecified.
    #[must_use]
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(handle, _)| handle)
    }

    /// Composes the node's world transform from the current TRS fields,
    /// walking up the parent chain.
    ///
    /// Unlike the cached [`Node::world_matrix`], this is always current,
    /// which is what the reparenting operations and the follow controller
    /// need mid-frame.
    #[must_use]
    pub fn compute_world_transform(&self, handle: NodeHandle) -> Option<Affine3A> {
        let node = self.nodes.get(handle)?;
        let mut world = node.transform.local_trs();

        let mut current = node.parent;
        while let Some(parent_handle) = current {
            let Some(parent) = self.nodes.get(parent_handle) else {
                break;
            };
            world = parent.transform.local_trs() * world;
            current = parent.parent;
        }

        Some(world)
    }

    /// World position of a node, computed fresh (see
    /// [`Scene::compute_world_transform`]).
    #[must_use]
    pub fn world_position(&self, handle: NodeHandle) -> Option<Vec3> {
        self.compute_world_transform(handle)
            .map(|m| Vec3::from(m.translation))
    }

    /// Updates the cached world matrices of the whole scene. Called once per
    /// frame by the render loop, after the animation player has written the
    /// sampled TRS values.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &self.root_nodes);
    }

    /// Updates the cached world matrices of a single subtree.
    pub fn update_subtree(&mut self, root: NodeHandle) {
        transform_system::update_subtree(&mut self.nodes, root);
    }
}
