use crate::api::types::SceneId;

/// Something the host draws, identified by what owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageNode {
    /// Visual root of an active scene.
    Scene(SceneId),
    /// The transition overlay.
    TransitionOverlay,
    /// The FPS diagnostics overlay.
    Diagnostics,
}

/// Draw order of everything attached to the render surface.
///
/// Nodes are drawn back-to-front: index 0 first, the last node on top.
/// A node appears at most once.
#[derive(Debug, Default)]
pub struct Stage {
    nodes: Vec<StageNode>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(4),
        }
    }

    /// Attach `node` on top. Attaching an attached node leaves the order unchanged.
    pub fn attach(&mut self, node: StageNode) {
        if !self.contains(node) {
            self.nodes.push(node);
        }
    }

    /// Detach `node`. Returns whether it was attached.
    pub fn detach(&mut self, node: StageNode) -> bool {
        if let Some(idx) = self.nodes.iter().position(|n| *n == node) {
            self.nodes.remove(idx);
            true
        } else {
            false
        }
    }

    /// Move an attached node to the top. No-op for detached nodes.
    pub fn bring_to_front(&mut self, node: StageNode) {
        if self.detach(node) {
            self.nodes.push(node);
        }
    }

    pub fn contains(&self, node: StageNode) -> bool {
        self.nodes.contains(&node)
    }

    /// Nodes back-to-front.
    pub fn nodes(&self) -> &[StageNode] {
        &self.nodes
    }

    /// The node drawn last.
    pub fn top(&self) -> Option<StageNode> {
        self.nodes.last().copied()
    }

    /// Position in draw order, 0 = back.
    pub fn depth_of(&self, node: StageNode) -> Option<usize> {
        self.nodes.iter().position(|n| *n == node)
    }

    /// Scene roots currently attached.
    pub fn scenes(&self) -> impl Iterator<Item = SceneId> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            StageNode::Scene(id) => Some(*id),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
