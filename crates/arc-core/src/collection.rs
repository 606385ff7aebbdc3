//! Ordered set of live effect nodes with edge-transition detection.
//!
//! Insertions and removals only happen here, so the empty -> non-empty and
//! non-empty -> empty edges are reported exactly once each.

use crate::scale::{divide_scale, PHASES};
use crate::state::{AnimationState, StartOutcome, StepOutcome};
use glam::Vec2;

/// Stable identifier of a node, unique for the lifetime of its collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// One tap effect: where it was spawned and how far its cycle has run.
#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub position: Vec2,
    pub state: AnimationState,
}

impl Node {
    fn new(id: NodeId, position: Vec2) -> Self {
        Self {
            id,
            position,
            state: AnimationState::new(),
        }
    }

    /// Local progress of the clear phase and the sweep phase.
    pub fn phase_scales(&self) -> (f32, f32) {
        let scale = self.state.scale();
        (divide_scale(scale, 0, PHASES), divide_scale(scale, 1, PHASES))
    }
}

/// Result of [`NodeCollection::create`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The collection was empty before this node.
    FirstNode(NodeId),
    Added(NodeId),
}

impl CreateOutcome {
    pub fn id(self) -> NodeId {
        match self {
            CreateOutcome::FirstNode(id) | CreateOutcome::Added(id) => id,
        }
    }
}

/// Result of one [`NodeCollection::update`] pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No node finished this pass (or there were none).
    Unchanged,
    /// This many nodes finished; others remain.
    Removed(usize),
    /// The last remaining nodes finished; the collection is now empty.
    Emptied(usize),
}

/// Live nodes in creation order.
#[derive(Clone, Debug, Default)]
pub struct NodeCollection {
    nodes: Vec<Node>,
    next_id: u64,
}

impl NodeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order; what the renderer draws.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Spawn a node at `position` and start its forward cycle.
    pub fn create(&mut self, position: Vec2) -> CreateOutcome {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let mut node = Node::new(id, position);
        let started = node.state.start_updating();
        self.nodes.push(node);
        match started {
            StartOutcome::Started if self.nodes.len() == 1 => {
                log::debug!("[nodes] first node {:?} at ({:.1},{:.1})", id, position.x, position.y);
                CreateOutcome::FirstNode(id)
            }
            _ => CreateOutcome::Added(id),
        }
    }

    /// Advance every node once, in creation order, then drop the ones whose
    /// cycle completed. Removal is deferred until the pass is over.
    pub fn update(&mut self, step: f32) -> UpdateOutcome {
        if self.nodes.is_empty() {
            return UpdateOutcome::Unchanged;
        }
        let mut finished = vec![false; self.nodes.len()];
        for (node, done) in self.nodes.iter_mut().zip(finished.iter_mut()) {
            *done = node.state.update(step) == StepOutcome::PhaseComplete;
        }
        let removed = finished.iter().filter(|done| **done).count();
        if removed == 0 {
            return UpdateOutcome::Unchanged;
        }
        let mut done = finished.into_iter();
        self.nodes.retain(|_| !done.next().unwrap_or(false));
        if self.nodes.is_empty() {
            log::debug!("[nodes] emptied after removing {}", removed);
            UpdateOutcome::Emptied(removed)
        } else {
            UpdateOutcome::Removed(removed)
        }
    }
}
