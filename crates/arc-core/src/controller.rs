//! Ties the node collection to its tick timer and the drawing surface.

use crate::collection::{CreateOutcome, NodeCollection, NodeId, UpdateOutcome};
use crate::config::EffectConfig;
use crate::surface::{ArcShape, RenderSurface, Viewport};
use crate::timer::TickTimer;
use glam::Vec2;

/// Result of [`EffectController::handle_trigger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// First live node; the timer was started.
    TimerStarted(NodeId),
    Added(NodeId),
}

/// Result of one [`EffectController::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No live nodes; nothing was drawn.
    Idle,
    Continue,
    /// Some nodes finished their cycle and were removed.
    PhaseComplete(usize),
    /// The last node finished; the timer was stopped and a final frame drawn.
    CollectionEmptied,
}

/// One effect surface: its nodes, the timer that drives them, and the
/// settings used to draw them. The timer runs only while nodes are live.
pub struct EffectController<T: TickTimer> {
    nodes: NodeCollection,
    timer: T,
    config: EffectConfig,
    viewport: Viewport,
}

impl<T: TickTimer> EffectController<T> {
    pub fn new(config: EffectConfig, viewport: Viewport, timer: T) -> Self {
        Self {
            nodes: NodeCollection::new(),
            timer,
            config,
            viewport,
        }
    }

    pub fn nodes(&self) -> &NodeCollection {
        &self.nodes
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize; takes effect on the next render.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Full radius of a node's arc for the current viewport.
    pub fn base_radius(&self) -> f32 {
        self.viewport.base_radius(self.config.radius_factor)
    }

    /// Spawn a node at `(x, y)`; starts the timer if it is the only one.
    pub fn handle_trigger(&mut self, x: f32, y: f32) -> TriggerOutcome {
        match self.nodes.create(Vec2::new(x, y)) {
            CreateOutcome::FirstNode(id) => {
                self.timer.start();
                TriggerOutcome::TimerStarted(id)
            }
            CreateOutcome::Added(id) => TriggerOutcome::Added(id),
        }
    }

    /// One timer tick: draw the current frame, advance all nodes, and on the
    /// last removal stop the timer and draw the now-empty frame.
    pub fn tick<S: RenderSurface>(&mut self, surface: &mut S) -> TickOutcome {
        if self.nodes.is_empty() {
            return TickOutcome::Idle;
        }
        self.render(surface);
        match self.nodes.update(self.config.step) {
            UpdateOutcome::Unchanged => TickOutcome::Continue,
            UpdateOutcome::Removed(n) => TickOutcome::PhaseComplete(n),
            UpdateOutcome::Emptied(_) => {
                self.timer.stop();
                self.render(surface);
                TickOutcome::CollectionEmptied
            }
        }
    }

    /// Clear to the background and draw every live node.
    pub fn render<S: RenderSurface>(&self, surface: &mut S) {
        surface.clear(&self.config.background);
        let base_radius = self.base_radius();
        for node in self.nodes.iter() {
            let (clear_fraction, sweep_fraction) = node.phase_scales();
            let shape = ArcShape {
                center: node.position,
                clear_fraction,
                sweep_fraction,
                base_radius,
            };
            surface.draw_effect_shape(&shape, &self.config.foreground);
        }
    }
}
