use glam::Vec2;

/// Geometry handed to the drawing collaborator for one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcShape {
    pub center: Vec2,
    /// Phase 0 progress: how far the inner hole has grown, in \[0, 1\].
    pub clear_fraction: f32,
    /// Phase 1 progress: where the sweep starts around the circle, in \[0, 1\].
    pub sweep_fraction: f32,
    pub base_radius: f32,
}

/// Drawing target the controller renders into.
pub trait RenderSurface {
    fn clear(&mut self, color: &str);
    fn draw_effect_shape(&mut self, shape: &ArcShape, color: &str);
}

/// Host viewport size in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `min(width, height) / radius_factor`.
    pub fn base_radius(&self, radius_factor: f32) -> f32 {
        self.width.min(self.height).max(0.0) / radius_factor
    }
}
