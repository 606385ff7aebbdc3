// Visual tuning for the canvas shell. Animation tunables live in
// `arc_core::EffectConfig`.

/// Element id of the drawing canvas in the host page.
pub const CANVAS_ID: &str = "app-canvas";

/// Largest hole radius, as a fraction of the base radius, once the clear phase
/// is done. The remaining ring is what the sweep phase erases.
pub const RING_INNER_FRACTION: f64 = 0.9;

/// Arcs start at 12 o'clock.
pub const ARC_START_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

/// `MouseEvent.button` value of the primary (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// `data-*` attribute on the canvas -> config override key.
pub const CONFIG_ATTRIBUTES: [(&str, &str); 5] = [
    ("data-step", "step"),
    ("data-interval-ms", "interval-ms"),
    ("data-radius-factor", "radius-factor"),
    ("data-background", "background"),
    ("data-foreground", "foreground"),
];
