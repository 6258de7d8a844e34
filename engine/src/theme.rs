//! Scene Theme
//!
//! Centralizes the demo's colors and sizing so the look can be tweaked in
//! one place without touching geometry code.

/// RGBA color in linear space, exactly as it lands in the vertex stream.
pub type Color = [f32; 4];

/// Visual configuration for the hexagon grid scene.
#[derive(Clone, Debug)]
pub struct SceneTheme {
    // Canvas
    /// Clear color behind the grid (pale cyan sky)
    pub background: Color,

    // Hexagon sizing
    /// Circumradius of one hexagon cap in pixels
    pub hex_radius: f32,
    /// Thickness of cap edges, pillars and bottom edges in pixels
    pub edge_thickness: f32,

    // Prism fills
    /// Top cap fill color
    pub top_fill: Color,
    /// Base hue of the side walls before horizontal lightening
    pub wall_base: Color,
    /// How far a wall lightens toward white at the prism's right edge (0..1)
    pub wall_lighten: f32,

    // Outlines
    /// Edge color on faces that face the viewer
    pub edge_light: Color,
    /// Edge color on occluded faces and silhouette pillars
    pub edge_dark: Color,
}

impl SceneTheme {
    /// Distance between adjacent hexagon centers under this layout.
    pub fn grid_radius(&self) -> f32 {
        3.0_f32.sqrt() * self.hex_radius
    }
}

impl Default for SceneTheme {
    fn default() -> Self {
        Self {
            background: [0.651, 0.953, 0.976, 1.0], // rgb(166, 243, 249)
            hex_radius: 50.0,
            edge_thickness: 3.0,
            top_fill: [0.93, 0.79, 0.40, 1.0],  // Honey
            wall_base: [0.62, 0.44, 0.18, 1.0], // Amber brown
            wall_lighten: 0.3,
            edge_light: [0.98, 0.92, 0.65, 1.0],
            edge_dark: [0.20, 0.13, 0.05, 1.0],
        }
    }
}

/// Lighten `color` toward white by `t` in `[0, 1]`; alpha is untouched.
pub fn lighten(color: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    [
        color[0] + (1.0 - color[0]) * t,
        color[1] + (1.0 - color[1]) * t,
        color[2] + (1.0 - color[2]) * t,
        color[3],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_grid_radius_is_sqrt3_times_hex_radius() {
        let theme = SceneTheme::default();
        assert_approx_eq!(theme.grid_radius(), 86.6025, 1e-3);
    }

    #[test]
    fn test_lighten_endpoints() {
        let base = [0.2, 0.4, 0.6, 0.8];
        assert_eq!(lighten(base, 0.0), base);

        let white = lighten(base, 1.0);
        assert_approx_eq!(white[0], 1.0, 1e-6);
        assert_approx_eq!(white[1], 1.0, 1e-6);
        assert_approx_eq!(white[2], 1.0, 1e-6);
        assert_eq!(white[3], 0.8);
    }

    #[test]
    fn test_lighten_clamps_factor() {
        let base = [0.5, 0.5, 0.5, 1.0];
        assert_eq!(lighten(base, -2.0), base);
        assert_eq!(lighten(base, 5.0), lighten(base, 1.0));
    }
}
