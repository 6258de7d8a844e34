//! Scene Assembly
//!
//! Turns the current view state into one frame of draw primitives: grid
//! layout about the viewport center, then prism emission per hexagon in
//! layout order. Pure function of its inputs, so the whole frame is
//! testable without a window.

use glam::Vec2;

use crate::geometry::{classify_faces, emit_prism, grid_centers, project_cap};
use crate::render::primitives::DrawPrimitive;
use crate::state::ViewState;
use crate::theme::SceneTheme;

/// Build the primitive list for one frame of `view` in a `width` x
/// `height` viewport. Primitives come out in global painter order: hexagons
/// back to front, and within each hexagon walls, cap, edges, pillars,
/// bottom edges.
pub fn build_frame(
    view: &ViewState,
    width: u32,
    height: u32,
    theme: &SceneTheme,
) -> Vec<DrawPrimitive> {
    let origin = Vec2::new(width as f32 * 0.5, height as f32 * 0.5);
    let centers = grid_centers(
        origin,
        theme.grid_radius(),
        view.ring_count(),
        view.rotation(),
        view.tilt(),
    );

    // Worst case 18 primitives per prism
    let mut primitives = Vec::with_capacity(centers.len() * 18);
    for center in centers {
        let cap = project_cap(center, theme.hex_radius, view.rotation(), view.tilt());
        let visible = classify_faces(&cap);
        emit_prism(&cap, &visible, theme, &mut primitives);
    }
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_rings(rings: i32) -> ViewState {
        let mut view = ViewState::new();
        while view.ring_count() > rings {
            view.add_rings(-1).unwrap();
        }
        while view.ring_count() < rings {
            view.add_rings(1).unwrap();
        }
        view
    }

    #[test]
    fn test_single_hexagon_frame() {
        let view = state_with_rings(0);
        let frame = build_frame(&view, 1920, 1080, &SceneTheme::default());
        // 3 walls + cap + 6 edges + 4 pillars + 3 bottom edges
        assert_eq!(frame.len(), 17);
    }

    #[test]
    fn test_frame_grows_with_ring_count() {
        let theme = SceneTheme::default();
        let one_ring = build_frame(&state_with_rings(1), 1920, 1080, &theme);
        assert_eq!(one_ring.len(), 7 * 17);

        let two_rings = build_frame(&state_with_rings(2), 1920, 1080, &theme);
        assert_eq!(two_rings.len(), 19 * 17);
    }

    #[test]
    fn test_caps_emitted_back_to_front() {
        let view = state_with_rings(3);
        let frame = build_frame(&view, 1920, 1080, &SceneTheme::default());

        // A cap's centroid is its hexagon's center, so cap order mirrors
        // the layout's y sort
        let cap_ys: Vec<f32> = frame
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Polygon { points, .. } => {
                    Some(points.iter().map(|v| v.y).sum::<f32>() / points.len() as f32)
                }
                _ => None,
            })
            .collect();

        assert_eq!(cap_ys.len(), 37);
        for pair in cap_ys.windows(2) {
            assert!(pair[1] >= pair[0] - 1e-3);
        }
    }

    #[test]
    fn test_frame_is_reproducible() {
        let mut view = ViewState::new();
        view.add_rotation(0.8).unwrap();
        view.add_tilt(-0.2).unwrap();
        let theme = SceneTheme::default();

        assert_eq!(
            build_frame(&view, 1280, 720, &theme),
            build_frame(&view, 1280, 720, &theme)
        );
    }
}
