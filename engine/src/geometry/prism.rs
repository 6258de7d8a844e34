//! Hexagonal Prism Projection
//!
//! Projects one hexagonal prism onto the screen plane and emits its draw
//! primitives in painter order. The whole 3D effect is faked in 2D: the cap
//! is an isometrically squashed hexagon, side walls hang straight down from
//! its lower edges, and occlusion comes purely from emission order (walls,
//! then cap, then cap edges, then pillars, then bottom edges).

use std::cmp::Ordering;
use std::f32::consts::FRAC_PI_3;

use glam::Vec2;

use crate::render::primitives::DrawPrimitive;
use crate::theme::{SceneTheme, lighten};

/// Side faces on a hexagonal prism.
pub const FACE_COUNT: usize = 6;

/// Projected cap of one prism: the six screen-space vertices plus the
/// numbers everything downstream reuses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapGeometry {
    pub center: Vec2,
    pub radius: f32,
    pub vertices: [Vec2; FACE_COUNT],
    /// Wall height below the cap in pixels
    pub height: f32,
}

/// Project the cap of a hexagonal prism centered at `center`.
///
/// Vertex `i` sits at angle `i * pi/3 + rotation`. The x component keeps
/// the full radius while y is compressed by `sin(tilt)`, which turns the
/// vertex circle into the isometric ellipse: `tilt = pi/2` is a true
/// top-down hexagon, smaller tilts flatten it. Wall height is
/// `1.5 * radius * cos(tilt)`, so a top-down view has no visible walls.
///
/// Requires `tilt > 0`; the view state's clamp floor guarantees that
/// upstream.
pub fn project_cap(center: Vec2, radius: f32, rotation: f32, tilt: f32) -> CapGeometry {
    let sin_tilt = tilt.sin();
    let mut vertices = [Vec2::ZERO; FACE_COUNT];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle = i as f32 * FRAC_PI_3 + rotation;
        *vertex = Vec2::new(
            radius * angle.cos() + center.x,
            radius * angle.sin() * sin_tilt + center.y,
        );
    }
    CapGeometry {
        center,
        radius,
        vertices,
        height: 1.5 * radius * tilt.cos(),
    }
}

/// A side wall faces the viewer when the midpoint of its cap edge sits on
/// or below the cap center on screen. Ties count as visible.
pub fn face_visible(y_a: f32, y_b: f32, center_y: f32) -> bool {
    (y_a + y_b) * 0.5 >= center_y
}

/// Visibility of all six side faces; face `i` spans vertices `i` and
/// `(i + 1) % 6`.
pub fn classify_faces(cap: &CapGeometry) -> [bool; FACE_COUNT] {
    let mut visible = [false; FACE_COUNT];
    for (i, flag) in visible.iter_mut().enumerate() {
        let a = cap.vertices[i];
        let b = cap.vertices[(i + 1) % FACE_COUNT];
        *flag = face_visible(a.y, b.y, cap.center.y);
    }
    visible
}

/// Emit the draw primitives for one prism onto `out`, already in painter
/// order for this prism:
///
/// 1. visible side walls (quads, lightened toward the right of the prism)
/// 2. the top cap fill
/// 3. the six cap edges (light where a wall shows, dark outline otherwise)
/// 4. vertical pillars (silhouette pillars dark, interior pillars light)
/// 5. bottom edges of the visible walls, dark, in front of everything
pub fn emit_prism(
    cap: &CapGeometry,
    visible: &[bool; FACE_COUNT],
    theme: &SceneTheme,
    out: &mut Vec<DrawPrimitive>,
) {
    let down = Vec2::new(0.0, cap.height);
    let span_left = cap.center.x - cap.radius;
    let span = 2.0 * cap.radius;

    // Walls go down first so the cap fill overwrites any shared-edge overlap
    for i in 0..FACE_COUNT {
        if !visible[i] {
            continue;
        }
        let a = cap.vertices[i];
        let b = cap.vertices[(i + 1) % FACE_COUNT];
        let t = ((a.x + b.x) * 0.5 - span_left) / span;
        out.push(DrawPrimitive::Quad {
            corners: [a, a + down, b + down, b],
            color: lighten(theme.wall_base, t * theme.wall_lighten),
        });
    }

    out.push(DrawPrimitive::Polygon {
        points: cap.vertices.to_vec(),
        color: theme.top_fill,
    });

    for i in 0..FACE_COUNT {
        let color = if visible[i] {
            theme.edge_light
        } else {
            theme.edge_dark
        };
        out.push(DrawPrimitive::Segment {
            a: cap.vertices[i],
            b: cap.vertices[(i + 1) % FACE_COUNT],
            thickness: theme.edge_thickness,
            color,
        });
    }

    // A pillar hangs from every vertex that borders a visible face.
    // Coincidence check is at pixel granularity.
    let mut pillars: Vec<Vec2> = Vec::with_capacity(FACE_COUNT);
    for i in 0..FACE_COUNT {
        if visible[i] || visible[(i + FACE_COUNT - 1) % FACE_COUNT] {
            let v = cap.vertices[i];
            let coincident = pillars
                .iter()
                .any(|p| p.x.round() == v.x.round() && p.y.round() == v.y.round());
            if !coincident {
                pillars.push(v);
            }
        }
    }
    pillars.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

    let last = pillars.len().saturating_sub(1);
    for (i, top) in pillars.iter().enumerate() {
        // Leftmost and rightmost pillars are the silhouette
        let color = if i == 0 || i == last {
            theme.edge_dark
        } else {
            theme.edge_light
        };
        out.push(DrawPrimitive::Segment {
            a: *top,
            b: *top + down,
            thickness: theme.edge_thickness,
            color,
        });
    }

    for i in 0..FACE_COUNT {
        if !visible[i] {
            continue;
        }
        let a = cap.vertices[i];
        let b = cap.vertices[(i + 1) % FACE_COUNT];
        out.push(DrawPrimitive::Segment {
            a: a + down,
            b: b + down,
            thickness: theme.edge_thickness,
            color: theme.edge_dark,
        });
    }
}
