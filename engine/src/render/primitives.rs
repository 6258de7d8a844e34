//! Draw Primitives
//!
//! The colored shapes the geometry side hands to the GPU side, plus the
//! batch that tessellates them into a single triangle-list stream. There is
//! no depth buffer anywhere in this renderer: index order is draw order, so
//! primitives cover each other in exactly the order they were pushed.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::theme::Color;

/// Vertex for flat 2D rendering (pixel-space position, straight-through color)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex2d {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

// The pipeline's vertex layout hardcodes this stride
static_assertions::assert_eq_size!(Vertex2d, [u8; 24]);

/// One colored shape in pixel coordinates. The only currency between the
/// hexagon geometry and the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// Filled convex quad, corners in perimeter order
    Quad { corners: [Vec2; 4], color: Color },
    /// Filled convex polygon, fan-triangulated from its first point
    Polygon { points: Vec<Vec2>, color: Color },
    /// Line segment rendered as a rectangle of the given thickness
    Segment {
        a: Vec2,
        b: Vec2,
        thickness: f32,
        color: Color,
    },
}

/// Tessellated vertex/index stream for one frame.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveBatch {
    pub vertices: Vec<Vertex2d>,
    pub indices: Vec<u32>,
}

impl PrimitiveBatch {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Tessellate one primitive onto the end of the stream.
    pub fn push(&mut self, primitive: &DrawPrimitive) {
        match primitive {
            DrawPrimitive::Quad { corners, color } => self.push_fan(corners, *color),
            DrawPrimitive::Polygon { points, color } => self.push_fan(points, *color),
            DrawPrimitive::Segment {
                a,
                b,
                thickness,
                color,
            } => self.push_segment(*a, *b, *thickness, *color),
        }
    }

    /// Tessellate a whole frame's worth of primitives in submission order.
    pub fn extend(&mut self, primitives: &[DrawPrimitive]) {
        for primitive in primitives {
            self.push(primitive);
        }
    }

    /// Fan-triangulate a convex perimeter from its first point.
    fn push_fan(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let base = self.vertices.len() as u32;
        for p in points {
            self.vertices.push(Vertex2d {
                position: [p.x, p.y],
                color,
            });
        }
        for i in 1..(points.len() as u32 - 1) {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }

    /// Expand a segment into a rectangle of `thickness` about its axis.
    /// Zero-length segments are skipped silently, never an error.
    fn push_segment(&mut self, a: Vec2, b: Vec2, thickness: f32, color: Color) {
        let dir = b - a;
        let length = dir.length();
        if length == 0.0 {
            return;
        }
        let offset = Vec2::new(-dir.y, dir.x) * (thickness * 0.5 / length);
        self.push_fan(&[a + offset, a - offset, b - offset, b + offset], color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];

    fn quad(corners: [Vec2; 4]) -> DrawPrimitive {
        DrawPrimitive::Quad {
            corners,
            color: RED,
        }
    }

    #[test]
    fn test_quad_tessellates_to_two_triangles() {
        let mut batch = PrimitiveBatch::new();
        batch.push(&quad([
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ]));

        assert_eq!(batch.vertices.len(), 4);
        assert_eq!(batch.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(batch.vertices[0].color, RED);
    }

    #[test]
    fn test_hexagon_fan_triangulation() {
        let points: Vec<Vec2> = (0..6)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::FRAC_PI_3;
                Vec2::new(angle.cos(), angle.sin())
            })
            .collect();

        let mut batch = PrimitiveBatch::new();
        batch.push(&DrawPrimitive::Polygon {
            points,
            color: RED,
        });

        assert_eq!(batch.vertices.len(), 6);
        assert_eq!(batch.indices.len(), 12); // 4 triangles
        assert_eq!(&batch.indices[0..3], &[0, 1, 2]);
        assert_eq!(&batch.indices[9..12], &[0, 4, 5]);
    }

    #[test]
    fn test_segment_expands_perpendicular_to_axis() {
        let mut batch = PrimitiveBatch::new();
        batch.push(&DrawPrimitive::Segment {
            a: Vec2::new(0.0, 0.0),
            b: Vec2::new(10.0, 0.0),
            thickness: 4.0,
            color: RED,
        });

        assert_eq!(batch.vertices.len(), 4);
        assert_eq!(batch.vertices[0].position, [0.0, 2.0]);
        assert_eq!(batch.vertices[1].position, [0.0, -2.0]);
        assert_eq!(batch.vertices[2].position, [10.0, -2.0]);
        assert_eq!(batch.vertices[3].position, [10.0, 2.0]);
    }

    #[test]
    fn test_zero_length_segment_is_skipped() {
        let mut batch = PrimitiveBatch::new();
        batch.push(&DrawPrimitive::Segment {
            a: Vec2::new(5.0, 5.0),
            b: Vec2::new(5.0, 5.0),
            thickness: 4.0,
            color: RED,
        });

        assert!(batch.is_empty());
        assert_eq!(batch.vertices.len(), 0);
    }

    #[test]
    fn test_submission_order_is_preserved_in_index_stream() {
        let mut batch = PrimitiveBatch::new();
        let unit = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ];
        batch.push(&quad(unit));
        batch.push(&quad(unit));
        batch.push(&quad(unit));

        // Each later primitive indexes strictly later vertices, so drawing
        // the index stream front to back replays the push order.
        assert_eq!(&batch.indices[0..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&batch.indices[6..12], &[4, 5, 6, 4, 6, 7]);
        assert_eq!(&batch.indices[12..18], &[8, 9, 10, 8, 10, 11]);
    }

    #[test]
    fn test_clear_resets_the_stream() {
        let mut batch = PrimitiveBatch::new();
        batch.push(&quad([
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ]));
        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.vertices.is_empty());
    }
}
