//! Grid Layout
//!
//! Centers of a concentric-ring honeycomb in projected screen space,
//! delivered back to front for the painter. Ring n contributes 6n cells
//! (six corners plus n-1 interpolated cells per side), so a grid of n
//! rings holds the centered hexagonal number 1 + 3n(n+1) of hexagons.

use std::cmp::Ordering;
use std::f32::consts::{FRAC_PI_3, FRAC_PI_6};

use glam::Vec2;

/// Centers of every hexagon in a `ring_count`-ring grid around `origin`,
/// sorted ascending by screen y. Smaller y is farther away under this
/// projection, so drawing in order makes nearer hexagons overlap farther
/// ones correctly.
///
/// `grid_radius` is the distance between adjacent hexagon centers
/// (`sqrt(3)` times the hexagon circumradius); corner directions sit
/// halfway between cap vertex directions, hence the extra `pi/6`. The y
/// component of every offset is compressed by `sin(tilt)` exactly like the
/// cap vertices themselves.
pub fn grid_centers(
    origin: Vec2,
    grid_radius: f32,
    ring_count: i32,
    rotation: f32,
    tilt: f32,
) -> Vec<Vec2> {
    let sin_tilt = tilt.sin();
    let mut centers = vec![origin];

    for step in 0..ring_count {
        let distance = grid_radius * (step + 1) as f32;
        let mut corners = [Vec2::ZERO; 6];
        for (j, corner) in corners.iter_mut().enumerate() {
            let angle = j as f32 * FRAC_PI_3 + rotation + FRAC_PI_6;
            *corner = Vec2::new(
                distance * angle.cos() + origin.x,
                distance * angle.sin() * sin_tilt + origin.y,
            );
        }
        for j in 0..6 {
            let a = corners[j];
            let b = corners[(j + 1) % 6];
            centers.push(a);
            // `step` cells along this side, splitting it into step+1 parts
            for k in 1..=step {
                centers.push(a.lerp(b, k as f32 / (step + 1) as f32));
            }
        }
    }

    centers.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal));
    centers
}
