//! Point-cloud generators for the authored shapes.
//!
//! Each generator takes the particle count `n` and a random source and returns
//! exactly `n` points. Every shape except the sphere adds a little uniform
//! jitter per axis so the silhouettes read as loose particle clouds rather than
//! hard surfaces.

use std::f32::consts::{FRAC_PI_2, PI, SQRT_2, TAU};

use glam::Vec3;
use rand::Rng;

use crate::math::{disk_radius, jitter};
use crate::point_set::PointSet;

/// Share of particles given to the main body of the two-part glyphs.
pub const PRIMARY_FRACTION: f32 = 0.7;

/// Number of bars in the bar chart.
pub const BAR_COUNT: usize = 5;

/// Bar heights, left to right.
pub const BAR_HEIGHTS: [f32; BAR_COUNT] = [1.2, 2.0, 1.6, 2.8, 2.2];

/// Split `n` into `(primary, secondary)` counts.
pub fn split_primary(n: usize) -> (usize, usize) {
    let primary = ((n as f32) * PRIMARY_FRACTION).floor() as usize;
    let primary = primary.min(n);
    (primary, n - primary)
}

/// Bar assignment for particle `i`: `floor(i / (n / bars)) mod bars`.
pub fn bar_index(i: usize, n: usize) -> usize {
    let per_bar = (n / BAR_COUNT).max(1);
    (i / per_bar) % BAR_COUNT
}

// ---------- Random cloud ----------

/// Uniform cloud filling a cube of side 10 centred at the origin.
pub fn shape_cloud<R: Rng + ?Sized>(n: usize, rng: &mut R) -> PointSet {
    let half = 5.0_f32;
    (0..n)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

// ---------- Torus with a diagonal slash ----------

/// Thin ring in the XY plane crossed by a cylinder along `y = x`.
///
/// 70% of the points sit on the torus (major radius 2, tube 0.2); the rest
/// fill the slash, whose length spans the ring's diagonal.
pub fn shape_torus_slash<R: Rng + ?Sized>(n: usize, rng: &mut R) -> PointSet {
    let torus_radius = 2.0_f32;
    let tube_radius = 0.2_f32;
    let slash_radius = 0.1_f32;

    let (ring_count, _) = split_primary(n);
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let mut p = if i < ring_count {
            let theta = rng.gen::<f32>() * TAU;
            let phi = rng.gen::<f32>() * TAU;
            let r = torus_radius + tube_radius * phi.cos();
            Vec3::new(r * theta.cos(), r * theta.sin(), tube_radius * phi.sin())
        } else {
            let t = rng.gen::<f32>() * 2.0 - 1.0;
            let along = t * torus_radius;
            let angle = rng.gen::<f32>() * TAU;
            let r = disk_radius(rng, slash_radius);
            Vec3::new(
                along + r * angle.cos() * SQRT_2 / 2.0,
                along + r * angle.sin() * SQRT_2 / 2.0,
                r * angle.sin(),
            )
        };
        p.x += jitter(rng, 0.05);
        p.y += jitter(rng, 0.05);
        p.z += jitter(rng, 0.025);
        points.push(p);
    }

    points.into()
}

// ---------- Partial torus ribbon ----------

/// Quarter-turn sweep whose radius and height ripple with `4θ`.
pub fn shape_ribbon<R: Rng + ?Sized>(n: usize, rng: &mut R) -> PointSet {
    let radius = 2.0_f32;
    let tube = 0.5_f32;
    let count = n.max(1) as f32;

    (0..n)
        .map(|i| {
            let theta = (i as f32 / count) * FRAC_PI_2;
            let r = radius + tube * (theta * 4.0).cos();
            Vec3::new(
                r * theta.cos() + jitter(rng, 0.05),
                tube * (theta * 4.0).sin() + jitter(rng, 0.05),
                r * theta.sin() + jitter(rng, 0.05),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

// ---------- Sphere ----------

/// Evenly spread points on a sphere of radius 2 (spiral lattice).
///
/// Deterministic: the same `n` always yields the same points.
pub fn shape_sphere(n: usize) -> PointSet {
    let radius = 2.0_f32;
    let count = n.max(1) as f32;
    let winding = (count * PI).sqrt();

    (0..n)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f32 / count).clamp(-1.0, 1.0).acos();
            let theta = winding * phi;
            Vec3::new(
                radius * theta.cos() * phi.sin(),
                radius * theta.sin() * phi.sin(),
                radius * phi.cos(),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

// ---------- Question mark ----------

/// Question-mark glyph: a three-quarter arc that tapers into a stem, plus a
/// dot below it.
///
/// The arc is a circle of radius 1 centred at `(0, 1)`, swept from the left
/// over the top and down to the bottom. Over the last third of the sweep the
/// x coordinate is pulled toward the centre line so the hook narrows into the
/// stem.
pub fn shape_question_mark<R: Rng + ?Sized>(n: usize, rng: &mut R) -> PointSet {
    let arc_radius = 1.0_f32;
    let arc_center = Vec3::new(0.0, 1.0, 0.0);
    let sweep = 1.5 * PI;
    let taper_start = 2.0 / 3.0;
    let taper_strength = 0.6_f32;
    let dot_center = Vec3::new(0.0, -1.2, 0.0);
    let dot_radius = 0.15_f32;
    let thickness = 0.08_f32;

    let (curve_count, _) = split_primary(n);
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let mut p = if i < curve_count {
            let t = rng.gen::<f32>();
            let a = PI - t * sweep;
            let mut x = arc_radius * a.cos();
            let y = arc_radius * a.sin();
            if t > taper_start {
                x *= 1.0 - (t - taper_start) * 3.0 * taper_strength;
            }
            // tube around the curve: radial in-plane plus depth
            let radial = Vec3::new(a.cos(), a.sin(), 0.0);
            let tube_angle = rng.gen::<f32>() * TAU;
            let tube_r = disk_radius(rng, thickness);
            arc_center
                + Vec3::new(x, y, 0.0)
                + radial * tube_r * tube_angle.cos()
                + Vec3::Z * tube_r * tube_angle.sin()
        } else {
            let angle = rng.gen::<f32>() * TAU;
            let r = disk_radius(rng, dot_radius);
            let depth = disk_radius(rng, thickness) * (rng.gen::<f32>() * TAU).sin();
            dot_center + Vec3::new(r * angle.cos(), r * angle.sin(), depth)
        };
        p.x += jitter(rng, 0.05);
        p.y += jitter(rng, 0.05);
        p.z += jitter(rng, 0.05);
        points.push(p);
    }

    points.into()
}

// ---------- Bar chart ----------

/// Five upright bars of fixed heights, centred on the origin.
pub fn shape_bar_chart<R: Rng + ?Sized>(n: usize, rng: &mut R) -> PointSet {
    let spacing = 0.8_f32;
    let half_width = 0.25_f32;
    let half_depth = 0.25_f32;
    let center_bar = (BAR_COUNT / 2) as f32;

    (0..n)
        .map(|i| {
            let bar = bar_index(i, n);
            let h = BAR_HEIGHTS[bar];
            let cx = (bar as f32 - center_bar) * spacing;
            Vec3::new(
                cx + rng.gen_range(-half_width..half_width) + jitter(rng, 0.05),
                rng.gen_range(-h / 2.0..h / 2.0) + jitter(rng, 0.05),
                rng.gen_range(-half_depth..half_depth) + jitter(rng, 0.05),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_split_primary() {
        assert_eq!(split_primary(1000), (700, 300));
        assert_eq!(split_primary(1), (0, 1));
        assert_eq!(split_primary(0), (0, 0));
    }

    #[test]
    fn test_bar_index_small_n_does_not_divide_by_zero() {
        for i in 0..3 {
            assert!(bar_index(i, 3) < BAR_COUNT);
        }
    }

    #[test]
    fn test_torus_slash_split() {
        let mut rng = SmallRng::seed_from_u64(7);
        let set = shape_torus_slash(1000, &mut rng);
        // ring points stay near radius 2 in the XY plane
        for p in &set.points()[..700] {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 2.0).abs() < 0.35, "ring point off torus: {:?}", p);
        }
        // slash points stay near the y = x diagonal
        for p in &set.points()[700..] {
            assert!((p.x - p.y).abs() < 0.35, "slash point off diagonal: {:?}", p);
            assert!(p.x.abs() <= 2.2 && p.y.abs() <= 2.2);
        }
    }

    #[test]
    fn test_bar_chart_heights_respected() {
        let mut rng = SmallRng::seed_from_u64(11);
        let n = 1000;
        let set = shape_bar_chart(n, &mut rng);
        for (i, p) in set.points().iter().enumerate() {
            let h = BAR_HEIGHTS[bar_index(i, n)];
            assert!(p.y.abs() <= h / 2.0 + 0.05 + 1e-4, "bar {} too tall: {:?}", i, p);
        }
    }

    #[test]
    fn test_question_mark_dot_below_curve() {
        let mut rng = SmallRng::seed_from_u64(3);
        let set = shape_question_mark(1000, &mut rng);
        let (curve, _) = split_primary(1000);
        let lowest_curve = set.points()[..curve]
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min);
        for p in &set.points()[curve..] {
            assert!(p.y < lowest_curve, "dot point {:?} overlaps the curve", p);
        }
    }
}
