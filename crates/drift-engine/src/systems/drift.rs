//! Accumulated snow as a 1-D heightfield.
//!
//! One sample per pixel column, stored as a y-coordinate: the floor is the
//! viewport height and a taller pile has a *smaller* value. Deposits press a
//! raised-cosine bump into the profile and `relax` diffuses steep slopes
//! sideways a little every frame.

use std::f32::consts::FRAC_PI_2;

/// Per-column snow surface.
#[derive(Debug, Clone)]
pub struct DriftSurface {
    heights: Vec<f32>,
    floor: f32,
    deposit_gain: f32,
    divisor: f32,
    tolerance: f32,
}

impl DriftSurface {
    pub const DEFAULT_DEPOSIT_GAIN: f32 = 18.0;
    pub const DEFAULT_DIVISOR: f32 = 128.0;
    pub const DEFAULT_TOLERANCE: f32 = 1.0;

    /// An unallocated surface with no columns until `allocate`.
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            floor: 0.0,
            deposit_gain: Self::DEFAULT_DEPOSIT_GAIN,
            divisor: Self::DEFAULT_DIVISOR,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }

    pub fn with_deposit_gain(mut self, gain: f32) -> Self {
        self.deposit_gain = gain;
        self
    }

    pub fn with_diffusion(mut self, divisor: f32, tolerance: f32) -> Self {
        self.divisor = divisor.max(1.0);
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// One-time allocation: `width` columns, all resting on the floor at `height`.
    /// Calls after the first successful allocation, or with a zero dimension, do nothing.
    pub fn allocate(&mut self, width: u32, height: u32) {
        if self.is_allocated() || width == 0 || height == 0 {
            return;
        }
        self.floor = height as f32;
        self.heights = vec![self.floor; width as usize];
    }

    pub fn is_allocated(&self) -> bool {
        !self.heights.is_empty()
    }

    /// Number of columns (0 when unallocated).
    pub fn width(&self) -> usize {
        self.heights.len()
    }

    /// The y-coordinate of bare ground.
    pub fn floor(&self) -> f32 {
        self.floor
    }

    /// Stored height of `column`, or `None` outside the surface.
    pub fn column(&self, column: isize) -> Option<f32> {
        usize::try_from(column)
            .ok()
            .and_then(|c| self.heights.get(c).copied())
    }

    /// Surface height at `column`. Columns outside the surface, including
    /// every column before allocation, read as `viewport_height`.
    pub fn height_at(&self, column: isize, viewport_height: f32) -> f32 {
        self.column(column).unwrap_or(viewport_height)
    }

    /// Read-only view of every column, left to right.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Pile snow around `center` for a flake of `radius`.
    ///
    /// Column `center + i` for `|i| <= trunc(radius)` rises by
    /// `radius * gain * cos(i / radius * pi/2)`.
    pub fn deposit(&mut self, center: isize, radius: f32) {
        if !self.is_allocated() || radius <= 0.0 {
            return;
        }
        let span = radius as isize;
        let peak = radius * self.deposit_gain;
        for i in -span..=span {
            let influence = ((i as f32 / radius) * FRAC_PI_2).cos();
            let Ok(col) = usize::try_from(center + i) else {
                continue;
            };
            if let Some(h) = self.heights.get_mut(col) {
                *h -= peak * influence;
            }
        }
    }

    /// Run `passes` rounds of bidirectional slope diffusion.
    pub fn relax(&mut self, passes: u32) {
        let n = self.heights.len();
        if n < 2 {
            return;
        }
        for _ in 0..passes {
            // Left pile taller than its right neighbor: spread rightwards.
            for i in 0..n - 1 {
                let (left, right) = (self.heights[i], self.heights[i + 1]);
                if right - left > self.tolerance {
                    let moved = (right - left) / self.divisor;
                    self.heights[i] += moved;
                    self.heights[i + 1] -= moved;
                }
            }
            // Right pile taller than its left neighbor: spread leftwards.
            for i in (1..n).rev() {
                let (left, right) = (self.heights[i - 1], self.heights[i]);
                if left - right > self.tolerance {
                    let moved = (left - right) / self.divisor;
                    self.heights[i] += moved;
                    self.heights[i - 1] -= moved;
                }
            }
        }
    }

    /// Resample the profile to a new viewport.
    ///
    /// Column values are linearly interpolated across the new width and the
    /// snow depth (floor minus height) is scaled by the height ratio. An
    /// unallocated surface is simply allocated.
    pub fn resample(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if !self.is_allocated() {
            self.allocate(width, height);
            return;
        }

        let old = std::mem::take(&mut self.heights);
        let old_floor = self.floor;
        let new_floor = height as f32;
        let depth_scale = new_floor / old_floor;
        let last = (old.len() - 1) as f32;
        let new_len = width as usize;

        self.heights = (0..new_len)
            .map(|c| {
                let t = if new_len > 1 {
                    c as f32 * last / (new_len - 1) as f32
                } else {
                    0.0
                };
                let lo = t.floor() as usize;
                let hi = (lo + 1).min(old.len() - 1);
                let frac = t - lo as f32;
                let h = old[lo] + (old[hi] - old[lo]) * frac;
                new_floor - (old_floor - h) * depth_scale
            })
            .collect();
        self.floor = new_floor;
    }
}

impl Default for DriftSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(width: u32, height: u32) -> DriftSurface {
        let mut s = DriftSurface::new();
        s.allocate(width, height);
        s
    }

    #[test]
    fn allocate_fills_with_floor() {
        let s = surface(8, 120);
        assert_eq!(s.width(), 8);
        assert!(s.heights().iter().all(|&h| h == 120.0));
    }

    #[test]
    fn allocate_happens_once() {
        let mut s = surface(8, 120);
        s.allocate(16, 300);
        assert_eq!(s.width(), 8);
        assert_eq!(s.floor(), 120.0);
    }

    #[test]
    fn zero_dimensions_leave_surface_unallocated() {
        let mut s = DriftSurface::new();
        s.allocate(0, 100);
        assert!(!s.is_allocated());
        s.allocate(100, 0);
        assert!(!s.is_allocated());
    }

    #[test]
    fn height_at_out_of_range_is_viewport_height() {
        let s = surface(10, 100);
        assert_eq!(s.height_at(-1, 100.0), 100.0);
        assert_eq!(s.height_at(10, 100.0), 100.0);
        assert_eq!(s.height_at(1_000, 100.0), 100.0);
        assert_eq!(s.column(-1), None);
        assert_eq!(s.column(10), None);
    }

    #[test]
    fn height_at_on_unallocated_surface_is_viewport_height() {
        let s = DriftSurface::new();
        assert_eq!(s.height_at(5, 100.0), 100.0);
        assert_eq!(s.height_at(-1, 100.0), 100.0);
        assert_eq!(s.height_at(0, 480.0), 480.0);
    }

    #[test]
    fn deposit_on_unallocated_surface_is_noop() {
        let mut s = DriftSurface::new();
        s.deposit(5, 3.0);
        assert!(!s.is_allocated());
        assert!(s.heights().is_empty());
    }

    #[test]
    fn deposit_radius_two_shapes_cosine_bump() {
        let mut s = surface(10, 100);
        s.deposit(5, 2.0);
        let h = s.heights();

        assert!((h[5] - 64.0).abs() < 1e-4, "center: {}", h[5]);
        assert!((h[3] - 100.0).abs() < 1e-4, "edge: {}", h[3]);
        assert!((h[7] - 100.0).abs() < 1e-4, "edge: {}", h[7]);
        for &c in &[4, 6] {
            let drop = 100.0 - h[c];
            assert!(drop > 0.0 && drop < 36.0, "column {} dropped {}", c, drop);
        }
        assert!((h[4] - h[6]).abs() < 1e-4);
        for &c in &[0, 1, 2, 8, 9] {
            assert_eq!(h[c], 100.0, "column {} should be untouched", c);
        }
    }

    #[test]
    fn deposit_stays_within_radius_span() {
        let mut s = surface(40, 200);
        let (c, r) = (20isize, 5.0f32);
        s.deposit(c, r);
        for (i, &h) in s.heights().iter().enumerate() {
            let off = (i as isize - c).abs();
            if off > r as isize {
                assert_eq!(h, 200.0, "column {} outside span changed", i);
            }
        }
        assert!((s.heights()[20] - (200.0 - r * 18.0)).abs() < 1e-4);
    }

    #[test]
    fn deposit_fractional_radius_truncates_span() {
        let mut s = surface(20, 100);
        s.deposit(10, 2.7);
        let h = s.heights();
        assert_eq!(h[7], 100.0);
        assert_eq!(h[13], 100.0);
        assert!(h[8] < 100.0 && h[12] < 100.0);
    }

    #[test]
    fn deposit_clips_at_edges() {
        let mut s = surface(5, 100);
        s.deposit(0, 3.0);
        s.deposit(-2, 3.0);
        s.deposit(6, 3.0);
        assert_eq!(s.width(), 5);
        assert!(s.heights()[0] < 100.0);
    }

    #[test]
    fn relax_flat_surface_is_stable() {
        let mut s = surface(16, 100);
        s.relax(50);
        assert!(s.heights().iter().all(|&h| h == 100.0));
    }

    #[test]
    fn relax_ignores_slopes_within_tolerance() {
        let mut s = surface(3, 100);
        s.heights[1] = 99.5;
        s.relax(10);
        assert_eq!(s.heights(), &[100.0, 99.5, 100.0]);
    }

    #[test]
    fn relax_conserves_total_snow() {
        let mut s = surface(32, 100);
        s.deposit(10, 4.0);
        s.deposit(20, 6.0);
        let before: f32 = s.heights().iter().sum();
        s.relax(200);
        let after: f32 = s.heights().iter().sum();
        assert!((before - after).abs() < 0.05, "{} vs {}", before, after);
    }

    #[test]
    fn relax_spreads_single_spike_until_within_tolerance() {
        let mut s = surface(16, 100);
        let spike = 8;
        s.heights[spike] = 10.0;

        let deviation = |s: &DriftSurface| {
            let h = s.heights();
            (h[spike - 1] + h[spike + 1]) / 2.0 - h[spike]
        };

        let total_variation = |s: &DriftSurface| -> f32 {
            s.heights().windows(2).map(|w| (w[1] - w[0]).abs()).sum()
        };

        let mut prev = deviation(&s);
        let mut prev_tv = total_variation(&s);
        let mut calls = 0;
        while prev > 1.0 {
            s.relax(4);
            calls += 1;
            let next = deviation(&s);
            assert!(next.is_finite());
            let tv = total_variation(&s);
            assert!(tv <= prev_tv + 1e-3, "total variation rose from {} to {} on call {}", prev_tv, tv, calls);
            prev_tv = tv;
            // Close to the tolerance the neighbors stop trading and rounding dominates.
            if prev > 2.0 {
                assert!(next < prev, "deviation grew from {} to {} on call {}", prev, next, calls);
            }
            prev = next;
            assert!(calls < 5_000, "diffusion did not converge");
        }
        assert!(s.heights().iter().all(|&h| (10.0..=100.0).contains(&h)));
    }

    #[test]
    fn relax_spreads_both_ways() {
        let mut s = surface(21, 100);
        s.deposit(10, 4.0);
        s.relax(100);
        let h = s.heights();
        for off in 1..=10 {
            assert!((h[10 - off] - h[10 + off]).abs() < 0.5, "asymmetric at offset {}", off);
        }
        assert!(h[4] < 100.0 && h[16] < 100.0);
    }

    #[test]
    fn resample_doubles_width_and_keeps_shape() {
        let mut s = surface(3, 100);
        s.heights = vec![100.0, 80.0, 100.0];
        s.resample(5, 100);
        let h = s.heights();
        assert_eq!(h.len(), 5);
        assert!((h[0] - 100.0).abs() < 1e-4);
        assert!((h[1] - 90.0).abs() < 1e-4);
        assert!((h[2] - 80.0).abs() < 1e-4);
        assert!((h[4] - 100.0).abs() < 1e-4);
    }

    #[test]
    fn resample_scales_depth_to_new_floor() {
        let mut s = surface(2, 100);
        s.heights = vec![90.0, 100.0];
        s.resample(2, 200);
        assert_eq!(s.floor(), 200.0);
        assert!((s.heights()[0] - 180.0).abs() < 1e-4);
        assert!((s.heights()[1] - 200.0).abs() < 1e-4);
    }
}
