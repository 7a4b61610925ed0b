use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use super::constants::*;

/// Per-point drift parameters, fixed at generation time.
///
/// Each point oscillates around its base position with its own angular
/// `speed`, an independent `phase` per axis, and a per-axis `amp`litude. The
/// y/z amplitudes carry a small jitter relative to x so neighboring points
/// never move in lockstep.
#[derive(Clone, Debug)]
pub struct DriftParams {
    pub speed: f32,
    pub phase: Vec3,
    pub amp: Vec3,
}

/// Immutable point cloud sampled on a spherical shell, plus drift parameters.
///
/// Base positions are drawn with uniform density over the shell's solid angle:
/// azimuth is uniform and the polar angle comes from `acos` of a uniform
/// variate, which avoids clustering at the poles. Radii span
/// `[SHELL_INNER_RADIUS, SHELL_INNER_RADIUS + SHELL_THICKNESS]`.
///
/// Generation is deterministic only in distribution; the app seeds the RNG
/// from entropy while tests inject a fixed `StdRng`.
pub struct PointField {
    pub base: Vec<Vec3>,
    pub drift: Vec<DriftParams>,
}

impl PointField {
    /// Sample `count` base positions and drift parameter sets from `rng`.
    pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Self {
        let mut base = Vec::with_capacity(count);
        let mut drift = Vec::with_capacity(count);
        for _ in 0..count {
            let r = SHELL_INNER_RADIUS + rng.gen::<f32>() * SHELL_THICKNESS;
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
            base.push(Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            ));

            let speed = DRIFT_SPEED_MIN + rng.gen::<f32>() * DRIFT_SPEED_SPAN;
            let phase = Vec3::new(
                rng.gen::<f32>() * TAU,
                rng.gen::<f32>() * TAU,
                rng.gen::<f32>() * TAU,
            );
            let base_amp = DRIFT_AMP_MIN + rng.gen::<f32>() * DRIFT_AMP_SPAN;
            let amp = Vec3::new(
                base_amp,
                base_amp * (DRIFT_AMP_JITTER_MIN + rng.gen::<f32>() * DRIFT_AMP_JITTER_SPAN),
                base_amp * (DRIFT_AMP_JITTER_MIN + rng.gen::<f32>() * DRIFT_AMP_JITTER_SPAN),
            );
            drift.push(DriftParams { speed, phase, amp });
        }
        Self { base, drift }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}
