use glam::{Vec2, Vec3};

use super::constants::*;
use super::field::PointField;
use crate::input::PointerState;

/// Per-frame starfield simulation.
///
/// Owns the mutable position buffer derived from an immutable [`PointField`]
/// and the whole-field rotation/size state. `advance` is the single entry
/// point, called once per rendered frame with the elapsed seconds since the
/// previous frame; the rendering host supplies the cadence and no particular
/// refresh rate is assumed.
///
/// A `motion_ratio` of zero turns `advance` into a complete no-op (no
/// rotation, position, pulse, or size mutation) so a hidden tab or an active
/// reduced-motion preference costs nothing and changes nothing.
pub struct Simulation {
    field: PointField,
    positions: Vec<Vec3>,
    rotation_x: f32,
    rotation_y: f32,
    t: f32,
    point_size: f32,
    dirty: bool,
}

impl Simulation {
    pub fn new(field: PointField) -> Self {
        let positions = field.base.clone();
        Self {
            field,
            positions,
            rotation_x: 0.0,
            rotation_y: 0.0,
            t: 0.0,
            point_size: BASE_POINT_SIZE,
            dirty: true,
        }
    }

    /// Advance the simulation by `delta` seconds.
    ///
    /// Reads the pointer's normalized coordinates and pulse from `pointer`
    /// and writes the decayed pulse back, so taps and scrolls observed by the
    /// event layer fade out frame by frame.
    pub fn advance(&mut self, delta: f32, pointer: &mut PointerState, motion_ratio: f32) {
        if motion_ratio <= 0.0 {
            return;
        }

        // Slow constant spin about the vertical axis
        self.rotation_y += delta * SPIN_RATE * motion_ratio;

        // Parallax: ease each rotation axis toward the pointer-derived tilt
        let target_x = pointer.y * TILT_SPAN;
        let target_y = pointer.x * TILT_SPAN;
        self.rotation_x += (target_x - self.rotation_x) * TILT_EASE * motion_ratio;
        self.rotation_y += (target_y - self.rotation_y) * TILT_EASE * motion_ratio;

        self.t += delta;

        let pulse = pointer.pulse;
        let radius = REPEL_RADIUS_BASE + pulse * REPEL_RADIUS_PULSE;
        let strength = REPEL_STRENGTH_BASE + pulse * REPEL_STRENGTH_PULSE;
        let center = Vec2::new(pointer.x, pointer.y) * POINTER_SCENE_SCALE;

        for (i, pos) in self.positions.iter_mut().enumerate() {
            let base = self.field.base[i];
            let d = &self.field.drift[i];

            // Drift target: base position plus a small per-axis oscillation.
            // y and z run at detuned angular rates.
            let w = d.speed;
            let target = base
                + Vec3::new(
                    (self.t * w + d.phase.x).sin() * d.amp.x,
                    (self.t * (w * DRIFT_RATE_Y) + d.phase.y).sin() * d.amp.y,
                    (self.t * (w * DRIFT_RATE_Z) + d.phase.z).sin() * d.amp.z,
                );

            // Local repulsion, judged by planar distance to the pointer
            let dx = pos.x - center.x;
            let dy = pos.y - center.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < radius {
                let falloff = 1.0 - dist / radius;
                let force = strength * falloff * falloff;
                let inv = if dist > REPEL_MIN_DIST { 1.0 / dist } else { 0.0 };
                pos.x += dx * inv * force;
                pos.y += dy * inv * force;
            }

            // Spring back toward the drift target
            *pos += (target - *pos) * SPRING_RETURN;
        }
        self.dirty = true;

        if pointer.pulse > PULSE_FLOOR {
            pointer.pulse *= PULSE_DECAY;
        }

        // Size swells with the pulse and settles back as it decays
        let target_size = BASE_POINT_SIZE * (1.0 + pointer.pulse);
        self.point_size += (target_size - self.point_size) * SIZE_EASE;
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn rotation_x(&self) -> f32 {
        self.rotation_x
    }

    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    #[inline]
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Accumulated simulation time in seconds. Monotone; never rewound.
    #[inline]
    pub fn clock(&self) -> f32 {
        self.t
    }

    /// True once per batch of position changes; the renderer re-uploads the
    /// vertex buffer only when this fires.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
