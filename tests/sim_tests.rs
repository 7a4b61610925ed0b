// Host-side tests for the per-frame simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
    pub mod sim {
        include!("../src/core/sim.rs");
    }
}
mod input {
    include!("../src/input.rs");
}

use crate::core::constants::*;
use crate::core::field::{DriftParams, PointField};
use crate::core::sim::Simulation;
use crate::input::PointerState;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

/// Single point with zero drift amplitude: its drift target is always the
/// base position, which isolates repulsion and spring behavior.
fn still_field(base: Vec3) -> PointField {
    PointField {
        base: vec![base],
        drift: vec![DriftParams {
            speed: 0.2,
            phase: Vec3::ZERO,
            amp: Vec3::ZERO,
        }],
    }
}

fn pointer_at(x: f32, y: f32, pulse: f32) -> PointerState {
    PointerState { x, y, pulse }
}

#[test]
fn gated_advance_is_a_full_no_op() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sim = Simulation::new(PointField::generate(&mut rng, 64));
    let mut ps = pointer_at(0.3, -0.2, 0.8);

    let positions_before = sim.positions().to_vec();
    let rot_before = (sim.rotation_x(), sim.rotation_y());
    let size_before = sim.point_size();
    let clock_before = sim.clock();

    for _ in 0..50 {
        sim.advance(DT, &mut ps, 0.0);
    }

    assert_eq!(sim.positions(), positions_before.as_slice());
    assert_eq!((sim.rotation_x(), sim.rotation_y()), rot_before);
    assert_eq!(sim.point_size(), size_before);
    assert_eq!(sim.clock(), clock_before);
    assert_eq!(ps.pulse, 0.8);
}

#[test]
fn pulse_decays_geometrically_then_settles() {
    let mut sim = Simulation::new(still_field(Vec3::new(0.5, 0.2, -0.4)));
    let mut ps = pointer_at(1.0, -1.0, 0.8);

    for _ in 0..10 {
        sim.advance(DT, &mut ps, 1.0);
    }
    let expected = 0.8 * PULSE_DECAY.powi(10);
    assert!((ps.pulse - expected).abs() < 1e-5);

    // Enough frames to fall under the floor, after which the value is left
    // alone entirely
    for _ in 0..70 {
        sim.advance(DT, &mut ps, 1.0);
    }
    assert!(ps.pulse < PULSE_FLOOR);
    let settled = ps.pulse;
    for _ in 0..10 {
        sim.advance(DT, &mut ps, 1.0);
    }
    assert_eq!(ps.pulse, settled);
}

#[test]
fn repulsion_is_zero_exactly_at_the_influence_radius() {
    // Pointer at scene origin; the point sits exactly REPEL_RADIUS_BASE away
    let base = Vec3::new(REPEL_RADIUS_BASE, 0.0, 0.0);
    let mut sim = Simulation::new(still_field(base));
    let mut ps = pointer_at(0.0, 0.0, 0.0);

    sim.advance(DT, &mut ps, 1.0);
    assert!((sim.positions()[0] - base).length() < 1e-7);
}

#[test]
fn repulsion_is_guarded_at_zero_distance() {
    let mut sim = Simulation::new(still_field(Vec3::ZERO));
    let mut ps = pointer_at(0.0, 0.0, 0.8);

    for _ in 0..5 {
        sim.advance(DT, &mut ps, 1.0);
    }
    let p = sim.positions()[0];
    assert!(p.is_finite());
    assert!(p.length() < 1e-7);
}

#[test]
fn repulsion_pushes_points_away_in_the_plane() {
    let base = Vec3::new(0.3, 0.0, 0.0);
    let mut sim = Simulation::new(still_field(base));
    let mut ps = pointer_at(0.0, 0.0, 0.0);

    sim.advance(DT, &mut ps, 1.0);
    let p = sim.positions()[0];
    assert!(p.x > base.x, "point not pushed outward: {}", p.x);
    assert!(p.x < base.x + REPEL_STRENGTH_BASE, "push exceeds strength bound");
    assert_eq!(p.y, 0.0);
    assert_eq!(p.z, 0.0);
}

#[test]
fn displaced_point_returns_monotonically_once_the_pointer_leaves() {
    let base = Vec3::new(0.5, 0.0, 0.0);
    let mut sim = Simulation::new(still_field(base));

    // One pulsed frame with the pointer just beside the point knocks it away
    let mut ps = pointer_at(0.45 / POINTER_SCENE_SCALE, 0.0, 0.8);
    sim.advance(DT, &mut ps, 1.0);
    let mut err = (sim.positions()[0] - base).length();
    assert!(err > 0.05, "expected a visible displacement, got {}", err);

    // Pointer far away: only the spring acts, so the error contracts every
    // frame
    let mut ps = pointer_at(1.0, -1.0, 0.0);
    for _ in 0..10 {
        sim.advance(DT, &mut ps, 1.0);
        let next = (sim.positions()[0] - base).length();
        assert!(next < err, "error grew from {} to {}", err, next);
        err = next;
    }
    for _ in 0..150 {
        sim.advance(DT, &mut ps, 1.0);
    }
    assert!((sim.positions()[0] - base).length() < 1e-3);
}

#[test]
fn drifting_point_stays_inside_its_oscillation_envelope() {
    let amp = Vec3::new(0.12, 0.11, 0.13);
    let field = PointField {
        base: vec![Vec3::new(0.5, 0.2, -0.4)],
        drift: vec![DriftParams {
            speed: 0.3,
            phase: Vec3::new(0.5, 1.0, 2.0),
            amp,
        }],
    };
    let base = field.base[0];
    let mut sim = Simulation::new(field);
    let mut ps = pointer_at(1.0, -1.0, 0.0);

    for _ in 0..250 {
        sim.advance(DT, &mut ps, 1.0);
    }
    // Steady state: the point orbits its base within the drift amplitude
    // plus a small tracking lag, and never diverges
    let bound = amp.length() + 0.05;
    for _ in 0..50 {
        sim.advance(DT, &mut ps, 1.0);
        let offset = (sim.positions()[0] - base).length();
        assert!(sim.positions()[0].is_finite());
        assert!(offset <= bound, "offset {} exceeds envelope {}", offset, bound);
    }
}

#[test]
fn rotation_spins_and_tilts_toward_the_pointer() {
    let mut sim = Simulation::new(still_field(Vec3::new(2.0, 2.0, 0.0)));
    let mut ps = pointer_at(0.5, -0.4, 0.0);

    let dt = 0.5;
    sim.advance(dt, &mut ps, 1.0);
    // Base spin plus one easing step toward the pointer tilt
    let spin = dt * SPIN_RATE;
    let expected_y = spin + (ps.x * TILT_SPAN - spin) * TILT_EASE;
    let expected_x = (ps.y * TILT_SPAN) * TILT_EASE;
    assert!((sim.rotation_y() - expected_y).abs() < 1e-6);
    assert!((sim.rotation_x() - expected_x).abs() < 1e-6);

    // Further frames keep moving toward the tilt targets
    let (rx1, ry1) = (sim.rotation_x(), sim.rotation_y());
    sim.advance(dt, &mut ps, 1.0);
    assert!(sim.rotation_y() > ry1);
    assert!(sim.rotation_x() < rx1); // target is negative
}

#[test]
fn point_size_swells_with_the_pulse_and_holds_at_rest() {
    let mut sim = Simulation::new(still_field(Vec3::new(2.0, 0.0, 0.0)));
    let mut ps = pointer_at(1.0, -1.0, 0.8);

    sim.advance(DT, &mut ps, 1.0);
    // Size eases toward BASE * (1 + pulse) using the already-decayed pulse
    let decayed = 0.8 * PULSE_DECAY;
    let expected =
        BASE_POINT_SIZE + (BASE_POINT_SIZE * (1.0 + decayed) - BASE_POINT_SIZE) * SIZE_EASE;
    assert!((sim.point_size() - expected).abs() < 1e-5);

    let mut sim = Simulation::new(still_field(Vec3::new(2.0, 0.0, 0.0)));
    let mut ps = pointer_at(1.0, -1.0, 0.0);
    sim.advance(DT, &mut ps, 1.0);
    assert_eq!(sim.point_size(), BASE_POINT_SIZE);
}

#[test]
fn clock_accumulates_only_while_unblocked() {
    let mut sim = Simulation::new(still_field(Vec3::new(2.0, 0.0, 0.0)));
    let mut ps = pointer_at(0.0, 0.5, 0.0);

    sim.advance(0.016, &mut ps, 1.0);
    sim.advance(0.034, &mut ps, 1.0);
    assert!((sim.clock() - 0.05).abs() < 1e-6);

    sim.advance(10.0, &mut ps, 0.0);
    assert!((sim.clock() - 0.05).abs() < 1e-6);
}

#[test]
fn dirty_flag_fires_once_per_live_advance() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut sim = Simulation::new(PointField::generate(&mut rng, 8));
    let mut ps = PointerState::default();

    // Fresh buffer needs one initial upload
    assert!(sim.take_dirty());
    assert!(!sim.take_dirty());

    sim.advance(DT, &mut ps, 0.0);
    assert!(!sim.take_dirty());

    sim.advance(DT, &mut ps, 1.0);
    assert!(sim.take_dirty());
    assert!(!sim.take_dirty());
}
