/// Point-field and per-frame simulation tuning constants.
///
/// These constants express intended behavior (sampling ranges, easing rates,
/// decay factors) and keep magic numbers out of the update loop. The motion
/// rates are tuned for visual feel against the fixed camera in
/// `crate::constants`.
// Number of points in the field; fixed for the component's lifetime
pub const POINT_COUNT: usize = 2000;

// Spherical shell the base positions are sampled from
pub const SHELL_INNER_RADIUS: f32 = 1.2;
pub const SHELL_THICKNESS: f32 = 1.3;

// Per-point drift oscillation (rad/sec and scene units)
pub const DRIFT_SPEED_MIN: f32 = 0.1;
pub const DRIFT_SPEED_SPAN: f32 = 0.25;
pub const DRIFT_AMP_MIN: f32 = 0.1;
pub const DRIFT_AMP_SPAN: f32 = 0.035;
pub const DRIFT_AMP_JITTER_MIN: f32 = 0.9; // y/z amplitude factor lower bound
pub const DRIFT_AMP_JITTER_SPAN: f32 = 0.2;

// Distinct angular rates per axis so the wobble never synchronizes
pub const DRIFT_RATE_Y: f32 = 0.9;
pub const DRIFT_RATE_Z: f32 = 1.1;

// Whole-field rotation
pub const SPIN_RATE: f32 = 0.02; // rad/sec about the vertical axis
pub const TILT_SPAN: f32 = 0.3; // max tilt at full pointer deflection
pub const TILT_EASE: f32 = 0.04; // fraction of remaining tilt applied per frame

// Pointer-local repulsion, evaluated in the scene's x/y plane
pub const POINTER_SCENE_SCALE: f32 = 1.6; // NDC -> approximate scene units
pub const REPEL_RADIUS_BASE: f32 = 0.6;
pub const REPEL_RADIUS_PULSE: f32 = 0.2; // radius widens while pulsed
pub const REPEL_STRENGTH_BASE: f32 = 0.25;
pub const REPEL_STRENGTH_PULSE: f32 = 0.25;
pub const REPEL_MIN_DIST: f32 = 1e-4; // below this the direction is undefined

// Spring return toward the drift target
pub const SPRING_RETURN: f32 = 0.075; // fraction of remaining offset per frame

// Tap/scroll pulse
pub const PULSE_TAP: f32 = 0.8;
pub const PULSE_WHEEL: f32 = 0.6;
pub const PULSE_DECAY: f32 = 0.9; // geometric decay per frame
pub const PULSE_FLOOR: f32 = 0.001; // below this the pulse is left to settle

// Rendered point size
pub const BASE_POINT_SIZE: f32 = 0.12; // scene units
pub const SIZE_EASE: f32 = 0.15; // fraction of remaining size delta per frame
