pub mod camera;
pub mod constants;
pub mod field;
pub mod sim;

// Shader bundled as a string constant
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
