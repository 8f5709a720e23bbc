//! Bounce - a single ball bouncing inside a fixed-size canvas
//!
//! Core modules:
//! - `sim`: Deterministic ball motion and wall reflection
//! - `simulator`: The per-frame callback that steps the sim and draws it
//! - `canvas`: Drawing surface trait plus headless implementations
//! - `renderer`: WebGPU-backed canvas
//! - `driver`: Frame-scheduling host that owns the canvas
//! - `settings`: Data-driven configuration

pub mod canvas;
pub mod color;
pub mod driver;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod simulator;

pub use canvas::{Canvas, DrawCommand, PixelCanvas, RecordingCanvas};
pub use color::Color;
pub use driver::{FrameHandler, Host};
pub use error::BounceError;
pub use settings::Settings;
pub use simulator::BounceSimulator;

/// Default configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 600;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    /// Per-frame displacement
    pub const BALL_VELOCITY: [f32; 2] = [5.0, 5.0];

    /// Frames per second targeted by the native host
    pub const FRAME_RATE: u32 = 60;

    /// Triangle fan segments per circle on the GPU path
    pub const CIRCLE_SEGMENTS: u32 = 64;
}
