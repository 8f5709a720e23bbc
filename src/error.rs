//! Error type shared by settings, canvases and the host

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BounceError {
    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no frame handler registered; call animate() before run()")]
    NoFrameHandler,

    #[error("surface present failed: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

pub type Result<T> = std::result::Result<T, BounceError>;
