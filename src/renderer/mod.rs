//! WebGPU rendering module
//!
//! Circles are tessellated into triangle fans and drawn with a single
//! pass-through pipeline.

pub mod gpu_canvas;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use gpu_canvas::GpuCanvas;
pub use pipeline::RenderState;
