//! Canvas rendering module
//!
//! Draws the particle field onto a full-page 2D canvas.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
