//! Decorative canvas backgrounds
//!
//! The simulations live in [`crate::core::animation`]; these components only
//! size the canvas, feed it pointer input and paint each frame. The browser
//! wiring is compiled for the client only.

#[cfg(not(feature = "ssr"))]
mod host;
mod grid_wave;
mod orb_field;

pub use grid_wave::GridWaveCanvas;
pub use orb_field::OrbFieldCanvas;
