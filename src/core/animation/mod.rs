//! Per-frame math behind the decorative canvas backgrounds

pub mod grid_wave;
pub mod lifecycle;
pub mod orb_field;

pub use grid_wave::{GridWave, GridWaveConfig, ProjectedPoint};
pub use lifecycle::{AnimationHost, AnimatorMount, HostEvent};
pub use orb_field::{Orb, OrbField, OrbFieldConfig};
