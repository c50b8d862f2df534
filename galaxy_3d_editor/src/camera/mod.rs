//! Camera module - passive camera data and screen-space picking.
//!
//! The editor does NOT own cameras: the host computes view and projection
//! matrices and hands the result here. The only derived quantity is the
//! pick ray used to locate the world point under the cursor.

mod camera;
mod ray;

pub use camera::{Camera, Viewport};
pub use ray::Ray;
