//! Easel canvas crate.
//!
//! This crate owns the pieces the shape library consumes but does not
//! implement itself: coordinate types, the abstract paint model, the
//! immediate-mode [`Surface`](surface::Surface) trait with its recording and
//! raster backends, font metrics, and bitmap decoding.

pub mod bitmap;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod surface;
pub mod text;
