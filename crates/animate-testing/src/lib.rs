//! Testing utilities for animate-state.
//!
//! [`FrameDriver`] owns a runtime with a manual clock so tests can step
//! animations frame by frame and land on exact play times.

pub mod frame_driver;

pub use frame_driver::*;

pub mod prelude {
    pub use crate::frame_driver::FrameDriver;
}
