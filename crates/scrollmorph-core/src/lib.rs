//! Scroll-driven particle morphing.
//!
//! A fixed-size cloud of points morphs through an ordered list of procedural
//! shapes as the page scrolls, while the whole cloud turns gently toward the
//! pointer. Rendering, scroll scrubbing and DOM wiring live outside this
//! crate; they feed progress and pointer samples into a [`MorphContext`] and
//! read back the live position buffer.

pub mod config;
pub mod context;
pub mod error;
pub mod live;
pub mod math;
pub mod morph;
pub mod point_set;
pub mod rotation;
pub mod scroll;
pub mod shapes;

pub use config::MorphConfig;
pub use context::{FrameOutput, MorphContext};
pub use error::{MorphError, Result};
pub use live::LiveBuffer;
pub use morph::{morph_state, MorphDriver, MorphState};
pub use point_set::PointSet;
pub use rotation::{PointerInput, RotationSmoother};
pub use scroll::ScrollRange;
pub use shapes::dispatcher::{generate, ShapeKind};
pub use shapes::sequence::ShapeSequence;
