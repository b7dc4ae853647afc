//! retouch-filter - the point-wise transform engine
//!
//! Pure functions over [`retouch_core::Raster`] values:
//!
//! - Brightness shift (`brighten`)
//! - Contrast scaling (`adjust_contrast`)
//! - Inversion (`invert`)
//! - Grayscale conversion (`to_grayscale`)
//! - Per-channel suppression (`channel_mask`)
//!
//! All operations return a new raster and leave the source untouched;
//! see the [`point`] module docs for the shared contract.

mod error;
pub mod point;

pub use error::{FilterError, FilterResult};
pub use point::{PointOp, adjust_contrast, brighten, channel_mask, invert, to_grayscale};
