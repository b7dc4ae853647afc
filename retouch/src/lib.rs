//! Retouch - point-wise image retouching with a baseline/preview session
//!
//! # Overview
//!
//! Retouch is the engine behind a simple image editor: load a picture,
//! drag a brightness or contrast control, preview the result, commit it
//! as the new baseline or reset back, and save to disk.
//!
//! - [`Raster`] - interleaved BGR pixel buffer with explicit stride
//! - [`io`] - PNG/JPEG/BMP codecs and the display-bitmap bridge
//! - [`filter`] - point-wise transforms (brightness, contrast, invert,
//!   grayscale, channel suppression)
//! - [`session`] - the baseline/preview state machine tying it together
//!
//! # Example
//!
//! ```
//! use retouch::filter::PointOp;
//! use retouch::session::ImageSession;
//! use retouch::io::{encode_image, ImageFormat};
//! use retouch::{Bgr, Raster};
//!
//! // a tiny image, encoded as a stand-in for a file on disk
//! let mut img = Raster::new(4, 4).unwrap();
//! img.set(0, 0, Bgr::new(10, 20, 30)).unwrap();
//! let bytes = encode_image(&img, ImageFormat::Png).unwrap();
//!
//! let mut session = ImageSession::new();
//! session.load_bytes(&bytes).unwrap();
//! session.apply(PointOp::Brighten(25)).unwrap();
//! session.commit().unwrap();
//! assert_eq!(session.baseline().unwrap().get(0, 0).unwrap(), Bgr::new(35, 45, 55));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use retouch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use retouch_filter as filter;
pub use retouch_io as io;
pub use retouch_session as session;
