//! retouch-session - the stateful editing coordinator
//!
//! Holds the baseline ("original") image and coordinates
//! load / transform / commit / reset / save against the transform
//! engine and the format bridge. This is the only stateful component
//! of the library; everything below it is pure functions over raster
//! values.

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::{ImageSession, SessionState};
