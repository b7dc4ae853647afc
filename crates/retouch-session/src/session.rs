//! The editing session state machine
//!
//! An [`ImageSession`] owns two buffers:
//!
//! - the **baseline**: the last loaded or committed image, the stable
//!   reference every transform reads from
//! - the **preview**: the most recent transform result, shown to the
//!   user but not yet committed
//!
//! When no preview exists the baseline itself is displayed. Transforms
//! always read the baseline and never the previous preview, so dragging
//! a slider re-measures from the same reference instead of compounding.
//!
//! The session is single-threaded and synchronous: every operation
//! runs to completion, and a new buffer is fully computed before any
//! field is replaced, so no half-applied state is ever observable.
//! Concurrent use of one session requires external mutual exclusion.

use crate::error::{SessionError, SessionResult};
use retouch_core::Raster;
use retouch_filter::PointOp;
use retouch_io::{DisplayBitmap, ImageFormat};
use std::path::Path;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing loaded yet
    Empty,
    /// Baseline present, displayed image is the baseline
    Loaded,
    /// Baseline present, a distinct preview is displayed
    Previewing,
}

/// A single-image editing session.
#[derive(Debug, Default)]
pub struct ImageSession {
    /// Last loaded or committed image
    baseline: Option<Raster>,
    /// Uncommitted transform result; `None` means displayed == baseline
    preview: Option<Raster>,
}

impl ImageSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        match (&self.baseline, &self.preview) {
            (None, _) => SessionState::Empty,
            (Some(_), None) => SessionState::Loaded,
            (Some(_), Some(_)) => SessionState::Previewing,
        }
    }

    /// The baseline image, if any.
    pub fn baseline(&self) -> Option<&Raster> {
        self.baseline.as_ref()
    }

    /// The currently displayed image: the preview when one exists,
    /// otherwise the baseline.
    pub fn displayed(&self) -> Option<&Raster> {
        self.preview.as_ref().or(self.baseline.as_ref())
    }

    /// Decode `bytes` and make the result the new baseline.
    ///
    /// Any uncommitted preview is discarded. On failure the session is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] when the bytes cannot be decoded.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> SessionResult<()> {
        let raster = retouch_io::decode_image(bytes)?;
        log::debug!("loaded {}x{} image", raster.width(), raster.height());
        self.baseline = Some(raster);
        self.preview = None;
        Ok(())
    }

    /// Read, decode, and load an image file as the new baseline.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> SessionResult<()> {
        let raster = retouch_io::read_image(path)?;
        log::debug!("loaded {}x{} image", raster.width(), raster.height());
        self.baseline = Some(raster);
        self.preview = None;
        Ok(())
    }

    /// Apply a point-wise transform to the baseline and make the result
    /// the new preview, returning it for rendering.
    ///
    /// The baseline is untouched; a later [`reset`](Self::reset) gets
    /// back to it bit-for-bit.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSourceImage`] on an empty session, or
    /// [`SessionError::Filter`] for invalid transform parameters.
    pub fn apply(&mut self, op: PointOp) -> SessionResult<&Raster> {
        let baseline = self.baseline.as_ref().ok_or(SessionError::NoSourceImage)?;
        let result = op.apply(baseline)?;
        log::debug!("applied {:?}", op);
        Ok(self.preview.insert(result))
    }

    /// Promote the preview to be the new baseline.
    ///
    /// Immediately after a load (no preview) this is a no-op, since the
    /// displayed image already is the baseline.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoDisplayedImage`] on an empty session.
    pub fn commit(&mut self) -> SessionResult<()> {
        if self.baseline.is_none() {
            return Err(SessionError::NoDisplayedImage);
        }
        if let Some(preview) = self.preview.take() {
            log::debug!("committed preview as new baseline");
            self.baseline = Some(preview);
        }
        Ok(())
    }

    /// Discard the uncommitted preview so the baseline is displayed
    /// again.
    ///
    /// On an empty session this is a reported no-op, not an error.
    pub fn reset(&mut self) {
        if self.baseline.is_none() {
            log::debug!("reset requested on empty session");
            return;
        }
        self.preview = None;
    }

    /// Encode the displayed image in the given container format.
    ///
    /// Session state is unchanged regardless of outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoDisplayedImage`] on an empty session,
    /// or [`SessionError::Io`] when encoding fails.
    pub fn save_bytes(&self, format: ImageFormat) -> SessionResult<Vec<u8>> {
        let displayed = self.displayed().ok_or(SessionError::NoDisplayedImage)?;
        Ok(retouch_io::encode_image(displayed, format)?)
    }

    /// Encode the displayed image and write it to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ImageFormat) -> SessionResult<()> {
        let displayed = self.displayed().ok_or(SessionError::NoDisplayedImage)?;
        Ok(retouch_io::write_image(displayed, path, format)?)
    }

    /// Render the displayed image as a display bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoDisplayedImage`] on an empty session.
    pub fn display(&self) -> SessionResult<DisplayBitmap> {
        let displayed = self.displayed().ok_or(SessionError::NoDisplayedImage)?;
        Ok(retouch_io::to_display(displayed))
    }

    /// Install an externally rendered bitmap as the preview.
    ///
    /// For shells whose displayed image lives in a native bitmap: the
    /// bitmap is round-tripped through the display bridge (normalizing
    /// channel order and dropping alpha), so a following
    /// [`commit`](Self::commit) promotes the normalized copy.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSourceImage`] on an empty session, and
    /// [`SessionError::Io`] wrapping `NullSource` when `bitmap` is
    /// absent.
    pub fn adopt_display(&mut self, bitmap: Option<&DisplayBitmap>) -> SessionResult<&Raster> {
        if self.baseline.is_none() {
            return Err(SessionError::NoSourceImage);
        }
        let raster = retouch_io::from_display(bitmap)?;
        Ok(self.preview.insert(raster))
    }
}
