//! Bridges the asynchronous platform capture service into a blocking call.
//!
//! The service delivers frames on a thread it owns; `capture_frame` parks
//! the calling thread on a one-shot rendezvous channel until the completion
//! arrives or the timeout elapses. The completion closure owns everything
//! it touches, so a completion that fires after a timeout lands on a
//! disconnected channel and is dropped.

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, info, warn};

use super::errors::CaptureError;
use super::types::{CapturableWindow, CaptureConfig, CaptureFilter, Frame, ImageFormat, RawFrame};

/// Upper bound on the wait for a capture completion
pub const CAPTURE_TIMEOUT: Duration = Duration::from_secs(5);

/// Completion callback invoked once by the capture service, on a thread the
/// service owns
pub type FrameCallback = Box<dyn FnOnce(Result<RawFrame, String>) + Send + 'static>;

/// External capture service: lists capturable windows and delivers single
/// frames asynchronously
pub trait CaptureService: Send + Sync {
    /// List the windows the service can currently capture
    fn list_capturable(&self) -> Result<Vec<CapturableWindow>, String>;

    /// Request one frame scoped by `filter`; the result is delivered via
    /// `deliver`, not on the calling thread
    fn request_frame(&self, filter: CaptureFilter, config: CaptureConfig, deliver: FrameCallback);
}

/// Capture one still frame of `window_id`, blocking until the service
/// completes or `timeout` elapses.
///
/// A window visible to the lightweight directory enumeration may not be
/// capturable (it vanished, or capture privilege does not cover it), so the
/// target is validated against the service's own listing before a request
/// is submitted. Exactly one of a frame or a failure reason is returned;
/// the call never retries.
pub fn capture_frame(
    service: &dyn CaptureService,
    window_id: u32,
    target_width: u32,
    target_height: u32,
    timeout: Duration,
) -> Result<Frame, CaptureError> {
    info!(
        event = "core.capture.started",
        window_id,
        target_width,
        target_height
    );

    let listing = service.list_capturable().map_err(|reason| {
        warn!(event = "core.capture.listing_failed", reason = %reason);
        CaptureError::ServiceUnavailable { reason }
    })?;

    let Some(target) = listing.iter().find(|w| w.id() == window_id) else {
        warn!(event = "core.capture.window_not_capturable", window_id);
        return Err(CaptureError::WindowNotFound { window_id });
    };
    debug!(
        event = "core.capture.target_located",
        window_id,
        title = target.title(),
        owner = target.owner()
    );

    let filter = CaptureFilter::window(window_id);
    let config = CaptureConfig::new(target_width, target_height);

    // The sender moves into the completion closure; a late completion sends
    // into a disconnected channel and is dropped.
    let (tx, rx) = mpsc::sync_channel::<Result<RawFrame, String>>(1);
    service.request_frame(
        filter,
        config,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );

    let delivered = match rx.recv_timeout(timeout) {
        Ok(delivered) => delivered,
        Err(_) => {
            let timeout_ms = timeout.as_millis() as u64;
            warn!(event = "core.capture.timed_out", window_id, timeout_ms);
            return Err(CaptureError::Timeout { timeout_ms });
        }
    };

    let raw = delivered.map_err(|reason| {
        warn!(event = "core.capture.completion_failed", window_id, reason = %reason);
        CaptureError::CaptureFailed { reason }
    })?;

    let frame = Frame::from_raw(raw)?;
    info!(
        event = "core.capture.completed",
        window_id,
        width = frame.width(),
        height = frame.height(),
        bytes_per_row = frame.bytes_per_row()
    );
    Ok(frame)
}

/// Encode a frame in the requested output format
pub fn encode(frame: &Frame, format: ImageFormat) -> Result<Vec<u8>, CaptureError> {
    let rgba = frame.to_rgba().ok_or_else(|| CaptureError::EncodeFailed {
        reason: "frame dimensions do not match buffer".to_string(),
    })?;

    let mut bytes = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut bytes);
    match format {
        ImageFormat::Png => image::DynamicImage::ImageRgba8(rgba)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .map_err(|e| CaptureError::EncodeFailed {
                reason: e.to_string(),
            })?,
        ImageFormat::Jpeg { quality } => {
            // JPEG has no alpha channel
            let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality);
            rgb.write_with_encoder(encoder)
                .map_err(|e| CaptureError::EncodeFailed {
                    reason: e.to_string(),
                })?;
        }
    }
    Ok(bytes)
}

/// Encode and write a frame to disk
pub fn save_to_file(frame: &Frame, path: &Path, format: ImageFormat) -> Result<(), CaptureError> {
    let bytes = encode(frame, format)?;
    std::fs::write(path, bytes).map_err(|e| CaptureError::SaveFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    info!(event = "core.capture.saved", path = %path.display());
    Ok(())
}

/// Encode a frame and return it as a base64 string
pub fn to_base64(frame: &Frame, format: ImageFormat) -> Result<String, CaptureError> {
    Ok(STANDARD.encode(encode(frame, format)?))
}

/// Production capture service backed by the platform's window capture API.
///
/// Frames are captured on a dedicated thread and handed to the completion
/// callback there, matching the asynchronous contract of `CaptureService`.
#[derive(Debug, Default)]
pub struct GraphicsCaptureService;

impl GraphicsCaptureService {
    pub fn new() -> Self {
        Self
    }
}

impl CaptureService for GraphicsCaptureService {
    fn list_capturable(&self) -> Result<Vec<CapturableWindow>, String> {
        let windows = xcap::Window::all().map_err(|e| e.to_string())?;
        Ok(windows
            .iter()
            .filter_map(|w| {
                let id = w.id().ok()?;
                let title = w.title().ok().unwrap_or_default();
                let owner = w.app_name().ok().unwrap_or_default();
                if title.is_empty() && owner.is_empty() {
                    return None;
                }
                if w.is_minimized().unwrap_or(false) {
                    return None;
                }
                let width = w.width().ok().unwrap_or(0);
                let height = w.height().ok().unwrap_or(0);
                Some(CapturableWindow::new(id, title, owner, width, height))
            })
            .collect())
    }

    fn request_frame(&self, filter: CaptureFilter, config: CaptureConfig, deliver: FrameCallback) {
        std::thread::spawn(move || deliver(capture_native_frame(filter, config)));
    }
}

fn capture_native_frame(filter: CaptureFilter, config: CaptureConfig) -> Result<RawFrame, String> {
    let windows = xcap::Window::all().map_err(|e| e.to_string())?;
    let window = windows
        .into_iter()
        .find(|w| w.id().ok() == Some(filter.window_id()))
        .ok_or_else(|| format!("window {} disappeared before capture", filter.window_id()))?;

    let mut image = window.capture_image().map_err(|e| e.to_string())?;

    // Target dimensions are hints; resample only when they name a size
    // different from the native frame.
    if config.width() > 0
        && config.height() > 0
        && (config.width(), config.height()) != image.dimensions()
    {
        image = image::imageops::resize(
            &image,
            config.width(),
            config.height(),
            image::imageops::FilterType::Triangle,
        );
    }

    let (width, height) = image.dimensions();
    Ok(RawFrame {
        width,
        height,
        bytes_per_row: width as usize * 4,
        data: image.into_raw(),
    })
}
