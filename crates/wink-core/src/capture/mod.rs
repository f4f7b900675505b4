mod errors;
mod handler;
mod types;

pub use errors::CaptureError;
pub use handler::{
    CAPTURE_TIMEOUT, CaptureService, FrameCallback, GraphicsCaptureService, capture_frame, encode,
    save_to_file, to_base64,
};
pub use types::{
    CapturableWindow, CaptureConfig, CaptureFilter, ColorSpace, Frame, ImageFormat, PixelFormat,
    RawFrame,
};
