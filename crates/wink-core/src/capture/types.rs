use super::errors::CaptureError;

/// One entry from the capture service's capturable-window listing
#[derive(Debug, Clone)]
pub struct CapturableWindow {
    id: u32,
    title: String,
    owner: String,
    width: u32,
    height: u32,
}

impl CapturableWindow {
    pub fn new(id: u32, title: String, owner: String, width: u32, height: u32) -> Self {
        Self {
            id,
            title,
            owner,
            width,
            height,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Scopes a capture request to exactly one window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureFilter {
    window_id: u32,
}

impl CaptureFilter {
    pub fn window(window_id: u32) -> Self {
        Self { window_id }
    }

    pub fn window_id(&self) -> u32 {
        self.window_id
    }
}

/// Pixel format requested from the capture service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    #[default]
    Rgba8,
}

/// Color space requested from the capture service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    #[default]
    Srgb,
}

/// Capture configuration.
///
/// Width and height are hints to the capture service, not guarantees; zero
/// means native size. The delivered frame's reported dimensions are
/// authoritative.
#[derive(Debug, Clone, Copy)]
pub struct CaptureConfig {
    width: u32,
    height: u32,
    pixel_format: PixelFormat,
    color_space: ColorSpace,
}

impl CaptureConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_format: PixelFormat::default(),
            color_space: ColorSpace::default(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }
}

/// A frame as delivered by the capture service.
///
/// `data` may carry per-row padding; `bytes_per_row` is the authoritative
/// stride and must be used for all row addressing.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub bytes_per_row: usize,
    pub data: Vec<u8>,
}

/// An owned RGBA frame copied out of a delivered capture buffer.
///
/// The source stride is preserved: `data.len() == height * bytes_per_row`,
/// which may exceed `height * width * 4` on padded sources.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Validate a delivered frame and copy its rows into an owned buffer
    /// using the reported stride
    pub(crate) fn from_raw(raw: RawFrame) -> Result<Self, CaptureError> {
        if raw.width == 0 || raw.height == 0 {
            return Err(CaptureError::CaptureFailed {
                reason: format!("zero-sized frame ({}x{})", raw.width, raw.height),
            });
        }
        if raw.bytes_per_row < raw.width as usize * 4 {
            return Err(CaptureError::CaptureFailed {
                reason: format!(
                    "reported stride {} is smaller than a row of {} pixels",
                    raw.bytes_per_row, raw.width
                ),
            });
        }
        if raw.data.len() < raw.height as usize * raw.bytes_per_row {
            return Err(CaptureError::CaptureFailed {
                reason: format!(
                    "frame buffer holds {} bytes, expected at least {}",
                    raw.data.len(),
                    raw.height as usize * raw.bytes_per_row
                ),
            });
        }

        let mut data = Vec::with_capacity(raw.height as usize * raw.bytes_per_row);
        for row in raw
            .data
            .chunks_exact(raw.bytes_per_row)
            .take(raw.height as usize)
        {
            data.extend_from_slice(row);
        }

        Ok(Self {
            width: raw.width,
            height: raw.height,
            bytes_per_row: raw.bytes_per_row,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Read one RGBA pixel, addressing rows by the preserved stride
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.bytes_per_row + x as usize * 4;
        let bytes = self.data.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Produce a packed image, stripping any row padding
    pub fn to_rgba(&self) -> Option<image::RgbaImage> {
        let row_len = self.width as usize * 4;
        let packed = if self.bytes_per_row == row_len {
            self.data.clone()
        } else {
            let mut packed = Vec::with_capacity(self.height as usize * row_len);
            for row in self.data.chunks_exact(self.bytes_per_row) {
                packed.extend_from_slice(&row[..row_len]);
            }
            packed
        };
        image::RgbaImage::from_raw(self.width, self.height, packed)
    }
}

/// Output encoding for a captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg { quality: u8 },
}
