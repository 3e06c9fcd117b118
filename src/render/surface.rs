//! Drawing surface abstraction and the in-memory bitmap backend.
//!
//! The compositor draws through [`DrawSurface`], a minimal immediate-mode
//! interface: filled rectangles, an even-odd frame fill, and blitting a
//! pre-rasterized image. Production callers wrap their canvas in this trait;
//! [`BitmapSurface`] is the crate's own backend, used for preview/export
//! images and throughout the tests.
//!
//! A surface retains its pixels between render calls. That is what makes
//! incremental redraw possible: regions the compositor skips are simply the
//! previous frame's pixels.

use super::color::Rgba;
use crate::layout::Rect;
use thiserror::Error;

/// Failure to acquire or size a drawing surface.
///
/// This is the only failure the render path can encounter in steady state;
/// it aborts the render call and leaves the compositor's view state
/// untouched, so the next call diffs against the last successful render
/// (a full redraw only if there has not been one yet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The backing surface is not ready to draw into.
    #[error("drawing surface is not ready")]
    NotReady,
    /// The requested canvas size exceeds what the backend supports.
    #[error("surface size {width}x{height} exceeds the backend limit")]
    SizeUnsupported {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

/// An owned RGBA pixel image.
///
/// Used both as the output of grid rasterization (the square block images
/// the compositor blits) and as the backing store of [`BitmapSurface`].
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    /// Create a transparent bitmap of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)],
        }
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The raw pixel slice, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Get a pixel, or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Composite one pixel source-over. Out-of-bounds writes are dropped.
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            self.pixels[idx] = color.over(self.pixels[idx]);
        }
    }

    /// Fill a rectangle, compositing source-over and clamping to bounds.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let x_end = rect.right().min(self.width);
        let y_end = rect.bottom().min(self.height);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                let idx = (y as usize) * (self.width as usize) + (x as usize);
                self.pixels[idx] = color.over(self.pixels[idx]);
            }
        }
    }

    /// Fill the even-odd region between `outer` and `inner`: every pixel
    /// inside `outer` but not inside `inner` is composited exactly once,
    /// which keeps translucent frame colors correct.
    pub fn fill_frame(&mut self, outer: Rect, inner: Rect, color: Rgba) {
        let x_end = outer.right().min(self.width);
        let y_end = outer.bottom().min(self.height);
        for y in outer.y..y_end {
            for x in outer.x..x_end {
                if inner.contains(x, y) {
                    continue;
                }
                let idx = (y as usize) * (self.width as usize) + (x as usize);
                self.pixels[idx] = color.over(self.pixels[idx]);
            }
        }
    }

    /// Blit another bitmap at an integer offset, compositing source-over.
    pub fn blit(&mut self, src: &Self, x: u32, y: u32) {
        for sy in 0..src.height.min(self.height.saturating_sub(y)) {
            for sx in 0..src.width.min(self.width.saturating_sub(x)) {
                let pixel = src.pixels[(sy as usize) * (src.width as usize) + (sx as usize)];
                let idx = ((y + sy) as usize) * (self.width as usize) + ((x + sx) as usize);
                self.pixels[idx] = pixel.over(self.pixels[idx]);
            }
        }
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// An immediate-mode 2D drawing surface.
///
/// Colors cross this boundary as the composition's color strings; backends
/// that want parsed values use [`Rgba::parse_lossy`]. Draw calls after a
/// successful [`prepare`](DrawSurface::prepare) are infallible.
pub trait DrawSurface {
    /// Current surface width in pixels.
    fn width(&self) -> u32;

    /// Current surface height in pixels.
    fn height(&self) -> u32;

    /// Acquire the surface and size it for the coming frame.
    ///
    /// Resizing may clear the surface; keeping the size keeps the pixels.
    fn prepare(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// Fill the even-odd region between two nested rectangles (the frame a
    /// border layer paints).
    fn fill_frame(&mut self, outer: Rect, inner: Rect, color: &str);

    /// Blit a pre-rasterized image at an integer offset.
    fn blit(&mut self, bitmap: &Bitmap, x: u32, y: u32);
}

/// [`DrawSurface`] backed by an owned [`Bitmap`].
///
/// This is the preview/export path: render into it, then hand
/// [`BitmapSurface::bitmap`] to the encoder. It is also the surface the
/// crate's own tests draw into.
#[derive(Clone, Debug)]
pub struct BitmapSurface {
    bitmap: Bitmap,
    max_dimension: u32,
}

impl BitmapSurface {
    /// Default per-axis size limit, matching common canvas backends.
    pub const DEFAULT_MAX_DIMENSION: u32 = 16_384;

    /// Create an empty surface with the default size limit.
    pub fn new() -> Self {
        Self::with_max_dimension(Self::DEFAULT_MAX_DIMENSION)
    }

    /// Create an empty surface with an explicit per-axis size limit.
    pub fn with_max_dimension(max_dimension: u32) -> Self {
        Self {
            bitmap: Bitmap::new(0, 0),
            max_dimension,
        }
    }

    /// The rendered image.
    #[inline]
    pub const fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
}

impl Default for BitmapSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for BitmapSurface {
    fn width(&self) -> u32 {
        self.bitmap.width()
    }

    fn height(&self) -> u32 {
        self.bitmap.height()
    }

    fn prepare(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 || width > self.max_dimension || height > self.max_dimension {
            return Err(SurfaceError::SizeUnsupported { width, height });
        }
        if self.bitmap.width() != width || self.bitmap.height() != height {
            self.bitmap = Bitmap::new(width, height);
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.bitmap.fill_rect(rect, Rgba::parse_lossy(color));
    }

    fn fill_frame(&mut self, outer: Rect, inner: Rect, color: &str) {
        self.bitmap.fill_frame(outer, inner, Rgba::parse_lossy(color));
    }

    fn blit(&mut self, bitmap: &Bitmap, x: u32, y: u32) {
        self.bitmap.blit(bitmap, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_fill_rect_clamped() {
        let mut bitmap = Bitmap::new(4, 4);
        bitmap.fill_rect(Rect::new(2, 2, 10, 10), Rgba::WHITE);
        assert_eq!(bitmap.get(1, 1), Some(Rgba::TRANSPARENT));
        assert_eq!(bitmap.get(2, 2), Some(Rgba::WHITE));
        assert_eq!(bitmap.get(3, 3), Some(Rgba::WHITE));
        assert_eq!(bitmap.get(4, 4), None);
    }

    #[test]
    fn test_bitmap_fill_frame_leaves_inner() {
        let mut bitmap = Bitmap::new(8, 8);
        let outer = Rect::from_size(8, 8);
        bitmap.fill_frame(outer, outer.inset(2), Rgba::BLACK);
        assert_eq!(bitmap.get(0, 0), Some(Rgba::BLACK));
        assert_eq!(bitmap.get(1, 7), Some(Rgba::BLACK));
        assert_eq!(bitmap.get(2, 2), Some(Rgba::TRANSPARENT));
        assert_eq!(bitmap.get(5, 5), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_bitmap_fill_frame_translucent_paints_once() {
        // A translucent frame over white must end at exactly one blend step.
        let mut bitmap = Bitmap::new(6, 6);
        bitmap.fill_rect(Rect::from_size(6, 6), Rgba::WHITE);
        let outer = Rect::from_size(6, 6);
        bitmap.fill_frame(outer, outer.inset(1), Rgba::with_alpha(0, 0, 0, 128));

        let expected = Rgba::with_alpha(0, 0, 0, 128).over(Rgba::WHITE);
        assert_eq!(bitmap.get(0, 0), Some(expected));
        assert_eq!(bitmap.get(5, 0), Some(expected));
        assert_eq!(bitmap.get(2, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn test_bitmap_blit_offset_and_clip() {
        let mut dst = Bitmap::new(4, 4);
        let mut src = Bitmap::new(3, 3);
        src.fill_rect(Rect::from_size(3, 3), Rgba::WHITE);

        dst.blit(&src, 2, 2);
        assert_eq!(dst.get(1, 1), Some(Rgba::TRANSPARENT));
        assert_eq!(dst.get(2, 2), Some(Rgba::WHITE));
        assert_eq!(dst.get(3, 3), Some(Rgba::WHITE));
    }

    #[test]
    fn test_surface_prepare_keeps_pixels_at_same_size() {
        let mut surface = BitmapSurface::new();
        surface.prepare(4, 4).unwrap();
        surface.fill_rect(Rect::from_size(4, 4), "#ff0000");
        surface.prepare(4, 4).unwrap();
        assert_eq!(surface.bitmap().get(0, 0), Some(Rgba::new(255, 0, 0)));
    }

    #[test]
    fn test_surface_prepare_resize_clears() {
        let mut surface = BitmapSurface::new();
        surface.prepare(4, 4).unwrap();
        surface.fill_rect(Rect::from_size(4, 4), "#ff0000");
        surface.prepare(6, 6).unwrap();
        assert_eq!(surface.bitmap().get(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_surface_prepare_rejects_oversize() {
        let mut surface = BitmapSurface::with_max_dimension(64);
        assert_eq!(
            surface.prepare(65, 10),
            Err(SurfaceError::SizeUnsupported { width: 65, height: 10 })
        );
        assert_eq!(
            surface.prepare(0, 10),
            Err(SurfaceError::SizeUnsupported { width: 0, height: 10 })
        );
    }
}
