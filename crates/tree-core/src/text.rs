//! Text to point-cloud sampling for the word formation.
//!
//! A message is drawn white-on-black into an offscreen luminance bitmap using
//! the embedded 8x8 bitmap font, scaled up and emboldened. The bitmap is then
//! decimated on a stride grid; every sample brighter than the threshold
//! becomes a candidate. Output points are drawn from the candidates with
//! replacement, so any requested count can be met.

use font8x8::legacy::BASIC_LEGACY;
use glam::{UVec2, Vec2, Vec3};
use rand::Rng;

use crate::constants::*;

/// Offscreen 8-bit luminance raster. Row-major, origin top-left.
#[derive(Clone, Debug)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// All-black bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Fill an axis-aligned rectangle, clipped to the bitmap.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, value: u8) {
        let x0 = x.clamp(0, self.width as i64) as usize;
        let y0 = y.clamp(0, self.height as i64) as usize;
        let x1 = (x + w).clamp(0, self.width as i64) as usize;
        let y1 = (y + h).clamp(0, self.height as i64) as usize;
        let stride = self.width as usize;
        for row in y0..y1 {
            self.pixels[row * stride + x0..row * stride + x1].fill(value);
        }
    }

    pub fn lit_count(&self, threshold: u8) -> usize {
        self.pixels.iter().filter(|&&p| p > threshold).count()
    }
}

/// Raster layout and sampling parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterParams {
    pub width: u32,
    pub height: u32,
    pub font_px: u32,
    pub line_height: u32,
    pub stride: u32,
    pub threshold: u8,
    pub bold: bool,
}

impl Default for RasterParams {
    fn default() -> Self {
        Self {
            width: RASTER_WIDTH,
            height: RASTER_HEIGHT,
            font_px: RASTER_FONT_PX,
            line_height: RASTER_LINE_HEIGHT,
            stride: RASTER_STRIDE,
            threshold: RASTER_THRESHOLD,
            bold: true,
        }
    }
}

/// Candidate pixel coordinates of a traced message.
#[derive(Clone, Debug)]
pub struct GlyphCloud {
    candidates: Vec<UVec2>,
    width: u32,
    height: u32,
}

impl GlyphCloud {
    pub fn candidates(&self) -> &[UVec2] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Map a raster coordinate into a centered world-space area. Y is flipped
    /// because raster rows grow downward.
    #[inline]
    pub fn to_world(&self, px: UVec2, area: Vec2) -> Vec2 {
        Vec2::new(
            (px.x as f32 / self.width as f32 - 0.5) * area.x,
            -(px.y as f32 / self.height as f32 - 0.5) * area.y,
        )
    }

    /// Draw `count` points with replacement and lift them into 3D with a
    /// uniform depth jitter of `±depth_scale`.
    ///
    /// An empty cloud yields `count` points at the origin.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        area: Vec2,
        depth_scale: f32,
        rng: &mut R,
    ) -> Vec<Vec3> {
        if self.candidates.is_empty() {
            return vec![Vec3::ZERO; count];
        }
        (0..count)
            .map(|_| {
                let px = self.candidates[rng.gen_range(0..self.candidates.len())];
                let p = self.to_world(px, area);
                let z = rng.gen_range(-1.0f32..=1.0) * depth_scale;
                Vec3::new(p.x, p.y, z)
            })
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct TextRasterSampler {
    pub params: RasterParams,
}

impl TextRasterSampler {
    pub fn new(params: RasterParams) -> Self {
        Self { params }
    }

    /// Draw `text` into a fresh bitmap. Lines are split on `\n`, centered
    /// horizontally, `line_height` apart, and the block is centered
    /// vertically.
    pub fn rasterize(&self, text: &str) -> Bitmap {
        let p = &self.params;
        let mut bitmap = Bitmap::new(p.width, p.height);
        let cell = (p.font_px / 8).max(1) as i64;
        let smear = if p.bold {
            (cell / RASTER_BOLD_DIVISOR as i64).max(1)
        } else {
            0
        };

        let lines: Vec<&str> = text.split('\n').map(|l| l.trim_end_matches('\r')).collect();
        let line_height = p.line_height as i64;
        let start_y = (p.height as i64 - (lines.len() as i64 - 1) * line_height) / 2;

        for (i, line) in lines.iter().enumerate() {
            let glyphs: Vec<[u8; 8]> = line.chars().map(glyph_rows).collect();
            let line_w = glyphs.len() as i64 * 8 * cell;
            let left = p.width as i64 / 2 - line_w / 2;
            // middle baseline: the glyph cell is centered on the line's y
            let top = start_y + i as i64 * line_height - 4 * cell;
            for (gi, rows) in glyphs.iter().enumerate() {
                let gx = left + gi as i64 * 8 * cell;
                for (ry, row) in rows.iter().enumerate() {
                    for bit in 0..8 {
                        if (row >> bit) & 1 == 1 {
                            bitmap.fill_rect(
                                gx + bit as i64 * cell,
                                top + ry as i64 * cell,
                                cell + smear,
                                cell,
                                u8::MAX,
                            );
                        }
                    }
                }
            }
        }
        bitmap
    }

    /// Stride-decimated bright samples of `bitmap`.
    pub fn lit_pixels(&self, bitmap: &Bitmap) -> Vec<UVec2> {
        let stride = self.params.stride.max(1) as usize;
        let mut out = Vec::new();
        for y in (0..bitmap.height()).step_by(stride) {
            for x in (0..bitmap.width()).step_by(stride) {
                if bitmap.luminance(x, y) > self.params.threshold {
                    out.push(UVec2::new(x, y));
                }
            }
        }
        out
    }

    pub fn trace(&self, text: &str) -> GlyphCloud {
        let bitmap = self.rasterize(text);
        let candidates = self.lit_pixels(&bitmap);
        log::debug!(
            "[text] traced {:?}: {} candidates",
            text,
            candidates.len()
        );
        GlyphCloud {
            candidates,
            width: bitmap.width(),
            height: bitmap.height(),
        }
    }

    /// One-shot trace and sample.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        text: &str,
        count: usize,
        area: Vec2,
        depth_scale: f32,
        rng: &mut R,
    ) -> Vec<Vec3> {
        self.trace(text).sample(count, area, depth_scale, rng)
    }
}

/// Row bitmaps for `ch`, bit 0 leftmost. Whitespace is blank; other
/// characters outside the font fall back to `?`.
fn glyph_rows(ch: char) -> [u8; 8] {
    let index = ch as usize;
    if index < BASIC_LEGACY.len() {
        BASIC_LEGACY[index]
    } else if ch.is_whitespace() {
        [0; 8]
    } else {
        BASIC_LEGACY[b'?' as usize]
    }
}
