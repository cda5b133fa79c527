use std::path::Path;

use image::{ImageBuffer, ImageResult, Rgba, RgbaImage};
use macroquad::prelude::Color;

use super::surface::Surface;

const TRANSPARENT_PX: Rgba<u8> = Rgba([0, 0, 0, 0]);

// 软件光栅画布：无窗口时渲染到内存图像，可导出 PNG
pub struct RasterSurface {
    img: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: ImageBuffer::from_pixel(width, height, TRANSPARENT_PX),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    // 读取像素；越界返回 None
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.img.width() || y >= self.img.height() {
            return None;
        }
        Some(self.img.get_pixel(x, y).0)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.img.save(path)
    }

    // 把矩形裁剪到图像范围内，返回半开区间 [x0, x1) x [y0, y1)
    fn clip(&self, x: i32, y: i32, width: i32, height: i32) -> Option<(u32, u32, u32, u32)> {
        let (w, h) = (i64::from(self.img.width()), i64::from(self.img.height()));
        let x0 = i64::from(x).clamp(0, w);
        let y0 = i64::from(y).clamp(0, h);
        let x1 = (i64::from(x) + i64::from(width)).clamp(0, w);
        let y1 = (i64::from(y) + i64::from(height)).clamp(0, h);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

impl Surface for RasterSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, width, height) else {
            return;
        };
        let src = to_rgba8(color);
        for py in y0..y1 {
            for px in x0..x1 {
                let dst = self.img.get_pixel(px, py).0;
                self.img.put_pixel(px, py, Rgba(blend(dst, src)));
            }
        }
    }

    fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, width, height) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                self.img.put_pixel(px, py, TRANSPARENT_PX);
            }
        }
    }

    fn size(&self) -> (i32, i32) {
        (
            i32::try_from(self.img.width()).unwrap_or(i32::MAX),
            i32::try_from(self.img.height()).unwrap_or(i32::MAX),
        )
    }
}

// 浮点颜色转 8 位 RGBA
pub fn to_rgba8(color: Color) -> [u8; 4] {
    let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [q(color.r), q(color.g), q(color.b), q(color.a)]
}

// source-over 混合
fn blend(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 255 {
        return src;
    }
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let mix = |s: u8, d: u8| ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a).round() as u8;
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}
