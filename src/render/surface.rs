use macroquad::prelude::*;

use crate::error::CrawlerError;

// 绘制面：填充矩形、清除区域、读取画布尺寸
pub trait Surface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
    fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn size(&self) -> (i32, i32);
}

// 离屏画布：节拍之间保留像素，每帧缩放后贴到窗口
pub struct CanvasSurface {
    target: RenderTarget,
    camera: Camera2D,
    width: i32,
    height: i32,
    background: Color,
}

impl CanvasSurface {
    // 创建离屏画布；窗口尚未就绪时直接报错
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, CrawlerError> {
        let (sw, sh) = (screen_width(), screen_height());
        if sw <= 0.0 || sh <= 0.0 {
            return Err(CrawlerError::SurfaceUnavailable {
                width: sw,
                height: sh,
            });
        }
        if width <= 0 || height <= 0 {
            return Err(CrawlerError::InvalidSize {
                what: "canvas",
                width,
                height,
            });
        }

        let target = render_target(width as u32, height as u32);
        target.texture.set_filter(FilterMode::Nearest);
        let mut camera =
            Camera2D::from_display_rect(Rect::new(0.0, 0.0, width as f32, height as f32));
        camera.render_target = Some(target.clone());

        Ok(Self {
            target,
            camera,
            width,
            height,
            background,
        })
    }

    // 切换到画布相机，之后的绘制落在离屏纹理上
    pub fn bind(&self) {
        set_camera(&self.camera);
    }

    // 回到默认相机并把画布按视口贴到窗口
    pub fn present(&self, viewport: Viewport) {
        set_default_camera();
        let w = self.width as f32;
        let h = self.height as f32;
        draw_texture_ex(
            &self.target.texture,
            viewport.x,
            viewport.y,
            WHITE,
            DrawTextureParams {
                // RenderTarget 在纹理坐标系中是倒置的，这里做一次垂直翻转
                source: Some(Rect::new(0.0, h, w, -h)),
                dest_size: Some(vec2(w * viewport.scale, h * viewport.scale)),
                ..Default::default()
            },
        );
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        draw_rectangle(x as f32, y as f32, width as f32, height as f32, color);
    }

    fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        // 整块清除走 clear_background，局部区域用底色覆盖
        if x <= 0 && y <= 0 && width >= self.width && height >= self.height {
            clear_background(self.background);
        } else {
            draw_rectangle(
                x as f32,
                y as f32,
                width as f32,
                height as f32,
                self.background,
            );
        }
    }

    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

// 画布在窗口中的缩放与偏移
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

// 根据窗口尺寸计算缩放比例与居中偏移，顶部预留文字栏
pub fn fit_viewport(screen: (f32, f32), canvas: (f32, f32), hud_h: f32) -> Viewport {
    let (sw, sh) = screen;
    let (cw, ch) = canvas;
    let avail_h = (sh - hud_h).max(1.0);
    let scale = (sw / cw).min(avail_h / ch).max(0.1);
    Viewport {
        scale,
        x: (sw - cw * scale) * 0.5,
        y: hud_h + (avail_h - ch * scale) * 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_fills_width_when_canvas_is_wide() {
        let vp = fit_viewport((960.0, 540.0), (640.0, 240.0), 48.0);
        assert_eq!(vp.scale, 1.5);
        assert_eq!(vp.x, 0.0);
        // 可用高度 492，画布 360，上下各留 66
        assert_eq!(vp.y, 48.0 + 66.0);
    }

    #[test]
    fn viewport_is_limited_by_height_below_hud() {
        let vp = fit_viewport((960.0, 448.0), (400.0, 400.0), 48.0);
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.x, 280.0);
        assert_eq!(vp.y, 48.0);
    }

    #[test]
    fn viewport_scale_never_collapses() {
        let vp = fit_viewport((1.0, 10.0), (640.0, 360.0), 48.0);
        assert_eq!(vp.scale, 0.1);
    }
}
