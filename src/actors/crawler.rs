use macroquad::prelude::Color;

use crate::render::surface::Surface;

// 场上的矩形实体（玩家或目标）：位置、尺寸、颜色与存活标记
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crawler {
    pub x: i32,
    pub y: i32,
    width: i32,
    height: i32,
    pub color: Color,
    pub alive: bool,
}

// 轴对齐包围盒
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Crawler {
    // 创建实体，初始存活；尺寸在整个生命周期内不变
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        debug_assert!(width > 0 && height > 0, "crawler size must be positive");
        Self {
            x,
            y,
            width,
            height,
            color,
            alive: true,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    // 位移不做边界限制，允许移出画布
    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    // 用自身颜色与几何绘制一次填充矩形
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(self.x, self.y, self.width, self.height, self.color);
    }
}
