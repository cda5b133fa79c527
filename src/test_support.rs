//! Recording surface for asserting draw order without a window.

use macroquad::prelude::Color;

use crate::render::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Fill {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    Clear {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

pub struct RecordingSurface {
    pub width: i32,
    pub height: i32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    // 取出并清空已记录的命令
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn fills_with(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Fill { color: c, .. } if *c == color))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.commands.push(DrawCommand::Fill {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}
