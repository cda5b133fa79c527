use macroquad::prelude::*;

use crate::model::Readout;

const TEXT_SIZE: u16 = 24;
const MARGIN: f32 = 16.0;

// 在顶部文字栏绘制坐标（左）与状态提示（右）
pub fn draw_readout(readout: &Readout, screen_w: f32, baseline: f32) {
    draw_text(readout.movement(), MARGIN, baseline, TEXT_SIZE as f32, LIGHTGRAY);
    if let Some(status) = readout.status() {
        let dims = measure_text(status, None, TEXT_SIZE, 1.0);
        draw_text(
            status,
            screen_w - dims.width - MARGIN,
            baseline,
            TEXT_SIZE as f32,
            GOLD,
        );
    }
}
