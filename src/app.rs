use log::info;
use macroquad::prelude::*;

use crate::config::HUD_H;
use crate::error::CrawlerError;
use crate::render::surface::{fit_viewport, CanvasSurface};
use crate::systems::TickTimer;
use crate::ui::draw_readout;
use crate::world::layout::ArenaLayout;
use crate::world::Arena;

// 游戏主循环：按键即时移动玩家，节拍到期时检测命中并重绘画布
// 画布未就绪时返回错误；胜利后循环不停止
pub async fn run(layout: ArenaLayout) -> Result<(), CrawlerError> {
    let mut arena = Arena::from_layout(&layout)?;

    // 窗口就绪后才创建画布与节拍器
    let (canvas_w, canvas_h) = layout.canvas_size();
    let mut canvas = CanvasSurface::new(canvas_w, canvas_h, layout.canvas.background()?)?;
    let mut timer = TickTimer::new(layout.tick_interval());
    info!(
        "canvas {}x{}, tick every {:?}",
        canvas_w,
        canvas_h,
        timer.interval()
    );

    loop {
        // 每次物理按键只触发一次
        for key in get_keys_pressed() {
            arena.handle_key(key);
        }

        let due = timer.advance(get_frame_time());
        if due > 0 {
            canvas.bind();
            for _ in 0..due {
                arena.tick(&mut canvas);
            }
        }

        // 回到默认相机，把画布放大贴到窗口
        set_default_camera();
        clear_background(BLACK);
        let sw = screen_width();
        let viewport = fit_viewport(
            (sw, screen_height()),
            (canvas_w as f32, canvas_h as f32),
            HUD_H,
        );
        canvas.present(viewport);
        draw_readout(arena.readout(), sw, HUD_H * 0.65);

        next_frame().await;
    }
}
