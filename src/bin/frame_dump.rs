use std::fs;

use crawler::actors::Crawler;
use crawler::config::LAYOUT_PATH;
use crawler::logging;
use crawler::render::raster::RasterSurface;
use crawler::world::layout::ArenaLayout;
use crawler::world::Arena;
use macroquad::prelude::KeyCode;

const OUT_DIR: &str = "frames";

// 按步长把玩家从当前位置移向目标左上角所需的按键序列
fn route_to(player: &Crawler, target: &Crawler, step: i32) -> Vec<KeyCode> {
    let step = step.max(1);
    let dx = (target.x - player.x) / step;
    let dy = (target.y - player.y) / step;
    let horizontal = if dx >= 0 { KeyCode::Right } else { KeyCode::Left };
    let vertical = if dy >= 0 { KeyCode::Down } else { KeyCode::Up };

    let mut keys = vec![horizontal; dx.unsigned_abs() as usize];
    keys.extend(vec![vertical; dy.unsigned_abs() as usize]);
    keys
}

fn main() -> Result<(), String> {
    logging::init();
    let layout = ArenaLayout::load_or_default(LAYOUT_PATH);
    let mut arena = Arena::from_layout(&layout).map_err(|e| e.to_string())?;
    let (w, h) = layout.canvas_size();
    let mut surface = RasterSurface::new(w as u32, h as u32);

    fs::create_dir_all(OUT_DIR).map_err(|e| format!("create {OUT_DIR} failed: {e}"))?;

    arena.tick(&mut surface);
    let opening = format!("{OUT_DIR}/opening.png");
    surface
        .save(&opening)
        .map_err(|e| format!("save failed: {e}"))?;
    println!("wrote {opening} ({}x{})", w, h);

    for key in route_to(arena.player(), arena.target(), arena.step()) {
        arena.handle_key(key);
    }
    arena.tick(&mut surface);
    let won = format!("{OUT_DIR}/won.png");
    surface.save(&won).map_err(|e| format!("save failed: {e}"))?;
    println!(
        "wrote {won} (player at {}, status: {})",
        arena.readout().movement(),
        arena.readout().status().unwrap_or("target still alive")
    );
    Ok(())
}
