use macroquad::prelude::Conf;

pub const SCREEN_W: f32 = 960.0;
pub const SCREEN_H: f32 = 540.0;

// 顶部文字栏高度，画布在其下方居中缩放
pub const HUD_H: f32 = 48.0;

// 场地配置文件（数据驱动）
pub const LAYOUT_PATH: &str = "data/arena.json";

// 默认节拍间隔与单次按键移动距离
pub const DEFAULT_TICK_MS: u64 = 60;
pub const DEFAULT_STEP: i32 = 10;

// 掉帧后单帧最多补跑的节拍数
pub const MAX_CATCH_UP_TICKS: u32 = 3;

// 配置窗口标题、尺寸与可变大小选项
pub fn window_conf() -> Conf {
    let resizable = cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux"));
    Conf {
        window_title: "Crawler".to_string(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        high_dpi: true,
        window_resizable: resizable,
        ..Default::default()
    }
}
