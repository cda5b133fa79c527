use crawler::config::{window_conf, LAYOUT_PATH};
use crawler::world::layout::ArenaLayout;
use crawler::{app, logging};
use log::error;

#[macroquad::main(window_conf)]
// 程序入口：初始化日志与窗口配置并启动游戏主循环
async fn main() {
    logging::init();
    let layout = ArenaLayout::load_or_default(LAYOUT_PATH);
    if let Err(err) = app::run(layout).await {
        error!("{err}");
        std::process::exit(1);
    }
}
