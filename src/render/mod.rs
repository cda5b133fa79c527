use crate::actors::Crawler;
use crate::model::Readout;

pub mod raster;
pub mod surface;

use self::surface::Surface;

// 绘制一帧：清空整块画布，刷新坐标显示，先画玩家，目标存活时再画目标
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    player: &Crawler,
    target: &Crawler,
    readout: &mut Readout,
) {
    let (width, height) = surface.size();
    surface.clear_rect(0, 0, width, height);
    readout.set_position(player.x, player.y);
    player.render(surface);
    if target.alive {
        target.render(surface);
    }
}
