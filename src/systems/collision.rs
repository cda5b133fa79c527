use log::info;

use crate::actors::{Bounds, Crawler};
use crate::model::Readout;

// 轴对齐包围盒相交判定；边缘相接不算相交
pub fn overlaps(a: Bounds, b: Bounds) -> bool {
    let (ax, ay, aw, ah) = widen(a);
    let (bx, by, bw, bh) = widen(b);
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

// 提升到 i64，避免坐标极端时溢出
fn widen(r: Bounds) -> (i64, i64, i64, i64) {
    (
        i64::from(r.x),
        i64::from(r.y),
        i64::from(r.width),
        i64::from(r.height),
    )
}

// 命中检测：目标存活且与玩家相交时标记死亡并发布胜利提示
// 目标死亡后再次调用不会产生任何变化
pub fn detect_hit(player: &Crawler, target: &mut Crawler, readout: &mut Readout) -> bool {
    if !target.alive {
        return false;
    }
    if !overlaps(player.bounds(), target.bounds()) {
        return false;
    }
    target.alive = false;
    if readout.announce_win() {
        info!("target hit at ({}, {})", player.x, player.y);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{BLUE, GREEN};

    fn rect(x: i32, y: i32, width: i32, height: i32) -> Bounds {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn overlap_is_symmetric() {
        let target = rect(200, 50, 32, 48);
        for x in (150..260).step_by(7) {
            for y in (0..120).step_by(9) {
                let player = rect(x, y, 16, 16);
                assert_eq!(overlaps(player, target), overlaps(target, player));
            }
        }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let target = rect(200, 50, 32, 48);
        assert!(!overlaps(rect(184, 50, 16, 16), target));
        assert!(!overlaps(rect(232, 50, 16, 16), target));
        assert!(!overlaps(rect(200, 34, 16, 16), target));
        assert!(!overlaps(rect(200, 98, 16, 16), target));
        assert!(overlaps(rect(185, 35, 16, 16), target));
    }

    #[test]
    fn starting_positions_do_not_overlap() {
        assert!(!overlaps(rect(10, 10, 16, 16), rect(200, 50, 32, 48)));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let far = rect(i32::MAX, i32::MAX, 16, 16);
        assert!(!overlaps(far, rect(0, 0, 16, 16)));
        assert!(overlaps(far, far));
    }

    #[test]
    fn hit_latches_and_announces_once() {
        let player = Crawler::new(200, 50, 16, 16, BLUE);
        let mut target = Crawler::new(200, 50, 32, 48, GREEN);
        let mut readout = Readout::default();

        assert!(detect_hit(&player, &mut target, &mut readout));
        assert!(!target.alive);
        assert_eq!(readout.status(), Some("You win!"));

        assert!(!detect_hit(&player, &mut target, &mut readout));
        assert!(!target.alive);
        assert_eq!(readout.status(), Some("You win!"));
    }

    #[test]
    fn miss_leaves_target_alive() {
        let player = Crawler::new(10, 10, 16, 16, BLUE);
        let mut target = Crawler::new(200, 50, 32, 48, GREEN);
        let mut readout = Readout::default();

        assert!(!detect_hit(&player, &mut target, &mut readout));
        assert!(target.alive);
        assert_eq!(readout.status(), None);
    }
}
