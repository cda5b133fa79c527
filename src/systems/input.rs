use log::debug;
use macroquad::prelude::KeyCode;

use crate::actors::Crawler;

// 四个移动方向
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // 方向对应的单位位移（画布原点在左上角，y 向下增长）
    pub fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

// 按键映射：WASD 与方向键各自对应同一方向，其余按键无效
pub fn direction_for(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::W | KeyCode::Up => Some(Direction::Up),
        KeyCode::S | KeyCode::Down => Some(Direction::Down),
        KeyCode::A | KeyCode::Left => Some(Direction::Left),
        KeyCode::D | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

// 按键对应的位移量
pub fn delta_for(key: KeyCode, step: i32) -> Option<(i32, i32)> {
    direction_for(key).map(|dir| {
        let (ux, uy) = dir.unit();
        (ux * step, uy * step)
    })
}

// 处理一次按键：识别的按键移动玩家并返回 true
pub fn apply_key(player: &mut Crawler, key: KeyCode, step: i32) -> bool {
    let Some((dx, dy)) = delta_for(key, step) else {
        return false;
    };
    player.shift(dx, dy);
    debug!("{key:?} moved player to ({}, {})", player.x, player.y);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::BLUE;

    fn player() -> Crawler {
        Crawler::new(10, 10, 16, 16, BLUE)
    }

    fn moved_by(key: KeyCode) -> (i32, i32) {
        let mut p = player();
        apply_key(&mut p, key, 10);
        (p.x - 10, p.y - 10)
    }

    #[test]
    fn letter_and_arrow_bindings_agree() {
        let pairs = [
            (KeyCode::W, KeyCode::Up, (0, -10)),
            (KeyCode::S, KeyCode::Down, (0, 10)),
            (KeyCode::A, KeyCode::Left, (-10, 0)),
            (KeyCode::D, KeyCode::Right, (10, 0)),
        ];
        for (letter, arrow, expected) in pairs {
            assert_eq!(moved_by(letter), expected, "{letter:?}");
            assert_eq!(moved_by(arrow), expected, "{arrow:?}");
        }
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        for key in [KeyCode::E, KeyCode::Space, KeyCode::Enter, KeyCode::Key1] {
            let mut p = player();
            assert!(!apply_key(&mut p, key, 10));
            assert_eq!((p.x, p.y), (10, 10));
        }
    }

    #[test]
    fn moving_left_is_unbounded() {
        let mut p = player();
        for _ in 0..10 {
            assert!(apply_key(&mut p, KeyCode::A, 10));
        }
        assert_eq!((p.x, p.y), (-90, 10));
    }
}
