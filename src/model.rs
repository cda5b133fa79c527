// 胜利提示文本
pub const WIN_MESSAGE: &str = "You win!";

// 回合状态：目标存活 -> 目标被击中（单向，不可回退）
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    TargetAlive,
    TargetDead,
}

// 文字输出：玩家坐标（每个节拍刷新）与一次性的状态提示
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Readout {
    movement: String,
    status: Option<&'static str>,
}

impl Readout {
    pub fn movement(&self) -> &str {
        &self.movement
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    // 刷新坐标显示，格式为 "x, y"
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.movement = format!("{x}, {y}");
    }

    // 发布胜利提示；已发布过则返回 false
    pub fn announce_win(&mut self) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(WIN_MESSAGE);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_formatted_as_pair() {
        let mut readout = Readout::default();
        readout.set_position(-90, 10);
        assert_eq!(readout.movement(), "-90, 10");
    }

    #[test]
    fn win_is_announced_once() {
        let mut readout = Readout::default();
        assert_eq!(readout.status(), None);
        assert!(readout.announce_win());
        assert!(!readout.announce_win());
        assert_eq!(readout.status(), Some("You win!"));
    }
}
