use log::info;
use macroquad::prelude::KeyCode;

use crate::actors::Crawler;
use crate::error::CrawlerError;
use crate::model::{Phase, Readout};
use crate::render::draw_frame;
use crate::render::surface::Surface;
use crate::systems::{apply_key, detect_hit};

use self::layout::ArenaLayout;

pub mod layout;

// 场地状态：玩家、目标与文字输出，由按键回调与节拍驱动
pub struct Arena {
    player: Crawler,
    target: Crawler,
    step: i32,
    readout: Readout,
}

impl Arena {
    pub fn new(player: Crawler, target: Crawler, step: i32) -> Self {
        Self {
            player,
            target,
            step,
            readout: Readout::default(),
        }
    }

    // 按配置创建场地
    pub fn from_layout(layout: &ArenaLayout) -> Result<Self, CrawlerError> {
        let player = layout.player.build("player")?;
        let target = layout.target.build("target")?;
        info!(
            "arena ready: player at ({}, {}), target at ({}, {})",
            player.x, player.y, target.x, target.y
        );
        Ok(Self::new(player, target, layout.step))
    }

    pub fn player(&self) -> &Crawler {
        &self.player
    }

    pub fn target(&self) -> &Crawler {
        &self.target
    }

    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    // 当前回合状态，由目标存活标记决定
    pub fn phase(&self) -> Phase {
        if self.target.alive {
            Phase::TargetAlive
        } else {
            Phase::TargetDead
        }
    }

    // 按键回调：立即移动玩家，不等待节拍
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        apply_key(&mut self.player, key, self.step)
    }

    // 单个节拍：目标存活时先做命中检测，再重绘整帧
    // 胜利后继续运行，只绘制玩家
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        if self.phase() == Phase::TargetAlive {
            detect_hit(&self.player, &mut self.target, &mut self.readout);
        }
        draw_frame(surface, &self.player, &self.target, &mut self.readout);
    }
}
