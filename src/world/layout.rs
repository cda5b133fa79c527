use std::fs;
use std::time::Duration;

use log::warn;
use macroquad::prelude::Color;
use serde::Deserialize;

use crate::actors::Crawler;
use crate::config::{DEFAULT_STEP, DEFAULT_TICK_MS};
use crate::error::CrawlerError;

// 场地配置（数据驱动入口）；缺失字段取默认值
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ArenaLayout {
    pub canvas: CanvasDef,
    pub tick_ms: u64,
    pub step: i32,
    pub player: CrawlerDef,
    pub target: CrawlerDef,
}

impl Default for ArenaLayout {
    // 默认场地：左上角的玩家与右侧的目标
    fn default() -> Self {
        Self {
            canvas: CanvasDef::default(),
            tick_ms: DEFAULT_TICK_MS,
            step: DEFAULT_STEP,
            player: CrawlerDef::new(10, 10, 16, 16, "lightsteelblue"),
            target: CrawlerDef::new(200, 50, 32, 48, "#baba55"),
        }
    }
}

impl ArenaLayout {
    // 从JSON文件加载场地配置
    pub fn load_from_file(path: &str) -> Result<Self, CrawlerError> {
        let text = fs::read_to_string(path).map_err(|source| CrawlerError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    // 解析并校验配置
    pub fn from_json(text: &str) -> Result<Self, CrawlerError> {
        let layout: ArenaLayout = serde_json::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    // 加载失败时退回内置默认场地
    pub fn load_or_default(path: &str) -> Self {
        Self::load_from_file(path).unwrap_or_else(|err| {
            warn!("{err}; using built-in arena");
            Self::default()
        })
    }

    // 检查尺寸与颜色是否合法
    pub fn validate(&self) -> Result<(), CrawlerError> {
        self.canvas.background()?;
        if self.canvas.width <= 0 || self.canvas.height <= 0 {
            return Err(CrawlerError::InvalidSize {
                what: "canvas",
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        self.player.build("player")?;
        self.target.build("target")?;
        Ok(())
    }

    // 节拍间隔，至少 1 毫秒
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn canvas_size(&self) -> (i32, i32) {
        (self.canvas.width, self.canvas.height)
    }
}

// 画布尺寸与底色
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CanvasDef {
    pub width: i32,
    pub height: i32,
    pub background: String,
}

impl Default for CanvasDef {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            background: "#14141c".to_string(),
        }
    }
}

impl CanvasDef {
    pub fn background(&self) -> Result<Color, CrawlerError> {
        parse_color(&self.background)
    }
}

// 单个实体的初始位置、尺寸与颜色
#[derive(Clone, Debug, Deserialize)]
pub struct CrawlerDef {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: String,
}

impl CrawlerDef {
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: &str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        }
    }

    // 生成实体；尺寸必须为正
    pub fn build(&self, what: &'static str) -> Result<Crawler, CrawlerError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(CrawlerError::InvalidSize {
                what,
                width: self.width,
                height: self.height,
            });
        }
        let color = parse_color(&self.color)?;
        Ok(Crawler::new(self.x, self.y, self.width, self.height, color))
    }
}

// 常用的 CSS 颜色名
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("hotpink", [255, 105, 180]),
    ("lightsteelblue", [176, 196, 222]),
    ("crimson", [220, 20, 60]),
    ("gold", [255, 215, 0]),
];

// 解析颜色：#rrggbb、#rgb 或 CSS 颜色名
pub fn parse_color(token: &str) -> Result<Color, CrawlerError> {
    let invalid = || CrawlerError::InvalidColor(token.to_string());
    let token = token.trim();

    if let Some(hex) = token.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        return match hex.len() {
            6 => Ok(Color::from_rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                255,
            )),
            // #rgb 每位扩展为两位
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Color::from_rgba(short(0)?, short(1)?, short(2)?, 255))
            }
            _ => Err(invalid()),
        };
    }

    let lower = token.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, [r, g, b])| Color::from_rgba(*r, *g, *b, 255))
        .ok_or_else(invalid)
}
