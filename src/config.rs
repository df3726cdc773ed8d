//! 窗口配置常量
//!
//! 原生窗口创建代码在启动时读取一次，之后不再修改。

use serde::Serialize;

use crate::geometry::Size;

// 窗口尺寸
pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 900;

// 最小 / 最大尺寸
pub const MIN_WIDTH: u32 = 1200;
pub const MIN_HEIGHT: u32 = 900;
pub const MAX_WIDTH: u32 = 1920;
pub const MAX_HEIGHT: u32 = 1080;

/// 窗口标题
pub const WINDOW_TITLE: &str = "KFU AI Assistant";

pub const RESIZABLE: bool = true;
pub const CENTER_ON_SCREEN: bool = true;

/// 窗口配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub title: &'static str,
    pub resizable: bool,
    pub center_on_screen: bool,
}

/// 应用使用的窗口配置
pub const WINDOW_CONFIG: WindowConfig = WindowConfig {
    width: WINDOW_WIDTH,
    height: WINDOW_HEIGHT,
    min_width: MIN_WIDTH,
    min_height: MIN_HEIGHT,
    max_width: MAX_WIDTH,
    max_height: MAX_HEIGHT,
    title: WINDOW_TITLE,
    resizable: RESIZABLE,
    center_on_screen: CENTER_ON_SCREEN,
};

// 编译期检查：min <= size <= max
const _: () = assert!(WINDOW_CONFIG.is_valid(), "invalid window geometry");

impl WindowConfig {
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub const fn max_size(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// 所有尺寸为正、标题非空，且初始尺寸落在 min/max 范围内
    pub const fn is_valid(&self) -> bool {
        self.min_width > 0
            && self.min_height > 0
            && self.min_width <= self.width
            && self.width <= self.max_width
            && self.min_height <= self.height
            && self.height <= self.max_height
            && !self.title.is_empty()
    }

    /// 把任意尺寸限制到 min/max 之间；min > max 时以 max 为准，不会 panic
    pub fn clamp_size(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_width).min(self.max_width),
            size.height.max(self.min_height).min(self.max_height),
        )
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize window config: {}", e))
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WINDOW_CONFIG
    }
}
