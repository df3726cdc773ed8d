//! 窗口管理 - 把 WindowConfig 转成 winit 的窗口属性

use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::monitor::MonitorHandle;
use winit::window::{Window, WindowAttributes};

use crate::config::WindowConfig;
use crate::geometry::{Point, Rect, Size};

/// 显示器区域（物理像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorArea {
    pub bounds: Rect,
    pub scale_factor: f64,
}

impl MonitorArea {
    pub fn new(bounds: Rect, scale_factor: f64) -> Self {
        Self { bounds, scale_factor }
    }

    pub fn from_handle(monitor: &MonitorHandle) -> Self {
        let position = monitor.position();
        let size = monitor.size();
        Self {
            bounds: Rect::new(position.x, position.y, size.width, size.height),
            scale_factor: monitor.scale_factor(),
        }
    }
}

/// 根据配置生成窗口属性（尺寸均为逻辑像素）
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(config.title)
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_min_inner_size(LogicalSize::new(config.min_width, config.min_height))
        .with_max_inner_size(LogicalSize::new(config.max_width, config.max_height))
        .with_resizable(config.resizable)
}

/// 计算窗口在显示器上居中时的位置，未开启居中时返回 None
pub fn centered_position(config: &WindowConfig, monitor: &MonitorArea) -> Option<PhysicalPosition<i32>> {
    if !config.center_on_screen {
        return None;
    }

    let physical = config.size().scale(monitor.scale_factor);
    let Point { x, y } = monitor.bounds.center(physical);
    log::debug!(
        "centering {}x{} window on monitor {:?} (scale {})",
        physical.width, physical.height, monitor.bounds, monitor.scale_factor
    );
    Some(PhysicalPosition::new(x, y))
}

/// 按外框（含边框和标题栏）尺寸居中，`outer` 为物理像素。
/// `with_position` / `set_outer_position` 定位的是外框左上角。
pub fn centered_outer_position(
    config: &WindowConfig,
    monitor: &MonitorArea,
    outer: Size,
) -> Option<PhysicalPosition<i32>> {
    if !config.center_on_screen {
        return None;
    }

    let Point { x, y } = monitor.bounds.center(outer);
    Some(PhysicalPosition::new(x, y))
}

/// 窗口创建后用实际外框尺寸重新居中
pub fn center_window(config: &WindowConfig, window: &Window, monitor: &MonitorArea) {
    let outer = window.outer_size();
    let outer = Size::new(outer.width, outer.height);
    if let Some(position) = centered_outer_position(config, monitor, outer) {
        log::debug!("re-centering outer frame {}x{} at {:?}", outer.width, outer.height, position);
        window.set_outer_position(position);
    }
}

/// 窗口属性 + 初始位置（按客户区估算，创建后由 `center_window` 修正）；
/// 没有可用显示器时交给系统决定位置
pub fn attributes_for_monitor(config: &WindowConfig, monitor: Option<&MonitorArea>) -> WindowAttributes {
    let attrs = window_attributes(config);
    match monitor.and_then(|m| centered_position(config, m)) {
        Some(position) => attrs.with_position(position),
        None => attrs,
    }
}
