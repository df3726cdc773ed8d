//! KFU AI Assistant 窗口配置
//! 窗口尺寸、标题等常量，以及供 winit 与原生代码使用的接口

pub mod color;
pub mod config;
pub mod geometry;

pub use color::Color;
pub use config::{WindowConfig, WINDOW_CONFIG};
pub use geometry::{Point, Rect, Size};

// winit 窗口属性
pub mod window;

// FFI 导出
mod ffi;
pub use ffi::*;

// 单元测试
#[cfg(test)]
mod tests;
