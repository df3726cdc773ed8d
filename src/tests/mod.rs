//! 单元测试模块
//! 覆盖窗口配置、几何计算、winit 属性和 FFI 导出

pub mod config_tests;
pub mod geometry_tests;
