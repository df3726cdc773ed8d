//! 窗口配置常量测试

use crate::config::*;
use crate::geometry::Size;

#[test]
fn test_shipped_values() {
    assert_eq!(WINDOW_CONFIG.width, 1200);
    assert_eq!(WINDOW_CONFIG.height, 900);
    assert_eq!(WINDOW_CONFIG.min_width, 1200);
    assert_eq!(WINDOW_CONFIG.min_height, 900);
    assert_eq!(WINDOW_CONFIG.max_width, 1920);
    assert_eq!(WINDOW_CONFIG.max_height, 1080);
    assert_eq!(WINDOW_CONFIG.title, "KFU AI Assistant");
    assert!(WINDOW_CONFIG.resizable);
    assert!(WINDOW_CONFIG.center_on_screen);
}

#[test]
fn test_size_within_bounds() {
    let c = WINDOW_CONFIG;
    assert!(c.min_width <= c.width && c.width <= c.max_width);
    assert!(c.min_height <= c.height && c.height <= c.max_height);
    assert!(c.is_valid());
}

#[test]
fn test_positive_and_titled() {
    let c = WINDOW_CONFIG;
    for v in [c.width, c.height, c.min_width, c.min_height, c.max_width, c.max_height] {
        assert!(v > 0);
    }
    assert!(!c.title.is_empty());
}

#[test]
fn test_rereading_is_stable() {
    let first = WINDOW_CONFIG;
    let second = WINDOW_CONFIG;
    assert_eq!(first, second);
    assert_eq!(WindowConfig::default(), first);
}

/// 违反 min/max 约束的配置应判定为无效
#[test]
fn test_invalid_geometry_detected() {
    let too_small = WindowConfig { width: 800, ..WINDOW_CONFIG };
    assert!(!too_small.is_valid());

    let too_tall = WindowConfig { height: 1200, ..WINDOW_CONFIG };
    assert!(!too_tall.is_valid());

    let untitled = WindowConfig { title: "", ..WINDOW_CONFIG };
    assert!(!untitled.is_valid());
}

#[test]
fn test_size_accessors() {
    assert_eq!(WINDOW_CONFIG.size(), Size::new(1200, 900));
    assert_eq!(WINDOW_CONFIG.min_size(), Size::new(1200, 900));
    assert_eq!(WINDOW_CONFIG.max_size(), Size::new(1920, 1080));
}

#[test]
fn test_clamp_size() {
    let c = WINDOW_CONFIG;
    assert_eq!(c.clamp_size(Size::new(640, 480)), Size::new(1200, 900));
    assert_eq!(c.clamp_size(Size::new(2560, 1440)), Size::new(1920, 1080));
    assert_eq!(c.clamp_size(Size::new(1600, 1000)), Size::new(1600, 1000));
}

#[test]
fn test_json_uses_camel_case() {
    let json = WINDOW_CONFIG.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["minWidth"], 1200);
    assert_eq!(value["maxHeight"], 1080);
    assert_eq!(value["centerOnScreen"], true);
    assert_eq!(value["title"], "KFU AI Assistant");
}

/// min > max 时不 panic，结果以 max 为准
#[test]
fn test_clamp_size_inverted_bounds() {
    let inverted = WindowConfig { min_width: 1920, max_width: 1200, min_height: 1080, max_height: 900, ..WINDOW_CONFIG };
    assert!(!inverted.is_valid());
    assert_eq!(inverted.clamp_size(Size::new(1600, 1000)), Size::new(1200, 900));
    assert_eq!(inverted.clamp_size(Size::new(100, 100)), Size::new(1200, 900));
}
