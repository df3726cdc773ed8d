//! 几何计算测试

use crate::geometry::{Point, Rect, Size};
use crate::color::{Color, BACKGROUND};

#[test]
fn test_center_in_full_hd() {
    let monitor = Rect::new(0, 0, 1920, 1080);
    assert_eq!(monitor.center(Size::new(1200, 900)), Point::new(360, 90));
}

/// 副显示器在主显示器左侧（负坐标）
#[test]
fn test_center_on_offset_monitor() {
    let monitor = Rect::new(-1920, 0, 1920, 1080);
    assert_eq!(monitor.center(Size::new(1200, 900)), Point::new(-1560, 90));
}

/// 放不下时贴住显示器左上角
#[test]
fn test_center_larger_than_monitor() {
    let monitor = Rect::new(100, 50, 1024, 768);
    assert_eq!(monitor.center(Size::new(1200, 900)), Point::new(100, 50));

    // 只有高度放不下
    let wide = Rect::new(0, 0, 2560, 768);
    assert_eq!(wide.center(Size::new(1200, 900)), Point::new(680, 0));
}

#[test]
fn test_scale() {
    assert_eq!(Size::new(1200, 900).scale(1.0), Size::new(1200, 900));
    assert_eq!(Size::new(1200, 900).scale(1.5), Size::new(1800, 1350));
    assert_eq!(Size::new(1200, 900).scale(1.25), Size::new(1500, 1125));
}

#[test]
fn test_rect_accessors() {
    let r = Rect::new(10, 20, 300, 400);
    assert_eq!(r.origin(), Point::new(10, 20));
    assert_eq!(r.size(), Size::new(300, 400));
}

#[test]
fn test_color_pixel() {
    assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_pixel(), 0x123456);
    assert_eq!(Color::from_hex(0xF5F5F5), BACKGROUND);
    assert_eq!(Color::default().to_pixel(), 0xFFFFFF);
}
