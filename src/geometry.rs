//! 几何图形模块

/// 屏幕坐标点（物理像素，可为负：副显示器可能位于主显示器左侧或上方）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 尺寸
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 逻辑像素 -> 物理像素
    pub fn scale(&self, factor: f64) -> Size {
        Size {
            width: (self.width as f64 * factor).round() as u32,
            height: (self.height as f64 * factor).round() as u32,
        }
    }
}

/// 矩形
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// 让 `size` 在矩形内居中时的左上角坐标。
    /// 某一方向放不下时贴住该方向的起始边。
    pub fn center(&self, size: Size) -> Point {
        let dx = self.width.saturating_sub(size.width) / 2;
        let dy = self.height.saturating_sub(size.height) / 2;
        Point::new(
            self.x.saturating_add(dx as i32),
            self.y.saturating_add(dy as i32),
        )
    }
}
