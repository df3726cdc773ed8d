//! FFI 接口 - 供原生（C/C++）窗口创建代码读取窗口配置
//!
//! 头文件由 build.rs 通过 cbindgen 生成（`kfu_window.h`）。

use once_cell::sync::Lazy;
use std::ffi::CString;
use std::os::raw::c_char;

use crate::config::WINDOW_CONFIG;

/// C 侧使用的窗口配置（标题通过单独的函数获取）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KfuWindowConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub resizable: bool,
    pub center_on_screen: bool,
}

static TITLE_UTF8: Lazy<CString> = Lazy::new(|| encode_utf8(WINDOW_CONFIG.title));

// Windows 上 wchar_t 为 UTF-16
static TITLE_WIDE: Lazy<Vec<u16>> = Lazy::new(|| encode_wide(WINDOW_CONFIG.title));

/// UTF-8 C 字符串；内部含 NUL 时截到第一个 NUL 之前
pub(crate) fn encode_utf8(s: &str) -> CString {
    let end = s.find('\0').unwrap_or(s.len());
    CString::new(&s[..end]).unwrap_or_default()
}

/// UTF-16 编码并追加 NUL
pub(crate) fn encode_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// 把 UTF-16 码元复制到 `out`（容量含 NUL）。
/// `src` 不含 NUL；截断时不会拆开代理对。返回写入的码元数（不含 NUL）。
pub(crate) fn copy_wide(src: &[u16], out: &mut [u16]) -> usize {
    if out.is_empty() {
        return 0;
    }
    let mut copy_len = src.len().min(out.len() - 1);
    // 末尾是高代理项说明低代理项被截掉了
    if copy_len > 0 && copy_len < src.len() && (0xD800..=0xDBFF).contains(&src[copy_len - 1]) {
        copy_len -= 1;
    }
    out[..copy_len].copy_from_slice(&src[..copy_len]);
    out[copy_len] = 0;
    copy_len
}

/// 获取全部数值配置
#[no_mangle]
pub extern "C" fn kfu_window_config() -> KfuWindowConfig {
    KfuWindowConfig {
        width: WINDOW_CONFIG.width,
        height: WINDOW_CONFIG.height,
        min_width: WINDOW_CONFIG.min_width,
        min_height: WINDOW_CONFIG.min_height,
        max_width: WINDOW_CONFIG.max_width,
        max_height: WINDOW_CONFIG.max_height,
        resizable: WINDOW_CONFIG.resizable,
        center_on_screen: WINDOW_CONFIG.center_on_screen,
    }
}

#[no_mangle]
pub extern "C" fn kfu_window_width() -> u32 {
    WINDOW_CONFIG.width
}

#[no_mangle]
pub extern "C" fn kfu_window_height() -> u32 {
    WINDOW_CONFIG.height
}

#[no_mangle]
pub extern "C" fn kfu_window_min_width() -> u32 {
    WINDOW_CONFIG.min_width
}

#[no_mangle]
pub extern "C" fn kfu_window_min_height() -> u32 {
    WINDOW_CONFIG.min_height
}

#[no_mangle]
pub extern "C" fn kfu_window_max_width() -> u32 {
    WINDOW_CONFIG.max_width
}

#[no_mangle]
pub extern "C" fn kfu_window_max_height() -> u32 {
    WINDOW_CONFIG.max_height
}

#[no_mangle]
pub extern "C" fn kfu_window_resizable() -> bool {
    WINDOW_CONFIG.resizable
}

#[no_mangle]
pub extern "C" fn kfu_window_center_on_screen() -> bool {
    WINDOW_CONFIG.center_on_screen
}

/// 窗口标题（UTF-8，以 NUL 结尾，进程内一直有效，调用方不要释放）
#[no_mangle]
pub extern "C" fn kfu_window_title() -> *const c_char {
    TITLE_UTF8.as_ptr()
}

/// 窗口标题（UTF-16，以 NUL 结尾，进程内一直有效，调用方不要释放）
#[no_mangle]
pub extern "C" fn kfu_window_title_wide() -> *const u16 {
    TITLE_WIDE.as_ptr()
}

/// 把 UTF-16 标题复制到调用方缓冲区。
/// 只要 `len > 0` 结果总以 NUL 结尾；返回写入的码元数（不含 NUL）。
/// `out` 必须指向至少 `len` 个可写的 u16。
#[no_mangle]
pub extern "C" fn kfu_window_title_wide_copy(out: *mut u16, len: usize) -> usize {
    if out.is_null() || len == 0 {
        return 0;
    }
    // TITLE_WIDE 末尾带 NUL
    let units = &TITLE_WIDE[..TITLE_WIDE.len() - 1];
    let out = unsafe { std::slice::from_raw_parts_mut(out, len) };
    copy_wide(units, out)
}
