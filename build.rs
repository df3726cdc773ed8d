//! 生成 C 头文件 kfu_window.h
//!
//! 总是写到 `OUT_DIR`；设置了 `KFU_WINDOW_INCLUDE_DIR` 时再复制一份到该目录，
//! 供原生工程固定引用（例如 `KFU_WINDOW_INCLUDE_DIR=windows/runner cargo build`）。

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/ffi.rs");
    println!("cargo:rerun-if-changed=src/config.rs");
    println!("cargo:rerun-if-env-changed=KFU_WINDOW_INCLUDE_DIR");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let mut config = cbindgen::Config::default();
    config.language = cbindgen::Language::C;
    config.include_guard = Some("KFU_WINDOW_H_".to_string());
    config.cpp_compat = true;

    // 头文件生成失败不影响 Rust 侧编译
    let bindings = match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
    {
        Ok(bindings) => bindings,
        Err(e) => {
            println!("cargo:warning=cbindgen failed: {}", e);
            return;
        }
    };

    let header = out_dir.join("kfu_window.h");
    bindings.write_to_file(&header);
    if !header.exists() {
        println!("cargo:warning=failed to write {}", header.display());
        return;
    }

    if let Ok(dir) = env::var("KFU_WINDOW_INCLUDE_DIR") {
        let dir = PathBuf::from(crate_dir).join(dir);
        let target = dir.join("kfu_window.h");
        let copied = fs::create_dir_all(&dir).and_then(|_| fs::copy(&header, &target));
        if let Err(e) = copied {
            println!("cargo:warning=failed to copy header to {}: {}", target.display(), e);
        }
    }
}
