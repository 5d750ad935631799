//! # AppIcon 生成工具 — 应用入口
//!
//! 无命令行参数，所有路径见 `icon_resizer::config` 中的常量。
//! 成功时在 stdout 输出 `Saved <path>`，失败时记录错误并以失败码退出。

use std::process::ExitCode;

use resize_icon::icon_resizer::{IconConfig, IconResizer};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let resizer = IconResizer::new(IconConfig::default());
    match resizer.process() {
        Ok(saved) => {
            println!("Saved {}", saved.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("图标生成失败: {err}");
            ExitCode::FAILURE
        }
    }
}
