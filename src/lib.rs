//! # AppIcon 生成工具 — 库入口
//!
//! 读取固定路径下的源 logo，使用 Lanczos3 缩放到 1024x1024，
//! 以 PNG 格式写入 Xcode 的 `AppIcon.appiconset/AppIcon.png`。
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`icon_resizer`] | 读取 → 解码 → 缩放 → 编码 → 写入 的完整流水线 |

pub mod icon_resizer;
