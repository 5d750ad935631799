//! # 错误模型模块
//!
//! 单一错误枚举覆盖“读取失败”和“写入失败”两类来源，不做恢复与重试，
//! 由 `main` 记录日志后以失败码退出。

/// 图标生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("写入错误：{0}")]
    Write(String),
}
