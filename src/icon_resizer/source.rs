//! # 中间数据模型
//!
//! - `RawImageData`：已读取但未解码的字节
//! - `ResizedIcon`：缩放完成、等待编码的位图

use image::DynamicImage;

/// 加载阶段输出：原始字节与来源标识。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: String,
}

/// 缩放阶段输出。
pub(crate) struct ResizedIcon {
    /// 缩放后的位图，宽高等于配置的 `target_size`。
    pub(crate) image: DynamicImage,
    pub(crate) source_width: u32,
    pub(crate) source_height: u32,
}

#[cfg(test)]
pub(crate) fn create_png_bytes(width: u32, height: u32) -> Vec<u8> {
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let r = (x % 255) as u8;
        let g = (y % 255) as u8;
        let b = ((x + y) % 255) as u8;
        Rgba([r, g, b, 255])
    });

    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("failed to encode test image");
    cursor.into_inner()
}
