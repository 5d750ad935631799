//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 先读 header 尺寸做像素上限检查，再完整解码，最后精确缩放到
//! `target_size x target_size`。不保持宽高比，非等比拉伸是预期行为。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限快速拒绝
//! 3. 完整解码
//! 4. `fast_image_resize` 卷积缩放，失败时回退 `image::resize_exact`
//! 5. 校验输出尺寸
//!
//! 解码与缩放拆成两个入口，便于编排层分别统计耗时。

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};
use std::io::Cursor;

use super::source::{RawImageData, ResizedIcon};
use super::{IconConfig, IconError, IconResizer};

impl IconResizer {
    /// 将原始字节解码为位图，解码前按 header 尺寸做像素上限检查。
    pub(crate) fn decode_source(
        &self,
        raw: &RawImageData,
        config: &IconConfig,
    ) -> Result<DynamicImage, IconError> {
        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

        log::info!(
            "✅ 图片解码成功 - 来源: {} 尺寸: {}x{} 格式: {:?}",
            raw.source_hint,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded)
    }

    /// 将位图精确缩放为 `target_size x target_size`。
    pub(crate) fn resize_to_icon(
        &self,
        decoded: DynamicImage,
        config: &IconConfig,
    ) -> Result<ResizedIcon, IconError> {
        let (source_width, source_height) = decoded.dimensions();
        let size = config.target_size;

        let image = match Self::resize_with_fast_image_resize(&decoded, size, size, config.resize_filter)
        {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                    err
                );
                Self::resize_with_image_fallback(&decoded, size, config.resize_filter)
            }
        };

        Self::ensure_icon_dimensions(&image, size)?;

        log::info!(
            "✅ 图片缩放成功 - {}x{} -> {}x{}（filter={:?}）",
            source_width,
            source_height,
            size,
            size,
            config.resize_filter
        );

        Ok(ResizedIcon {
            image,
            source_width,
            source_height,
        })
    }

    fn resize_with_image_fallback(image: &DynamicImage, size: u32, filter: FilterType) -> DynamicImage {
        image.resize_exact(size, size, filter)
    }

    /// 输出必须恰好是 `size x size`。
    fn ensure_icon_dimensions(image: &DynamicImage, size: u32) -> Result<(), IconError> {
        let (width, height) = image.dimensions();
        if (width, height) != (size, size) {
            return Err(IconError::Resize(format!(
                "缩放后尺寸异常：{}x{}（期望：{}x{}）",
                width, height, size, size
            )));
        }
        Ok(())
    }

    /// 仅通过内存中的图片头信息读取宽高。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        if reader.format().is_none() {
            return Err(IconError::InvalidFormat("无法识别图片格式".to_string()));
        }

        reader
            .into_dimensions()
            .map_err(|e| IconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(config: &IconConfig, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<DynamicImage, IconError> {
        let src = image.to_rgba8();
        let (src_width, src_height) = src.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            src.into_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
            Self::to_fast_filter(filter),
        ));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

        let rgba = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            target_width,
            target_height,
            dst_image.into_vec(),
        )
        .ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))?;

        Ok(DynamicImage::ImageRgba8(rgba))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}
