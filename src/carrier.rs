//! # 载体图像模块
//!
//! 每通道 8 bit 的 RGB 或 RGBA 光栅图像。
//! 底层缓冲区按行优先排列，像素内部按 R、G、B、(A) 顺序存放，
//! 这正是隐写时遍历通道字节的顺序。

use image::{DynamicImage, ImageFormat, ImageResult, RgbImage, RgbaImage};
use std::path::Path;

/// 用于隐藏载荷的载体图像。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarrierImage {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl CarrierImage {
    pub fn width(&self) -> u32 {
        match self {
            Self::Rgb(buf) => buf.width(),
            Self::Rgba(buf) => buf.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Rgb(buf) => buf.height(),
            Self::Rgba(buf) => buf.height(),
        }
    }

    /// 每个像素的通道数：3 或 4。
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgb(_) => 3,
            Self::Rgba(_) => 4,
        }
    }

    /// 可嵌入的字节数：`(width × height × channels) / 8`。
    ///
    /// 每次根据当前尺寸重新计算，不做缓存。
    pub fn capacity(&self) -> usize {
        self.width() as usize * self.height() as usize * self.channels() / 8
    }

    /// 按遍历顺序排列的全部通道字节。
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Rgb(buf) => buf.as_raw(),
            Self::Rgba(buf) => buf.as_raw(),
        }
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Rgb(buf) => &mut **buf,
            Self::Rgba(buf) => &mut **buf,
        }
    }

    /// 以 PNG 格式保存图像。
    ///
    /// 隐藏的数据只能在无损编码下存活，所以无论路径扩展名是什么，这里都只写 PNG。
    pub fn save_png(&self, path: &Path) -> ImageResult<()> {
        match self {
            Self::Rgb(buf) => buf.save_with_format(path, ImageFormat::Png),
            Self::Rgba(buf) => buf.save_with_format(path, ImageFormat::Png),
        }
    }
}

impl From<DynamicImage> for CarrierImage {
    /// 将解码后的任意图像转换为 8 bit 载体：带 alpha 的转换为 RGBA，其余转换为 RGB。
    fn from(image: DynamicImage) -> Self {
        match image {
            DynamicImage::ImageRgb8(buf) => Self::Rgb(buf),
            DynamicImage::ImageRgba8(buf) => Self::Rgba(buf),
            other if other.color().has_alpha() => Self::Rgba(other.to_rgba8()),
            other => Self::Rgb(other.to_rgb8()),
        }
    }
}

impl From<RgbImage> for CarrierImage {
    fn from(buf: RgbImage) -> Self {
        Self::Rgb(buf)
    }
}

impl From<RgbaImage> for CarrierImage {
    fn from(buf: RgbaImage) -> Self {
        Self::Rgba(buf)
    }
}

impl From<CarrierImage> for DynamicImage {
    fn from(carrier: CarrierImage) -> Self {
        match carrier {
            CarrierImage::Rgb(buf) => DynamicImage::ImageRgb8(buf),
            CarrierImage::Rgba(buf) => DynamicImage::ImageRgba8(buf),
        }
    }
}
