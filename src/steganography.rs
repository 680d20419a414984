//! # 隐写核心模块
//!
//! 把密文写入载体图像各通道字节的最低有效位，或从中读出。
//!
//! 线上格式：
//!
//! * 先写 4 字节大端长度头部，再写密文本身。
//! * 每个字节从最高位到最低位依次写出，一个通道字节保存 1 bit。
//! * 按行优先遍历像素，像素内部按 R、G、B、(A) 顺序遍历通道。
//! * 只替换最低位，其余 7 bit 保持不变；负载之后的通道字节不做任何修改。
//!
//! 结果图像必须以无损格式 (PNG) 保存，有损压缩会破坏隐藏的数据。

use crate::carrier::CarrierImage;
use crate::cipher;
use crate::constants::{HEADER_BITS, HEADER_LEN};
use crate::error::{CipherError, EmbedError, ExtractError};
use log::{debug, trace};

/// 将 `bytes` 的每一位 (高位在前) 写入 `pix` 中对应通道字节的最低位。
///
/// 调用方保证 `pix` 至少有 `bytes.len() * 8` 个字节。
fn conceal(bytes: &[u8], pix: &mut [u8]) {
    let bits = bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1));

    for (channel, bit) in pix.iter_mut().zip(bits) {
        *channel = (*channel & 0xFE) | bit;
    }
}

/// 从 `pix` 的最低位中读出 `len` 个字节，高位在前。
fn unveil(pix: &[u8], len: usize) -> Vec<u8> {
    pix.chunks_exact(8)
        .take(len)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &channel| (acc << 1) | (channel & 1)))
        .collect()
}

/// 把密文写入载体图像的一份副本。
///
/// # Errors
///
/// 当 `capacity < 4 + ciphertext.len()` 时返回 `InsufficientCapacity`，
/// 此时输入图像保持不变。
pub fn write(ciphertext: &[u8], carrier: &CarrierImage) -> Result<CarrierImage, EmbedError> {
    let available = carrier.capacity();
    let required = HEADER_LEN.saturating_add(ciphertext.len());
    let insufficient = EmbedError::InsufficientCapacity {
        required,
        available,
    };

    let header = u32::try_from(ciphertext.len())
        .map_err(|_| insufficient)?
        .to_be_bytes();

    if available < required {
        return Err(insufficient);
    }

    let mut doctored = carrier.clone();
    let (header_pix, body_pix) = doctored.as_bytes_mut().split_at_mut(HEADER_BITS);
    conceal(&header, header_pix);
    conceal(ciphertext, body_pix);

    trace!(
        "wrote {} channel bytes of {}",
        required * 8,
        carrier.as_bytes().len()
    );
    Ok(doctored)
}

/// 从载体图像中读出密文。
///
/// # Errors
///
/// 图像容量不足以容纳长度头部，或头部给出的长度为 0 或超出剩余容量时返回 `NotFound`。
pub fn read(carrier: &CarrierImage) -> Result<Vec<u8>, ExtractError> {
    let capacity = carrier.capacity();
    if capacity < HEADER_LEN {
        return Err(ExtractError::NotFound);
    }

    let (header_pix, body_pix) = carrier.as_bytes().split_at(HEADER_BITS);
    let header: [u8; HEADER_LEN] = unveil(header_pix, HEADER_LEN)
        .try_into()
        .map_err(|_| ExtractError::NotFound)?;

    let len = u32::from_be_bytes(header) as usize;
    if len == 0 || len > capacity - HEADER_LEN {
        trace!("length header {len} out of range for capacity {capacity}");
        return Err(ExtractError::NotFound);
    }

    Ok(unveil(body_pix, len))
}

/// 加密载荷并嵌入载体图像，返回新的图像。
///
/// 输入图像不会被修改，尺寸和通道布局保持不变。
///
/// # Errors
///
/// * `InvalidKey` - 密钥为空。
/// * `InsufficientCapacity` - 图像容量不足。
pub fn embed(
    payload: &[u8],
    key: &[u8],
    carrier: &CarrierImage,
) -> Result<CarrierImage, EmbedError> {
    debug!(
        "embedding {} payload bytes into {}x{} carrier (capacity {} bytes)",
        payload.len(),
        carrier.width(),
        carrier.height(),
        carrier.capacity()
    );

    let ciphertext = cipher::encrypt(payload, key).map_err(|err| match err {
        CipherError::InvalidKey => EmbedError::InvalidKey,
        CipherError::PayloadTooLarge | CipherError::DecryptionFailed => {
            EmbedError::InsufficientCapacity {
                required: HEADER_LEN.saturating_add(cipher::ciphertext_len(payload.len())),
                available: carrier.capacity(),
            }
        }
    })?;

    write(&ciphertext, carrier)
}

/// 从载体图像中提取并解密载荷。
///
/// # Errors
///
/// 未嵌入数据、密钥错误或数据损坏时统一返回 `NotFound`。
pub fn extract(key: &[u8], carrier: &CarrierImage) -> Result<Vec<u8>, ExtractError> {
    let ciphertext = read(carrier)?;
    debug!(
        "read {} ciphertext bytes from {}x{} carrier",
        ciphertext.len(),
        carrier.width(),
        carrier.height()
    );

    cipher::decrypt(&ciphertext, key).map_err(|_| ExtractError::NotFound)
}
