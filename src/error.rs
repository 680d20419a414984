//! # 错误类型模块
//!
//! 核心库返回的全部错误。错误信息中从不包含密钥、明文或密文。

use thiserror::Error;

/// 加解密过程中的错误。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// 密钥为空。
    #[error("The secret key must not be empty")]
    InvalidKey,

    /// 明文过大，密文长度无法写入 `u32` 长度头部。
    #[error("The payload is too large to be encrypted")]
    PayloadTooLarge,

    /// 密文过短，或认证标签校验失败 (密钥错误或数据损坏)。
    #[error("Decryption failed")]
    DecryptionFailed,
}

/// `embed` 的错误。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmbedError {
    #[error("The secret key must not be empty")]
    InvalidKey,

    /// 载体图像容量不足以容纳长度头部和密文。
    #[error("Not enough space in the carrier image. Required: {required} bytes, Available: {available} bytes")]
    InsufficientCapacity { required: usize, available: usize },
}

/// `extract` 的错误。
///
/// 从未嵌入、密钥错误、数据损坏在调用方看来没有区别，统一为 `NotFound`。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    #[error("No hidden message found in the carrier image")]
    NotFound,
}

/// 警报记录在解析或校验时的错误。
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Malformed alert record")]
    Malformed(#[from] serde_json::Error),
}
