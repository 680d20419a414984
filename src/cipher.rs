//! # 加密模块
//!
//! 使用 AES-256-GCM 对载荷进行认证加密。
//!
//! 密文布局为 `nonce (12 字节) || 加密数据 || 认证标签 (16 字节)`。
//! nonce 每次调用随机生成并放在最前面，解密只需要密文本身和密钥。
//! 原始密钥经 SHA-256 拉伸为 32 字节的 AES 密钥，嵌入与提取两端完全一致。

use crate::constants::{CIPHER_OVERHEAD, HEADER_LEN, KEY_DERIVATION_SALT, NONCE_LEN};
use crate::error::CipherError;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::Aes256Gcm;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// 密文长度必须能写入 `u32` 长度头部，明文上限随之确定。
const MAX_PLAINTEXT_LEN: usize = u32::MAX as usize - CIPHER_OVERHEAD - HEADER_LEN;

/// 将任意长度的密钥派生为 AES-256 所需的 32 字节密钥。
///
/// 派生是确定性的：相同的输入总是得到相同的输出。
pub fn derive_key(secret: &[u8]) -> Zeroizing<[u8; 32]> {
    let digest = Sha256::new()
        .chain_update(KEY_DERIVATION_SALT)
        .chain_update(secret)
        .finalize();
    Zeroizing::new(digest.into())
}

fn build_cipher(secret: &[u8]) -> Result<Aes256Gcm, CipherError> {
    let key = derive_key(secret);
    Aes256Gcm::new_from_slice(key.as_slice()).map_err(|_| CipherError::InvalidKey)
}

/// 加密明文，返回带有 nonce 前缀和认证标签的密文。
///
/// # Errors
///
/// * `InvalidKey` - 密钥为空。
/// * `PayloadTooLarge` - 明文过大，无法用 `u32` 表示密文长度。
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey);
    }
    if plaintext.len() > MAX_PLAINTEXT_LEN {
        return Err(CipherError::PayloadTooLarge);
    }

    let cipher = build_cipher(key)?;

    let mut nonce = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce);

    let sealed = cipher
        .encrypt(GenericArray::from_slice(&nonce), plaintext)
        .map_err(|_| CipherError::PayloadTooLarge)?;

    let mut ciphertext = Vec::with_capacity(NONCE_LEN + sealed.len());
    ciphertext.extend_from_slice(&nonce);
    ciphertext.extend_from_slice(&sealed);
    Ok(ciphertext)
}

/// 解密由 [`encrypt`] 生成的密文。
///
/// # Errors
///
/// 密文短于 nonce + 认证标签、密钥为空、或认证失败时返回 `DecryptionFailed`。
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    if key.is_empty() || ciphertext.len() < CIPHER_OVERHEAD {
        return Err(CipherError::DecryptionFailed);
    }

    let (nonce, sealed) = ciphertext.split_at(NONCE_LEN);
    let cipher = build_cipher(key).map_err(|_| CipherError::DecryptionFailed)?;

    cipher
        .decrypt(GenericArray::from_slice(nonce), sealed)
        .map_err(|_| CipherError::DecryptionFailed)
}

/// 给定明文长度时密文的长度。
pub const fn ciphertext_len(plaintext_len: usize) -> usize {
    plaintext_len.saturating_add(CIPHER_OVERHEAD)
}
