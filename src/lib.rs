//! # sos_hide 库
//!
//! 本库包含加密 LSB 隐写的核心逻辑：把紧急警报加密后藏进无损图像，
//! 只有持有共享密钥的一方才能恢复。

// 声明库包含的所有模块。

pub mod alert;
pub mod carrier;
pub mod cipher;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;

pub use carrier::CarrierImage;
pub use error::{AlertError, CipherError, EmbedError, ExtractError};
pub use steganography::{embed, extract};
