/// 长度头部占用的字节数。
/// 密文长度以大端 `u32` 形式写在最前面，共 4 字节。
pub const HEADER_LEN: usize = 4;

/// 长度头部占用的通道字节数。
/// 每个通道字节只保存 1 bit，因此需要 4 * 8 = 32 个通道字节。
pub const HEADER_BITS: usize = HEADER_LEN * 8;

/// AES-256-GCM 随机 nonce 的长度 (字节)，存放在密文的最前面。
pub const NONCE_LEN: usize = 12;

/// GCM 认证标签的长度 (字节)，附加在密文末尾。
pub const TAG_LEN: usize = 16;

/// 加密带来的固定开销：nonce + 认证标签。
pub const CIPHER_OVERHEAD: usize = NONCE_LEN + TAG_LEN;

/// 密钥派生时的域分隔前缀。
/// 改变它等同于改变线上格式，旧图像将无法再被解密。
pub const KEY_DERIVATION_SALT: &[u8] = b"sos_hide-key-v1";

/// 允许处理的最大像素数 (16 MP)。
pub const MAX_IMAGE_PIXELS: u64 = 16 * 1024 * 1024;

/// 默认输出图像文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 默认恢复结果文件名的前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";
