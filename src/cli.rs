//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::fmt;
use std::path::PathBuf;

/// 一款基于加密 LSB 隐写术的命令行工具，用于在无损格式图像 (如 PNG) 中隐藏或恢复紧急警报。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于加密 LSB 隐写术的命令行工具，用于在无损格式图像 (如 PNG) 中隐藏或恢复紧急警报。输出图像始终为 PNG。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将 JSON 格式的警报加密后隐藏到图像中。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复警报。
    Recover(RecoverArgs),

    /// 显示图像可容纳的字节数。
    Capacity(CapacityArgs),
}

/// 共享密钥。`Debug` 输出中不显示内容。
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

impl From<&str> for SecretKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for SecretKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, JPEG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的警报 JSON 文件路径。
    #[arg(short, long)]
    pub alert: PathBuf,

    /// 结果图像的输出路径，默认为输入图像旁的 `doctored_<name>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,

    /// 共享密钥。
    #[arg(short, long, env = "SECRET_KEY", hide_env_values = true, value_parser = parse_key)]
    pub key: SecretKey,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏警报的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复出的警报 JSON 的保存路径，默认为 `recovered_<name>.json`。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,

    /// 共享密钥。
    #[arg(short, long, env = "SECRET_KEY", hide_env_values = true, value_parser = parse_key)]
    pub key: SecretKey,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要检查的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}

fn parse_key(raw: &str) -> Result<SecretKey, String> {
    if raw.is_empty() {
        return Err("the secret key must not be empty".to_string());
    }
    Ok(raw.into())
}
