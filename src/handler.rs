//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、图像解码、调用核心隐写算法以及向用户报告结果。

use crate::alert::{EmergencyAlert, Urgency};
use crate::carrier::CarrierImage;
use crate::cipher::ciphertext_len;
use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{DOCTORED_PREFIX, HEADER_LEN, MAX_IMAGE_PIXELS, RECOVERED_PREFIX};
use crate::error::{EmbedError, ExtractError};
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 读取并解码载体图像。
///
/// 解码前先检查尺寸，超过 `MAX_IMAGE_PIXELS` 的图像直接拒绝。
fn load_carrier(path: &Path) -> Result<CarrierImage> {
    let (width, height) = image::image_dimensions(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let pixels = u64::from(width) * u64::from(height);
    anyhow::ensure!(
        pixels <= MAX_IMAGE_PIXELS,
        "The image is too large to process. \nPixels: {}, Maximum: {}",
        pixels.to_string().red().bold(),
        MAX_IMAGE_PIXELS.to_string().green().bold()
    );

    let image = image::open(path).with_context(|| {
        format!(
            "Unable to decode image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    Ok(CarrierImage::from(image))
}

/// 在输入文件旁生成默认输出路径：`<prefix><stem>.<extension>`。
fn default_output(input: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{stem}.{extension}"))
}

/// 确认目标文件不存在，或用户允许覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn paint_urgency(urgency: Urgency) -> ColoredString {
    let label = urgency.to_string().to_uppercase();
    match urgency {
        Urgency::Red => label.red().bold(),
        Urgency::Yellow => label.yellow().bold(),
        Urgency::Green => label.green().bold(),
    }
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和警报文件、校验警报、调用隐写核心函数加密并嵌入，
/// 最后将结果以 PNG 格式写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和密钥的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或警报文件，或图像过大。
/// * 警报不是合法的 JSON，或缺少必填字段。
/// * 图像文件没有足够的空间来隐藏警报。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let carrier = load_carrier(&args.image)?;

    let raw_alert = fs::read(&args.alert).with_context(|| {
        format!(
            "Unable to read alert file: {}",
            args.alert.to_string_lossy().red().bold()
        )
    })?;

    let alert: EmergencyAlert = serde_json::from_slice(&raw_alert).with_context(|| {
        format!(
            "Invalid alert JSON in: {}",
            args.alert.to_string_lossy().red().bold()
        )
    })?;

    let payload = alert
        .to_payload()
        .with_context(|| "The alert record is incomplete.")?;

    let dest = args
        .dest
        .unwrap_or_else(|| default_output(&args.image, DOCTORED_PREFIX, "png"));
    ensure_writable(&dest, args.force)?;

    let is_png = dest
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if !is_png {
        warn!(
            "destination {} does not end in .png; writing PNG data anyway",
            dest.display()
        );
    }

    let doctored = embed(&payload, args.key.as_bytes(), &carrier).map_err(|err| match err {
        EmbedError::InsufficientCapacity {
            required,
            available,
        } => anyhow::anyhow!(
            "Not enough space in the image to hide the alert. \nRequired: {}, Available: {}",
            required.to_string().red().bold(),
            available.to_string().green().bold()
        ),
        EmbedError::InvalidKey => anyhow::anyhow!("The secret key must not be empty."),
    })?;

    doctored.save_png(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    info!("hid {} payload bytes in {}", payload.len(), dest.display());
    println!(
        "The alert has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用恢复核心函数提取并解密警报，
/// 最后将警报以 JSON 格式写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和密钥的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件，或图像过大。
/// * 图像中没有可用当前密钥解密的警报。
/// * 解密出的内容不是合法的警报记录。
/// * 目标文件已存在且未指定 `--force`，或无法写入。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let carrier = load_carrier(&args.image)?;

    let payload = extract(args.key.as_bytes(), &carrier).map_err(|ExtractError::NotFound| {
        anyhow::anyhow!(
            "No message found in the image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let alert = EmergencyAlert::from_payload(&payload)
        .with_context(|| "The hidden message is not a valid alert record.")?;

    let output = args
        .output
        .unwrap_or_else(|| default_output(&args.image, RECOVERED_PREFIX, "json"));
    ensure_writable(&output, args.force)?;

    let json = serde_json::to_string_pretty(&alert)?;
    fs::write(&output, json).with_context(|| {
        format!(
            "Unable to write to target alert file: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "[{}] {} ({}): {}",
        paint_urgency(alert.urgency_color),
        alert.name.bold(),
        alert.phone,
        alert.message
    );
    println!(
        "The alert has been successfully recovered and saved: {}",
        output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// 报告图像可嵌入的字节数，以及扣除长度头部和加密开销后可用的载荷字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let carrier = load_carrier(&args.image)?;
    let capacity = carrier.capacity();
    let payload_room = capacity.saturating_sub(HEADER_LEN + ciphertext_len(0));

    println!(
        "{}x{} with {} channels: {} bytes of capacity, {} bytes available for an alert",
        carrier.width(),
        carrier.height(),
        carrier.channels(),
        capacity.to_string().green().bold(),
        payload_room.to_string().green().bold()
    );

    Ok(())
}
