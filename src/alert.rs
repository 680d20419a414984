//! # 紧急警报记录模块
//!
//! 定义隐藏在图像中的警报记录，以及它的规范字节编码 (严格 JSON，字段顺序固定)。
//! 嵌入和提取两端使用同一套编码。

use crate::error::AlertError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 紧急程度。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Red,
    Yellow,
    Green,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        };
        f.write_str(name)
    }
}

/// 发送者的位置，坐标未知时为 `None`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// 一条紧急警报。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyAlert {
    pub message: String,
    pub name: String,
    #[serde(alias = "phoneNumber")]
    pub phone: String,
    pub urgency_color: Urgency,
    #[serde(default)]
    pub location: Location,
}

impl EmergencyAlert {
    /// 检查必填字段是否为空。
    pub fn validate(&self) -> Result<(), AlertError> {
        [
            ("message", &self.message),
            ("name", &self.name),
            ("phone", &self.phone),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(AlertError::MissingField(field)))
    }

    /// 编码为嵌入用的规范字节序列。
    pub fn to_payload(&self) -> Result<Vec<u8>, AlertError> {
        self.validate()?;
        Ok(serde_json::to_vec(self)?)
    }

    /// 从提取出的字节序列解析警报记录。
    pub fn from_payload(bytes: &[u8]) -> Result<Self, AlertError> {
        let alert: Self = serde_json::from_slice(bytes)?;
        alert.validate()?;
        Ok(alert)
    }
}
