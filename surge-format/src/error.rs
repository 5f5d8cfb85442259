//! 格式化统一错误定义
//!
//! 编码/解码失败均携带底层原因向调用方传播，不做重试，也不降级为默认值。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FormatError {
    /// 编码器无法表示事件或状态中的某个值
    #[error("encoding failure: {source}")]
    EncodingFailure {
        #[source]
        source: serde_json::Error,
    },
    /// 负载字节无法解析为目标类型
    #[error("decoding failure: {source}")]
    DecodingFailure {
        #[source]
        source: serde_json::Error,
    },
}

impl FormatError {
    pub fn encoding(source: serde_json::Error) -> Self {
        FormatError::EncodingFailure { source }
    }

    pub fn decoding(source: serde_json::Error) -> Self {
        FormatError::DecodingFailure { source }
    }
}

/// 统一 Result 类型别名
pub type FormatResult<T> = Result<T, FormatError>;
