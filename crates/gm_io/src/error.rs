// crates/gm_io/src/error.rs

//! IO 错误类型定义
//!
//! 提供 IO 模块的统一错误枚举，支持通过 thiserror 自动转换底层错误。
//! 所有错误最终可转换为 GmError 以实现跨层错误传递。

use std::path::PathBuf;
use thiserror::Error;

use gm_foundation::GmError;

/// IO 模块结果类型别名
pub type IoResult<T> = Result<T, IoError>;

/// IO 错误枚举
#[derive(Error, Debug)]
pub enum IoError {
    /// 世界文件不存在
    #[error("世界文件不存在: {path}")]
    WorldFileNotFound {
        /// 未找到的路径
        path: PathBuf,
    },

    /// 世界文件格式错误
    #[error("世界文件格式错误: {path} 第{line}行: {message}")]
    MalformedWorldFile {
        /// 文件路径
        path: PathBuf,
        /// 行号（从 1 开始）
        line: usize,
        /// 错误信息
        message: String,
    },

    /// 检测记录解析失败
    #[error("检测记录解析失败: {path}, {message}")]
    RecordParseFailed {
        /// 文件路径
        path: PathBuf,
        /// 失败原因
        message: String,
    },

    /// 记录序列化失败
    #[error("记录序列化失败: {message}")]
    SerializeFailed {
        /// 失败原因
        message: String,
    },

    /// 基础层错误转换
    #[error("基础层错误: {0}")]
    Foundation(#[from] GmError),
}

impl IoError {
    /// 创建世界文件不存在错误
    #[inline]
    pub fn world_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::WorldFileNotFound { path: path.into() }
    }

    /// 创建世界文件格式错误
    #[inline]
    pub fn malformed_world_file(
        path: impl Into<PathBuf>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedWorldFile {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// 创建记录解析失败错误
    #[inline]
    pub fn record_parse_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::RecordParseFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// 创建序列化失败错误
    #[inline]
    pub fn serialize_failed(message: impl Into<String>) -> Self {
        Self::SerializeFailed {
            message: message.into(),
        }
    }
}

impl From<IoError> for GmError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::WorldFileNotFound { path } => GmError::file_not_found(path),
            IoError::MalformedWorldFile {
                path,
                line,
                message,
            } => GmError::parse(path, line, message),
            IoError::RecordParseFailed { path, message } => {
                GmError::invalid_input(format!("检测记录解析失败 [{}]: {}", path.display(), message))
            }
            IoError::SerializeFailed { message } => GmError::serialization(message),
            IoError::Foundation(gm_err) => gm_err,
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
