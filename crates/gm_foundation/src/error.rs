// crates/gm_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `GmError` 枚举和 `GmResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **层次化**: 基础层只定义核心错误，IO 相关错误在 gm_io 中定义
//! 2. **易用性**: 提供便捷的构造方法
//! 3. **可追溯**: 支持错误链

use std::path::PathBuf;
use thiserror::Error;

/// 统一结果类型
pub type GmResult<T> = Result<T, GmError>;

/// GeoMark 错误类型
///
/// 核心错误类型，用于整个项目。文件格式相关的错误应在 `gm_io` 中扩展。
#[derive(Error, Debug)]
pub enum GmError {
    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        #[source]
        /// 可选的底层 IO 错误
        source: Option<std::io::Error>,
    },

    /// 文件不存在
    #[error("文件不存在: {path}")]
    FileNotFound {
        /// 未找到的路径
        path: PathBuf,
    },

    /// 文件解析错误
    #[error("文件解析错误: {file} 第{line}行: {message}")]
    ParseError {
        /// 文件路径
        file: PathBuf,
        /// 行号
        line: usize,
        /// 错误信息
        message: String,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 序列化错误
    #[error("序列化错误: {message}")]
    Serialization {
        /// 序列化失败原因
        message: String,
    },

    /// 配置错误
    #[error("配置错误: {message}")]
    Config {
        /// 具体错误信息
        message: String,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl GmError {
    /// 从IO错误创建
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// 从IO错误创建（带源）
    pub fn io_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 文件不存在
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// 解析错误
    pub fn parse(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 序列化错误
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// 配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for GmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_file_not_found_error() {
        let err = GmError::file_not_found("/tmp/missing.tfw");
        match &err {
            GmError::FileNotFound { path } => {
                assert_eq!(path, Path::new("/tmp/missing.tfw"));
            }
            _ => panic!("错误的错误类型"),
        }
        let msg = format!("{}", err);
        assert!(msg.contains("missing.tfw"));
    }

    #[test]
    fn test_parse_error() {
        let err = GmError::parse("data.tfw", 3, "无法解析为浮点数");
        match &err {
            GmError::ParseError { file, line, message } => {
                assert_eq!(file, Path::new("data.tfw"));
                assert_eq!(*line, 3);
                assert!(message.contains("浮点数"));
            }
            _ => panic!("错误的错误类型"),
        }
        let msg = format!("{}", err);
        assert!(msg.contains("第3行"));
    }

    #[test]
    fn test_io_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GmError::io_with_source("读取失败", source);
        match &err {
            GmError::Io { message, source } => {
                assert_eq!(message, "读取失败");
                assert!(source.is_some());
            }
            _ => panic!("错误的错误类型"),
        }
    }

    #[test]
    fn test_from_std_io_error() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: GmError = source.into();
        match err {
            GmError::Io { source, .. } => assert!(source.is_some()),
            _ => panic!("错误的错误类型"),
        }
    }

    #[test]
    fn test_invalid_input_error() {
        let err = GmError::invalid_input("中心点列表为空");
        let msg = format!("{}", err);
        assert!(msg.contains("中心点列表为空"));
    }

    #[test]
    fn test_config_error() {
        let err = GmError::config("缺少输出目录");
        match err {
            GmError::Config { ref message } => assert_eq!(message, "缺少输出目录"),
            _ => panic!("错误的错误类型"),
        }
    }
}
