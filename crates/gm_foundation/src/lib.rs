// crates/gm_foundation/src/lib.rs

//! GeoMark Foundation Layer
//!
//! 零依赖基础层，提供整个项目的统一错误抽象。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型
//!
//! # 设计原则
//!
//! 1. **零外部依赖**: 仅依赖 thiserror
//! 2. **层次化**: 基础层只定义核心错误，IO 相关错误在 gm_io 中扩展
//! 3. **易用性**: 提供便捷的构造方法
//!
//! # 示例
//!
//! ```
//! use gm_foundation::error::{GmError, GmResult};
//!
//! fn read_config() -> GmResult<()> {
//!     Err(GmError::config("配置文件格式错误"))
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

// 重导出常用类型
pub use error::{GmError, GmResult};
