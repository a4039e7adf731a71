// crates/gm_io/src/lib.rs

//! GeoMark IO 模块
//!
//! 提供检测记录与世界文件的输入输出，以及批量地理配准管道。
//!
//! # 模块
//!
//! - [`worldfile`]: 世界文件（六行仿射系数）驱动
//! - [`record`]: 检测记录模型与中心点来源解析
//! - [`georef`]: 记录级地理配准
//! - [`pipeline`]: 批处理管道
//! - [`error`]: IO 错误类型
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use gm_io::pipeline::{populate_gis, BatchConfig};
//!
//! let config = BatchConfig::new("labels", "rasters").with_output_root("outputs");
//! let outcome = populate_gis(&config)?;
//! println!("已处理 {} 个记录", outcome.processed);
//! ```

pub mod error;
pub mod georef;
pub mod pipeline;
pub mod record;
pub mod worldfile;

// 重导出常用类型
pub use error::{IoError, IoResult};
pub use georef::georeference_record;
pub use pipeline::{populate_gis, BatchConfig, BatchOutcome};
pub use record::{CenterSource, DetectionRecord};
pub use worldfile::read_world_file;
/// 类型别名简化
pub type Result<T> = IoResult<T>;
