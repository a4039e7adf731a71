// crates/gm_geo/src/lib.rs

//! GeoMark 地理空间处理模块
//!
//! 提供像素坐标到地理坐标转换所需的几何类型和仿射变换。
//!
//! # 模块
//!
//! - `geometry`: 几何类型 (PixelPoint, GeoPoint, BoundingBox)
//! - `transform`: 仿射变换 (AffineTransform)
//!
//! # 示例
//!
//! ```
//! use gm_geo::prelude::*;
//!
//! // 从世界文件系数创建仿射变换
//! let affine = AffineTransform::from_world_file_params([0.5, 0.0, 0.0, -0.5, 100.0, 200.0]);
//! let geo = affine.apply_point(PixelPoint::new(10.0, 10.0));
//! assert!((geo.latitude - 105.0).abs() < 1e-12);
//! assert!((geo.longitude - 195.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod geometry;
pub mod transform;

/// 预导入模块
pub mod prelude {
    pub use crate::geometry::{BoundingBox, GeoPoint, PixelPoint};
    pub use crate::transform::AffineTransform;
}

// 重导出常用类型
pub use geometry::{BoundingBox, GeoPoint, PixelPoint};
pub use transform::AffineTransform;
