// crates/gm_geo/src/geometry.rs

//! 几何类型定义
//!
//! 提供项目统一的几何类型：像素坐标点、地理坐标点和边界框。
//!
//! # 坐标空间
//!
//! - [`PixelPoint`]: 图像像素坐标空间，允许亚像素（小数）位置
//! - [`GeoPoint`]: 仿射变换输出的地理坐标空间，单位由变换本身决定
//! - [`BoundingBox`]: 像素空间的轴对齐边界框，序列化为 `[x, y, w, h]` 数组

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ============================================================================
// PixelPoint - 像素坐标点
// ============================================================================

/// 像素坐标点
///
/// 检测结果中的目标中心位置，允许亚像素精度（例如边界框中点）。
///
/// # 示例
///
/// ```
/// use gm_geo::geometry::PixelPoint;
///
/// let p1 = PixelPoint::new(1.5, 2.0);
/// let p2 = PixelPoint::new(3.0, 4.0);
///
/// let sum = p1 + p2;
/// assert!((sum.x - 4.5).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    /// X坐标（列方向，像素）
    pub x: f64,
    /// Y坐标（行方向，像素）
    pub y: f64,
}

impl PixelPoint {
    /// 原点常量
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// 创建新的像素点
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for PixelPoint {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for PixelPoint {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

// ============================================================================
// GeoPoint - 地理坐标点
// ============================================================================

/// 地理坐标点
///
/// 仿射变换的输出。不做任何单位换算，坐标含义由变换所隐含的
/// 坐标参考系决定。序列化字段名固定为 `latitude` / `longitude`。
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// 纬度方向坐标（变换第一输出分量）
    pub latitude: f64,
    /// 经度方向坐标（变换第二输出分量）
    pub longitude: f64,
}

impl GeoPoint {
    /// 创建新的地理点
    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// ============================================================================
// BoundingBox - 边界框
// ============================================================================

/// 像素空间轴对齐边界框
///
/// 检测结果中的目标范围，序列化格式为 4 元数组 `[x, y, width, height]`。
/// 当记录没有显式中心点时，用 [`BoundingBox::center`] 推导中心。
///
/// # 示例
///
/// ```
/// use gm_geo::geometry::BoundingBox;
///
/// let bbox = BoundingBox::new(10.0, 20.0, 4.0, 6.0);
/// let center = bbox.center();
/// assert!((center.x - 12.0).abs() < 1e-12);
/// assert!((center.y - 23.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    /// 左上角X坐标
    pub x: f64,
    /// 左上角Y坐标
    pub y: f64,
    /// 宽度
    pub width: f64,
    /// 高度
    pub height: f64,
}

impl BoundingBox {
    /// 创建新的边界框
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 边界框中点
    ///
    /// 返回 `(x + width/2, y + height/2)`。
    #[inline]
    #[must_use]
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x, b.y, b.width, b.height]
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_point_ops() {
        let p1 = PixelPoint::new(1.0, 2.0);
        let p2 = PixelPoint::new(3.0, 5.0);

        let sum = p1 + p2;
        assert!((sum.x - 4.0).abs() < 1e-12);
        assert!((sum.y - 7.0).abs() < 1e-12);

        let diff = p2 - p1;
        assert!((diff.x - 2.0).abs() < 1e-12);
        assert!((diff.y - 3.0).abs() < 1e-12);

        assert_eq!(PixelPoint::ZERO, PixelPoint::new(0.0, 0.0));
    }

    #[test]
    fn test_bbox_center() {
        let bbox = BoundingBox::new(10.0, 20.0, 4.0, 6.0);
        let center = bbox.center();
        assert!((center.x - 12.0).abs() < 1e-12);
        assert!((center.y - 23.0).abs() < 1e-12);
    }

    #[test]
    fn test_bbox_center_fractional() {
        // 奇数宽高产生亚像素中心
        let bbox = BoundingBox::new(0.0, 0.0, 3.0, 5.0);
        let center = bbox.center();
        assert!((center.x - 1.5).abs() < 1e-12);
        assert!((center.y - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_bbox_serde_tuple_format() {
        let bbox = BoundingBox::new(10.0, 20.0, 4.0, 6.0);
        let json = serde_json::to_string(&bbox).expect("序列化失败");
        assert_eq!(json, "[10.0,20.0,4.0,6.0]");

        let parsed: BoundingBox = serde_json::from_str("[1.0, 2.0, 3.0, 4.0]").expect("解析失败");
        assert_eq!(parsed, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_pixel_point_serde_field_names() {
        let p: PixelPoint = serde_json::from_str(r#"{"x": 1.5, "y": 2.5}"#).expect("解析失败");
        assert!((p.x - 1.5).abs() < 1e-12);
        assert!((p.y - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_geo_point_serde_field_names() {
        let g = GeoPoint::new(37.123_456, 127.123_456);
        let json = serde_json::to_string(&g).expect("序列化失败");
        assert!(json.contains("\"latitude\""));
        assert!(json.contains("\"longitude\""));

        let parsed: GeoPoint = serde_json::from_str(&json).expect("解析失败");
        assert_eq!(parsed, g);
    }
}
