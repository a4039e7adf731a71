// crates/gm_geo/src/transform.rs

//! 仿射变换
//!
//! 基于纯 Rust 实现的像素坐标到地理坐标映射，不依赖外部 C 库。
//!
//! # 示例
//!
//! ```
//! use gm_geo::transform::AffineTransform;
//!
//! // 恒等变换
//! let affine = AffineTransform::identity();
//! let (x, y) = affine.apply(10.0, 20.0);
//! assert!((x - 10.0).abs() < 1e-12);
//! assert!((y - 20.0).abs() < 1e-12);
//! ```

use crate::geometry::{GeoPoint, PixelPoint};

// ============================================================================
// 仿射变换矩阵
// ============================================================================

/// 仿射变换矩阵
///
/// 用于像素坐标到地理坐标的转换。每个影像对应且仅对应一个变换，
/// 解析后不可变，不在影像之间合并或复用。
///
/// 变换公式：
/// - x' = a*x + b*y + c
/// - y' = d*x + e*y + f
#[derive(Debug, Clone, Copy)]
pub struct AffineTransform {
    /// x 方向像素尺寸（缩放系数）
    pub a: f64,
    /// x 方向旋转（倾斜）系数
    pub b: f64,
    /// x 方向平移量（左上角地理坐标）
    pub c: f64,
    /// y 方向旋转（倾斜）系数
    pub d: f64,
    /// y 方向像素尺寸（缩放系数）
    pub e: f64,
    /// y 方向平移量（左上角地理坐标）
    pub f: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// 恒等变换
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 1.0,
            f: 0.0,
        }
    }

    /// 从世界文件系数数组创建
    ///
    /// 世界文件固定行序:
    /// `[pixel_size_x, rotation_x, rotation_y, pixel_size_y, origin_x, origin_y]`
    #[must_use]
    pub fn from_world_file_params(params: [f64; 6]) -> Self {
        Self {
            a: params[0],
            b: params[1],
            d: params[2],
            e: params[3],
            c: params[4],
            f: params[5],
        }
    }

    /// 转换为世界文件系数数组
    #[must_use]
    pub fn world_file_params(&self) -> [f64; 6] {
        [self.a, self.b, self.d, self.e, self.c, self.f]
    }

    /// 应用正向变换
    #[inline]
    #[must_use]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.c,
            self.d * x + self.e * y + self.f,
        )
    }

    /// 将像素点映射为地理点
    ///
    /// 第一输出分量写入 `latitude`，第二输出分量写入 `longitude`。
    #[inline]
    #[must_use]
    pub fn apply_point(&self, p: PixelPoint) -> GeoPoint {
        let (latitude, longitude) = self.apply(p.x, p.y);
        GeoPoint::new(latitude, longitude)
    }

    /// 变换多个点
    #[must_use]
    pub fn apply_batch(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        points.iter().map(|&(x, y)| self.apply(x, y)).collect()
    }

    /// 计算逆变换
    ///
    /// 行列式接近零（矩阵奇异）时返回 `None`。
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-15 {
            return None;
        }
        let inv_det = 1.0 / det;
        Some(Self {
            a: self.e * inv_det,
            b: -self.b * inv_det,
            c: (self.b * self.f - self.c * self.e) * inv_det,
            d: -self.d * inv_det,
            e: self.a * inv_det,
            f: (self.c * self.d - self.a * self.f) * inv_det,
        })
    }

    /// 应用逆变换（地理坐标 -> 像素坐标）
    #[must_use]
    pub fn apply_inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.inverse().map(|inv| inv.apply(x, y))
    }

    /// 获取变换的行列式
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.e - self.b * self.d
    }

    /// 是否为恒等变换
    #[must_use]
    pub fn is_identity(&self) -> bool {
        (self.a - 1.0).abs() < 1e-10
            && self.b.abs() < 1e-10
            && self.c.abs() < 1e-10
            && self.d.abs() < 1e-10
            && (self.e - 1.0).abs() < 1e-10
            && self.f.abs() < 1e-10
    }
}

// ============================================================================
// 测试
// ============================================================================
