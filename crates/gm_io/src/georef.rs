// crates/gm_io/src/georef.rs

//! 记录级地理配准
//!
//! 将检测记录中的像素中心点逐一通过仿射变换映射为地理点。
//! 纯函数：相同记录与变换总是产生相同结果。
//!
//! 没有任何中心点数据的记录产生空结果而非错误，
//! 下游消费者可以合法地期望零个检测。

use gm_geo::{AffineTransform, GeoPoint};

use crate::record::DetectionRecord;

/// 对单条记录做地理配准
///
/// 解析记录的中心点来源（显式中心点优先，否则边界框中点），
/// 按输入顺序映射为地理点列表。记录缺少中心点数据时返回空列表。
#[must_use]
pub fn georeference_record(record: &DetectionRecord, transform: &AffineTransform) -> Vec<GeoPoint> {
    match record.center_source() {
        Some(source) => source
            .pixel_centers()
            .iter()
            .map(|&p| transform.apply_point(p))
            .collect(),
        None => Vec::new(),
    }
}

// ============================================================================
// 测试
// ============================================================================
