// crates/gm_io/src/record.rs

//! 检测记录模型
//!
//! 检测/分割结果的结构化记录。记录最少包含以下二者之一：
//!
//! - `center`: 显式像素中心点列表（`{"x": .., "y": ..}` 对象）
//! - `bboxes`: 边界框列表（`[x, y, w, h]` 4 元数组）
//!
//! 标签、置信度、掩膜等其余字段原样透传，不做解释。
//! 输出时记录追加 `gis` 字段（`{"latitude": .., "longitude": ..}` 列表），
//! 所有既有字段保持不变。
//!
//! # 中心点来源
//!
//! 中心点来源在记录载入时一次性解析为 [`CenterSource`] 标签变体：
//! 显式中心点优先，仅当显式列表缺失或为空时退化为边界框中点，
//! 两者绝不混用。

use std::path::Path;

use serde::{Deserialize, Serialize};

use gm_foundation::GmError;
use gm_geo::{BoundingBox, GeoPoint, PixelPoint};

use crate::error::{IoError, IoResult};

// ============================================================================
// 检测记录
// ============================================================================

/// 检测记录
///
/// 外部产生的检测/分割结果。未识别的字段保存在 `extra` 中，
/// 序列化时原样写回，保证字段透传。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// 显式像素中心点列表
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub center: Vec<PixelPoint>,

    /// 边界框列表
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bboxes: Vec<BoundingBox>,

    /// 地理配准结果（输出时追加）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gis: Option<Vec<GeoPoint>>,

    /// 其余字段（标签、置信度、掩膜、元数据等），原样透传
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DetectionRecord {
    /// 从 JSON 文件载入记录
    ///
    /// # Errors
    ///
    /// 文件不存在返回 [`GmError::FileNotFound`]（经由 Foundation 变体），
    /// JSON 解析失败返回 [`IoError::RecordParseFailed`]。
    pub fn load(path: &Path) -> IoResult<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(IoError::Foundation(GmError::file_not_found(path)));
            }
            Err(err) => {
                return Err(IoError::Foundation(GmError::io_with_source(
                    format!("读取检测记录失败: {}", path.display()),
                    err,
                )));
            }
        };

        serde_json::from_str(&content)
            .map_err(|err| IoError::record_parse_failed(path, err.to_string()))
    }

    /// 将记录写入 JSON 文件
    ///
    /// 输出在内存中完整构造后一次性写入，必要时创建父目录。
    ///
    /// # Errors
    ///
    /// 序列化失败返回 [`IoError::SerializeFailed`]，写入失败返回底层 IO 错误。
    pub fn save(&self, path: &Path) -> IoResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                IoError::Foundation(GmError::io_with_source(
                    format!("创建输出目录失败: {}", parent.display()),
                    err,
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|err| IoError::serialize_failed(err.to_string()))?;

        std::fs::write(path, json).map_err(|err| {
            IoError::Foundation(GmError::io_with_source(
                format!("写入检测记录失败: {}", path.display()),
                err,
            ))
        })
    }

    /// 解析中心点来源
    ///
    /// 显式中心点优先；显式列表缺失或为空时退化为边界框；
    /// 两者皆无时返回 `None`（记录没有可配准的数据）。
    #[must_use]
    pub fn center_source(&self) -> Option<CenterSource> {
        if !self.center.is_empty() {
            return Some(CenterSource::Explicit(self.center.clone()));
        }
        if !self.bboxes.is_empty() {
            return Some(CenterSource::Derived(self.bboxes.clone()));
        }
        None
    }

    /// 追加地理配准结果，返回增强后的记录
    #[must_use]
    pub fn with_gis(mut self, gis: Vec<GeoPoint>) -> Self {
        self.gis = Some(gis);
        self
    }
}

// ============================================================================
// 中心点来源
// ============================================================================

/// 中心点来源
///
/// 在记录载入时一次性解析，替代在每个使用点重复判断的隐式回退。
#[derive(Debug, Clone, PartialEq)]
pub enum CenterSource {
    /// 记录携带显式中心点
    Explicit(Vec<PixelPoint>),
    /// 中心点由边界框中点推导
    Derived(Vec<BoundingBox>),
}

impl CenterSource {
    /// 展开为像素中心点列表
    #[must_use]
    pub fn pixel_centers(&self) -> Vec<PixelPoint> {
        match self {
            Self::Explicit(centers) => centers.clone(),
            Self::Derived(bboxes) => bboxes.iter().map(BoundingBox::center).collect(),
        }
    }

    /// 中心点数量
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Explicit(centers) => centers.len(),
            Self::Derived(bboxes) => bboxes.len(),
        }
    }

    /// 是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_explicit_centers() {
        let json = r#"{
            "metadata": {"image_id": "tile_0001"},
            "center": [{"x": 1.0, "y": 2.0}, {"x": 3.5, "y": 4.5}]
        }"#;
        let record: DetectionRecord = serde_json::from_str(json).expect("解析失败");

        let source = record.center_source().expect("缺少中心点来源");
        assert_eq!(source.len(), 2);
        let centers = source.pixel_centers();
        assert_eq!(centers[1], PixelPoint::new(3.5, 4.5));
    }

    #[test]
    fn test_bbox_fallback() {
        let json = r#"{
            "labels": [3],
            "bboxes": [[10.0, 20.0, 4.0, 6.0]]
        }"#;
        let record: DetectionRecord = serde_json::from_str(json).expect("解析失败");

        let source = record.center_source().expect("缺少中心点来源");
        match &source {
            CenterSource::Derived(bboxes) => assert_eq!(bboxes.len(), 1),
            CenterSource::Explicit(_) => panic!("应退化为边界框来源"),
        }
        let centers = source.pixel_centers();
        assert_eq!(centers[0], PixelPoint::new(12.0, 23.0));
    }

    #[test]
    fn test_explicit_centers_win_over_bboxes() {
        // 两者并存时显式中心点优先，绝不混用
        let json = r#"{
            "center": [{"x": 5.0, "y": 5.0}],
            "bboxes": [[0.0, 0.0, 100.0, 100.0], [10.0, 10.0, 2.0, 2.0]]
        }"#;
        let record: DetectionRecord = serde_json::from_str(json).expect("解析失败");

        let source = record.center_source().expect("缺少中心点来源");
        assert_eq!(source.len(), 1);
        assert_eq!(source.pixel_centers()[0], PixelPoint::new(5.0, 5.0));
    }

    #[test]
    fn test_empty_center_list_falls_back_to_bboxes() {
        let json = r#"{
            "center": [],
            "bboxes": [[0.0, 0.0, 2.0, 2.0]]
        }"#;
        let record: DetectionRecord = serde_json::from_str(json).expect("解析失败");

        let source = record.center_source().expect("缺少中心点来源");
        match source {
            CenterSource::Derived(_) => {}
            CenterSource::Explicit(_) => panic!("空中心点列表应退化为边界框来源"),
        }
    }

    #[test]
    fn test_no_center_data() {
        let json = r#"{"labels": [1, 2], "scores": [0.9, 0.8]}"#;
        let record: DetectionRecord = serde_json::from_str(json).expect("解析失败");
        assert!(record.center_source().is_none());
    }

    #[test]
    fn test_field_preservation_roundtrip() {
        let json = r#"{
            "metadata": {"image_id": "tile_0042", "categories": ["tree", "building"]},
            "labels": [1, 0],
            "scores": [0.97, 0.64],
            "masks": [{"polygon": [[0, 0], [1, 1]], "area": 12.5}],
            "center": [{"x": 10.0, "y": 10.0}]
        }"#;
        let record: DetectionRecord = serde_json::from_str(json).expect("解析失败");

        let augmented = record.with_gis(vec![GeoPoint::new(105.0, 195.0)]);
        let out = serde_json::to_value(&augmented).expect("序列化失败");

        // 既有字段原样保留
        assert_eq!(out["metadata"]["image_id"], "tile_0042");
        assert_eq!(out["labels"][0], 1);
        assert_eq!(out["scores"][1], 0.64);
        assert_eq!(out["masks"][0]["area"], 12.5);
        assert_eq!(out["center"][0]["x"], 10.0);

        // 新增 gis 字段
        assert_eq!(out["gis"][0]["latitude"], 105.0);
        assert_eq!(out["gis"][0]["longitude"], 195.0);
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = std::env::temp_dir().join("gm_record_roundtrip");
        let path = dir.join("tile_0001.json");

        let mut record = DetectionRecord::default();
        record.center.push(PixelPoint::new(1.0, 2.0));
        record
            .extra
            .insert("labels".into(), serde_json::json!([7]));
        record.save(&path).expect("保存失败");

        let loaded = DetectionRecord::load(&path).expect("载入失败");
        assert_eq!(loaded.center.len(), 1);
        assert_eq!(loaded.extra["labels"], serde_json::json!([7]));

        // 清理
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_record() {
        let path = std::env::temp_dir().join("gm_record_missing.json");
        let err = DetectionRecord::load(&path).unwrap_err();
        match err {
            IoError::Foundation(GmError::FileNotFound { .. }) => {}
            _ => panic!("错误的错误类型"),
        }
    }

    #[test]
    fn test_load_invalid_json() {
        let path = std::env::temp_dir().join("gm_record_invalid.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = DetectionRecord::load(&path).unwrap_err();
        match err {
            IoError::RecordParseFailed { .. } => {}
            _ => panic!("错误的错误类型"),
        }

        let _ = std::fs::remove_file(&path);
    }
}
