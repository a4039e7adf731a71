// crates/gm_io/src/pipeline.rs

//! 批处理管道
//!
//! 遍历记录目录中的 `*.json` 检测记录，按同名 `*.tfw` 规则在世界文件
//! 目录中配对，对每条记录做地理配准并写入输出目录的 `gis` 子目录。
//!
//! # 容错策略
//!
//! 单条记录的问题绝不中断整个批次：
//!
//! - 找不到匹配的世界文件：跳过并记录日志
//! - 世界文件格式错误 / 记录解析失败：该记录失败并记录日志
//! - 记录缺少中心点数据：跳过并记录日志，不产生输出产物
//!
//! 所有操作都是本地确定性文件读取，不做任何重试。
//! 每个输出产物先在内存中完整构造再一次性落盘。

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use gm_foundation::GmError;

use crate::error::{IoError, IoResult};
use crate::georef::georeference_record;
use crate::record::DetectionRecord;
use crate::worldfile::read_world_file;

/// 默认输出根目录
pub const DEFAULT_OUTPUT_ROOT: &str = "outputs";

/// 输出产物所在的子目录名
const GIS_SUBDIR: &str = "gis";

// ============================================================================
// 批处理配置
// ============================================================================

/// 批处理配置
///
/// 显式传递的配置值，携带输出路径与打印模式，
/// 不依赖任何进程级全局状态。
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// 检测记录目录（`*.json`）
    pub record_dir: PathBuf,
    /// 世界文件目录（`*.tfw`）
    pub worldfile_dir: PathBuf,
    /// 输出根目录，产物写入其下的 `gis` 子目录
    pub output_root: PathBuf,
    /// 仅打印结果，不写任何文件
    pub print_only: bool,
}

impl BatchConfig {
    /// 创建新的批处理配置
    pub fn new(record_dir: impl Into<PathBuf>, worldfile_dir: impl Into<PathBuf>) -> Self {
        Self {
            record_dir: record_dir.into(),
            worldfile_dir: worldfile_dir.into(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            print_only: false,
        }
    }

    /// 设置输出根目录
    #[must_use]
    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    /// 设置打印模式
    #[must_use]
    pub fn with_print_only(mut self, print_only: bool) -> Self {
        self.print_only = print_only;
        self
    }

    /// 输出产物目录（`<output_root>/gis`）
    #[must_use]
    pub fn gis_output_dir(&self) -> PathBuf {
        self.output_root.join(GIS_SUBDIR)
    }
}

// ============================================================================
// 批处理结果
// ============================================================================

/// 批处理结果汇总
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// 成功产出结果的记录数
    pub processed: usize,
    /// 因缺少配对或中心点数据而跳过的记录数
    pub skipped: usize,
    /// 因解析/写入错误而失败的记录数
    pub failed: usize,
}

impl BatchOutcome {
    /// 批次中处理过的记录总数
    #[must_use]
    pub fn total(&self) -> usize {
        self.processed + self.skipped + self.failed
    }
}

// ============================================================================
// 批处理入口
// ============================================================================

/// 对目录中的全部检测记录做地理配准
///
/// # Errors
///
/// 仅在批次无法启动时返回错误（记录目录不可读、输出目录无法创建）。
/// 单条记录的错误不会中断批次，在 [`BatchOutcome`] 中计数。
pub fn populate_gis(config: &BatchConfig) -> IoResult<BatchOutcome> {
    let record_paths = list_record_files(&config.record_dir)?;
    info!("发现 {} 个检测记录: {}", record_paths.len(), config.record_dir.display());

    let gis_dir = config.gis_output_dir();
    if !config.print_only {
        std::fs::create_dir_all(&gis_dir).map_err(|err| {
            IoError::Foundation(GmError::io_with_source(
                format!("创建输出目录失败: {}", gis_dir.display()),
                err,
            ))
        })?;
    }

    let mut outcome = BatchOutcome::default();

    for record_path in record_paths {
        let file_name = match record_path.file_name() {
            Some(name) => name.to_owned(),
            None => continue,
        };

        let worldfile_path = matching_world_file(&config.worldfile_dir, &record_path);

        let transform = match read_world_file(&worldfile_path) {
            Ok(transform) => transform,
            Err(IoError::WorldFileNotFound { path }) => {
                warn!("找不到匹配的世界文件: {}，跳过该记录", path.display());
                outcome.skipped += 1;
                continue;
            }
            Err(err) => {
                warn!("世界文件读取失败: {}", err);
                outcome.failed += 1;
                continue;
            }
        };

        let record = match DetectionRecord::load(&record_path) {
            Ok(record) => record,
            Err(err) => {
                warn!("检测记录载入失败: {}", err);
                outcome.failed += 1;
                continue;
            }
        };

        if record.center_source().is_none() {
            warn!(
                "记录缺少 center 或 bboxes 数据: {}，跳过该记录",
                record_path.display()
            );
            outcome.skipped += 1;
            continue;
        }

        let gis = georeference_record(&record, &transform);

        if config.print_only {
            match serde_json::to_string(&gis) {
                Ok(rendered) => {
                    println!("{}: {}", file_name.to_string_lossy(), rendered);
                    outcome.processed += 1;
                }
                Err(err) => {
                    warn!("结果序列化失败: {}", err);
                    outcome.failed += 1;
                }
            }
            continue;
        }

        let output_path = gis_dir.join(&file_name);
        match record.with_gis(gis).save(&output_path) {
            Ok(()) => {
                info!("已保存地理配准结果: {}", output_path.display());
                outcome.processed += 1;
            }
            Err(err) => {
                warn!("输出写入失败: {}", err);
                outcome.failed += 1;
            }
        }
    }

    Ok(outcome)
}

/// 列出记录目录中的全部 `*.json` 文件（按文件名排序）
fn list_record_files(record_dir: &Path) -> IoResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(record_dir).map_err(|err| {
        IoError::Foundation(GmError::io_with_source(
            format!("读取记录目录失败: {}", record_dir.display()),
            err,
        ))
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// 记录文件对应的世界文件路径（同名 `.tfw`）
fn matching_world_file(worldfile_dir: &Path, record_path: &Path) -> PathBuf {
    let stem = record_path
        .file_stem()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    let mut name = stem;
    name.push(".tfw");
    worldfile_dir.join(name)
}

// ============================================================================
// 测试
// ============================================================================
