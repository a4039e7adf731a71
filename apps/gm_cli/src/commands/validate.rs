// apps/gm_cli/src/commands/validate.rs

//! 输入产物验证命令
//!
//! 验证检测记录和世界文件的正确性。

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{error, info, warn};

use gm_io::worldfile::read_world_file;

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 检测记录文件路径
    #[arg(short, long)]
    pub record: Option<PathBuf>,

    /// 世界文件路径
    #[arg(short, long)]
    pub worldfile: Option<PathBuf>,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 验证结果
#[derive(Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn is_ok_strict(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== GeoMark 输入验证 ===");

    let mut result = ValidationResult::default();

    // 验证世界文件
    if let Some(worldfile_path) = &args.worldfile {
        validate_worldfile(worldfile_path, &mut result);
    }

    // 验证检测记录
    if let Some(record_path) = &args.record {
        validate_record(record_path, &mut result)?;
    }

    // 如果没有指定任何文件
    if args.record.is_none() && args.worldfile.is_none() {
        println!("用法: gm_cli validate --worldfile <世界文件> [--record <检测记录>]");
        println!("      gm_cli validate --record <检测记录>");
        return Ok(());
    }

    // 输出结果
    print_validation_result(&result, args.strict)
}

fn validate_worldfile(path: &PathBuf, result: &mut ValidationResult) {
    println!("\n检查世界文件: {}", path.display());

    match read_world_file(path) {
        Ok(transform) => {
            // 行列式接近零的变换无法反演，通常意味着系数有误
            if transform.determinant().abs() < 1e-15 {
                result.add_warning(format!(
                    "仿射变换行列式接近零（退化变换）: {}",
                    path.display()
                ));
            }
            println!("  ✓ 世界文件格式有效");
        }
        Err(err) => {
            result.add_error(format!("{}", err));
        }
    }
}

fn validate_record(path: &PathBuf, result: &mut ValidationResult) -> Result<()> {
    println!("\n检查检测记录: {}", path.display());

    // 检查文件是否存在
    if !path.exists() {
        result.add_error(format!("检测记录不存在: {}", path.display()));
        return Ok(());
    }

    // 读取文件
    let content = std::fs::read_to_string(path).context("无法读取检测记录")?;

    // 尝试解析 JSON
    let json: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            result.add_error(format!("JSON 解析错误: {}", e));
            return Ok(());
        }
    };

    validate_record_fields(&json, result);

    println!("  ✓ 检测记录格式有效");

    Ok(())
}

fn validate_record_fields(json: &serde_json::Value, result: &mut ValidationResult) {
    let has_centers = json
        .get("center")
        .and_then(serde_json::Value::as_array)
        .is_some_and(|arr| !arr.is_empty());
    let has_bboxes = json
        .get("bboxes")
        .and_then(serde_json::Value::as_array)
        .is_some_and(|arr| !arr.is_empty());

    // 检查中心点数据
    if !has_centers && !has_bboxes {
        result.add_warning("记录缺少 center 和 bboxes 数据，配准结果将为空");
    }

    if has_centers && has_bboxes {
        result.add_warning("记录同时包含 center 与 bboxes，将优先使用 center");
    }

    // 检查中心点结构
    if let Some(centers) = json.get("center").and_then(serde_json::Value::as_array) {
        for (i, center) in centers.iter().enumerate() {
            if center.get("x").and_then(serde_json::Value::as_f64).is_none()
                || center.get("y").and_then(serde_json::Value::as_f64).is_none()
            {
                result.add_error(format!("center[{}] 缺少数值 x/y 字段", i));
            }
        }
    }

    // 检查边界框结构
    if let Some(bboxes) = json.get("bboxes").and_then(serde_json::Value::as_array) {
        for (i, bbox) in bboxes.iter().enumerate() {
            let valid = bbox
                .as_array()
                .is_some_and(|arr| arr.len() == 4 && arr.iter().all(serde_json::Value::is_number));
            if !valid {
                result.add_error(format!("bboxes[{}] 应为 [x, y, w, h] 数值数组", i));
            }
        }
    }
}

fn print_validation_result(result: &ValidationResult, strict: bool) -> Result<()> {
    println!("\n=== 验证结果 ===");

    // 输出错误
    if !result.errors.is_empty() {
        println!("\n错误 ({}):", result.errors.len());
        for err in &result.errors {
            error!("  ✗ {}", err);
            println!("  ✗ {}", err);
        }
    }

    // 输出警告
    if !result.warnings.is_empty() {
        println!("\n警告 ({}):", result.warnings.len());
        for warning in &result.warnings {
            warn!("  ⚠ {}", warning);
            println!("  ⚠ {}", warning);
        }
    }

    // 最终判定
    let success = if strict {
        result.is_ok_strict()
    } else {
        result.is_ok()
    };

    if success {
        println!("\n✓ 验证通过");
        Ok(())
    } else {
        println!("\n✗ 验证失败");
        bail!(
            "验证失败：发现 {} 个错误，{} 个警告",
            result.errors.len(),
            result.warnings.len()
        )
    }
}
