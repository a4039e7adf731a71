// apps/gm_cli/src/commands/inspect.rs

//! 配对检查命令
//!
//! 对单个记录/世界文件配对做一次试运行，
//! 打印每个像素中心点及其地理坐标，不写任何文件。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use gm_io::record::{CenterSource, DetectionRecord};
use gm_io::worldfile::read_world_file;

/// 配对检查参数
#[derive(Args)]
pub struct InspectArgs {
    /// 检测记录文件路径
    #[arg(long)]
    pub record: PathBuf,

    /// 世界文件路径
    #[arg(long)]
    pub worldfile: PathBuf,
}

/// 执行配对检查命令
pub fn execute(args: InspectArgs) -> Result<()> {
    info!("=== GeoMark 配对检查 ===");

    let transform = read_world_file(&args.worldfile)
        .with_context(|| format!("世界文件读取失败: {}", args.worldfile.display()))?;
    let record = DetectionRecord::load(&args.record)
        .with_context(|| format!("检测记录载入失败: {}", args.record.display()))?;

    println!("世界文件: {}", args.worldfile.display());
    let params = transform.world_file_params();
    println!("  像素尺寸:  ({}, {})", params[0], params[3]);
    println!("  旋转系数:  ({}, {})", params[1], params[2]);
    println!("  原点坐标:  ({}, {})", params[4], params[5]);

    let Some(source) = record.center_source() else {
        println!("\n记录中没有 center 或 bboxes 数据，无可配准的目标");
        return Ok(());
    };

    match &source {
        CenterSource::Explicit(_) => println!("\n中心点来源: 显式 center 列表"),
        CenterSource::Derived(_) => println!("\n中心点来源: 边界框中点"),
    }

    println!("目标数量: {}", source.len());
    for (i, pixel) in source.pixel_centers().iter().enumerate() {
        let geo = transform.apply_point(*pixel);
        println!(
            "  [{:>3}] 像素 ({:.3}, {:.3}) -> 地理 ({:.6}, {:.6})",
            i, pixel.x, pixel.y, geo.latitude, geo.longitude
        );
    }

    Ok(())
}
