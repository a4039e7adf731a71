// apps/gm_cli/src/commands/populate.rs

//! 批量地理配准命令
//!
//! 遍历记录目录，将每条检测记录的像素中心点转换为地理坐标，
//! 并写入输出目录的 `gis` 子目录。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use gm_io::pipeline::{populate_gis, BatchConfig, DEFAULT_OUTPUT_ROOT};

/// 批量地理配准参数
#[derive(Args)]
pub struct PopulateArgs {
    /// 检测记录目录（*.json，需包含 center 或 bboxes 字段）
    #[arg(long)]
    pub json_dir: PathBuf,

    /// 世界文件目录（与记录同名的 *.tfw）
    #[arg(long)]
    pub input_dir: PathBuf,

    /// 输出根目录，结果写入其下的 gis 子目录
    #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
    pub out_dir: PathBuf,

    /// 仅打印地理坐标，不写任何文件
    #[arg(long, default_value_t = false)]
    pub print: bool,
}

/// 执行批量地理配准命令
pub fn execute(args: PopulateArgs) -> Result<()> {
    info!("=== GeoMark 批量地理配准 ===");
    info!("记录目录: {}", args.json_dir.display());
    info!("世界文件目录: {}", args.input_dir.display());
    if args.print {
        info!("打印模式: 不写输出文件");
    } else {
        info!("输出目录: {}", args.out_dir.join("gis").display());
    }

    let config = BatchConfig::new(&args.json_dir, &args.input_dir)
        .with_output_root(&args.out_dir)
        .with_print_only(args.print);

    let start = Instant::now();
    let outcome = populate_gis(&config).context("批量地理配准启动失败")?;
    let elapsed = start.elapsed();

    info!("=== 批处理完成 ===");
    info!("总记录数: {}", outcome.total());
    info!("成功: {}", outcome.processed);
    if outcome.skipped > 0 {
        warn!("跳过: {} (缺少世界文件或中心点数据)", outcome.skipped);
    }
    if outcome.failed > 0 {
        warn!("失败: {} (解析或写入错误)", outcome.failed);
    }
    info!("耗时: {:.3} s", elapsed.as_secs_f64());

    Ok(())
}
