// apps/gm_cli/src/main.rs

//! GeoMark 命令行界面
//!
//! 将检测结果的像素坐标批量转换为地理坐标的命令行工具。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// GeoMark 检测结果地理配准命令行工具
#[derive(Parser)]
#[command(name = "gm_cli")]
#[command(author = "GeoMark Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GeoMark detection georeferencing tool", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 批量地理配准
    Populate(commands::populate::PopulateArgs),
    /// 检查单个记录/世界文件配对
    Inspect(commands::inspect::InspectArgs),
    /// 验证输入产物
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Populate(args) => commands::populate::execute(args),
        Commands::Inspect(args) => commands::inspect::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    }
}
