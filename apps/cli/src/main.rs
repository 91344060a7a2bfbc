//! # Levitate CLI
//!
//! 悬浮仿真的命令行入口与终端显示。
//!
//! ```bash
//! # 运行默认仿真并输出统计
//! levitate-cli run
//!
//! # 调整增益后动画显示（每 2 个采样一帧，50 Hz）
//! levitate-cli animate --kp 120 --kd 30 --stride 2 --fps 50
//!
//! # 写入默认配置，再查看生效配置
//! levitate-cli config init
//! levitate-cli config show --target 1.5
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod render;
mod settings;

use commands::{AnimateCommand, ConfigCommand, RunCommand};

/// Levitate CLI - PID 悬浮仿真工具
#[derive(Parser, Debug)]
#[command(name = "levitate-cli")]
#[command(about = "PID-stabilized levitation simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 运行仿真并输出统计
    Run {
        #[command(flatten)]
        args: RunCommand,
    },

    /// 终端动画显示
    Animate {
        #[command(flatten)]
        args: AnimateCommand,
    },

    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，不干扰帧输出）
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("levitate_cli=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { args } => args.execute(),

        Commands::Animate { args } => args.execute(),

        Commands::Config(cmd) => cmd.execute(),
    }
}
