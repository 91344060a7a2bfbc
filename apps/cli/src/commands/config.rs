//! 配置管理命令
//!
//! 查看生效配置、校验配置文件、写入默认配置

use anyhow::{Context, Result};
use clap::Subcommand;
use levitate_sim::SimulationConfig;
use std::fs;
use std::path::PathBuf;

use crate::settings::{SimArgs, default_config_path};

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 输出生效配置（TOML）
    Show {
        #[command(flatten)]
        sim: SimArgs,
    },

    /// 校验配置文件
    Check {
        /// 配置文件路径（默认使用标准路径）
        path: Option<PathBuf>,
    },

    /// 写入默认配置
    Init {
        /// 目标路径（默认使用标准路径）
        path: Option<PathBuf>,

        /// 覆盖已有文件，不询问
        #[arg(short, long)]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            ConfigCommand::Show { sim } => Self::show_(&sim),

            ConfigCommand::Check { path } => Self::check_(path),

            ConfigCommand::Init { path, force } => Self::init_(path, force),
        }
    }

    fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path),
            None => default_config_path(),
        }
    }

    fn show_(sim: &SimArgs) -> Result<()> {
        let config = sim.resolve()?;
        print!("{}", config.to_toml_string()?);
        Ok(())
    }

    fn check_(path: Option<PathBuf>) -> Result<()> {
        let path = Self::resolve_path(path)?;
        let config = SimulationConfig::load_from_file(&path)
            .with_context(|| format!("配置文件无效: {}", path.display()))?;

        println!("✅ 配置有效: {}", path.display());
        println!("  步数: {}", config.steps());
        println!(
            "  增益: Kp={} Ki={} Kd={}",
            config.gains.kp, config.gains.ki, config.gains.kd
        );
        Ok(())
    }

    fn init_(path: Option<PathBuf>, force: bool) -> Result<()> {
        let path = Self::resolve_path(path)?;

        if path.exists() && !force {
            let overwrite = inquire::Confirm::new(&format!("{} 已存在，是否覆盖？", path.display()))
                .with_default(false)
                .prompt()
                .context("读取确认失败")?;
            if !overwrite {
                println!("❌ 操作已取消");
                return Ok(());
            }
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("创建配置目录失败")?;
        }
        SimulationConfig::default()
            .save_to_file(&path)
            .with_context(|| format!("写入配置文件失败: {}", path.display()))?;

        println!("✅ 已写入默认配置: {}", path.display());
        Ok(())
    }
}
