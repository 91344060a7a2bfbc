//! 仿真参数解析
//!
//! 优先级：命令行参数 > 配置文件 > 默认值。
//!
//! 配置文件路径：
//! - `--config <path>` 指定（文件必须存在）
//! - 否则 `<config_dir>/levitate/config.toml`，不存在时使用默认配置

use anyhow::{Context, Result};
use clap::Args;
use levitate_sim::SimulationConfig;
use std::path::PathBuf;

/// 默认配置文件路径
pub fn default_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法确定配置目录"))?;

    path.push("levitate");
    path.push("config.toml");
    Ok(path)
}

/// 仿真参数（各命令共享）
#[derive(Args, Debug, Clone, Default)]
pub struct SimArgs {
    /// 配置文件路径（TOML）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 比例增益 Kp
    #[arg(long)]
    pub kp: Option<f64>,

    /// 积分增益 Ki
    #[arg(long)]
    pub ki: Option<f64>,

    /// 微分增益 Kd
    #[arg(long)]
    pub kd: Option<f64>,

    /// 目标高度（m）
    #[arg(long)]
    pub target: Option<f64>,

    /// 仿真总时长（s）
    #[arg(long)]
    pub duration: Option<f64>,

    /// 时间步长（s）
    #[arg(long)]
    pub dt: Option<f64>,
}

impl SimArgs {
    /// 解析出最终配置并校验
    pub fn resolve(&self) -> Result<SimulationConfig> {
        let mut config = self.load_base()?;
        self.apply_overrides(&mut config);
        config.validate().context("仿真配置无效")?;
        Ok(config)
    }

    fn load_base(&self) -> Result<SimulationConfig> {
        if let Some(path) = &self.config {
            return SimulationConfig::load_from_file(path)
                .with_context(|| format!("加载配置文件失败: {}", path.display()));
        }

        let path = match default_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("No default config directory ({}), using defaults", e);
                return Ok(SimulationConfig::default());
            },
        };

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(SimulationConfig::default());
        }

        SimulationConfig::load_from_file(&path)
            .with_context(|| format!("加载配置文件失败: {}", path.display()))
    }

    fn apply_overrides(&self, config: &mut SimulationConfig) {
        if let Some(kp) = self.kp {
            config.gains.kp = kp;
        }
        if let Some(ki) = self.ki {
            config.gains.ki = ki;
        }
        if let Some(kd) = self.kd {
            config.gains.kd = kd;
        }
        if let Some(target) = self.target {
            config.target_height = target;
        }
        if let Some(duration) = self.duration {
            config.duration = duration;
        }
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
    }
}
