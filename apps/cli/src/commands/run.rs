//! run 命令
//!
//! 运行完整仿真并输出统计摘要

use anyhow::Result;
use clap::Args;
use levitate_sim::statistics::DEFAULT_SETTLING_BAND;
use levitate_sim::{RunStatistics, SimulationConfig, run};

use crate::settings::SimArgs;

/// 仿真运行命令参数
#[derive(Args, Debug)]
pub struct RunCommand {
    #[command(flatten)]
    pub sim: SimArgs,

    /// 稳定带宽（m）
    #[arg(long, default_value_t = DEFAULT_SETTLING_BAND)]
    pub band: f64,
}

impl RunCommand {
    pub fn execute(&self) -> Result<()> {
        if !(self.band > 0.0 && self.band.is_finite()) {
            anyhow::bail!("稳定带宽必须为正数，得到 {}", self.band);
        }

        let config = self.sim.resolve()?;
        let history = run(&config)?;
        let stats = RunStatistics::calculate_with_band(&history, &config, self.band);

        print!("{}", format_summary(&config, &stats));
        Ok(())
    }
}

/// 格式化统计摘要
pub fn format_summary(config: &SimulationConfig, stats: &RunStatistics) -> String {
    let settling = match stats.settling_time {
        Some(t) => format!("{:.2} s (±{} m)", t, stats.settling_band),
        None => format!("未稳定 (±{} m)", stats.settling_band),
    };

    format!(
        "📊 仿真结果:\n\
         \x20 增益: Kp={} Ki={} Kd={}\n\
         \x20 目标高度: {:.3} m   平面高度: {:.3} m\n\
         \x20 步数: {} (dt = {} s, T = {} s)\n\
         \x20 最终高度: {:.4} m\n\
         \x20 最高高度: {:.4} m\n\
         \x20 稳态误差: {:.5} m\n\
         \x20 稳定时间: {}\n\
         \x20 最大控制信号: {:.2}\n\
         \x20 触地采样: {}\n",
        config.gains.kp,
        config.gains.ki,
        config.gains.kd,
        config.target_height,
        config.plane_height,
        stats.sample_count,
        config.dt,
        config.duration,
        stats.final_position,
        stats.peak_position,
        stats.steady_state_error,
        settling,
        stats.max_control_signal,
        stats.ground_samples,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(band: f64) -> RunCommand {
        RunCommand {
            sim: SimArgs::default(),
            band,
        }
    }

    #[test]
    fn test_rejects_bad_band() {
        assert!(command(f64::NAN).execute().is_err());
        assert!(command(f64::INFINITY).execute().is_err());
        assert!(command(0.0).execute().is_err());
        assert!(command(-0.05).execute().is_err());
    }

    #[test]
    fn test_summary_contains_statistics() {
        let config = SimulationConfig::default().with_duration(1.0);
        let history = run(&config).unwrap();
        let stats = RunStatistics::calculate(&history, &config);

        let summary = format_summary(&config, &stats);
        assert!(summary.contains("Kp=150 Ki=60 Kd=40"));
        assert!(summary.contains("步数: 100"));
        assert!(summary.contains("最大控制信号: 4150.60"));
    }

    #[test]
    fn test_summary_unsettled() {
        let config = SimulationConfig::default().with_gains(0.0, 0.0, 0.0).with_duration(1.0);
        let history = run(&config).unwrap();
        let stats = RunStatistics::calculate(&history, &config);

        let summary = format_summary(&config, &stats);
        assert!(summary.contains("未稳定"));
        assert!(summary.contains("触地采样: 100"));
    }
}
