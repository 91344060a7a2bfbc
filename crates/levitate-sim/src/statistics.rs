//! # 运行统计
//!
//! 对一次完整仿真的采样历史做汇总，供 CLI 输出和显示层坐标缩放使用。

use crate::config::SimulationConfig;
use crate::history::SampleHistory;

/// 默认稳定带宽（m）
pub const DEFAULT_SETTLING_BAND: f64 = 0.05;

/// 稳态误差统计窗口：最后 25% 的采样
const STEADY_STATE_FRACTION: f64 = 0.25;

/// 运行统计
#[derive(Debug, Clone, PartialEq)]
pub struct RunStatistics {
    /// 采样数
    pub sample_count: usize,

    /// 最大控制信号
    pub max_control_signal: f64,

    /// 最终高度（m）
    pub final_position: f64,

    /// 最高高度（m）
    pub peak_position: f64,

    /// 稳态误差：最后 25% 采样的平均 |h - z|（m）
    pub steady_state_error: f64,

    /// 稳定时间（s）
    ///
    /// 此后所有采样都在 `h ± settling_band` 内；从未稳定则为 `None`。
    pub settling_time: Option<f64>,

    /// 稳定带宽（m）
    pub settling_band: f64,

    /// 位于地面（z = 0）的采样数
    pub ground_samples: usize,
}

impl RunStatistics {
    /// 使用默认稳定带宽计算
    pub fn calculate(history: &SampleHistory, config: &SimulationConfig) -> Self {
        Self::calculate_with_band(history, config, DEFAULT_SETTLING_BAND)
    }

    /// 计算统计
    pub fn calculate_with_band(
        history: &SampleHistory,
        config: &SimulationConfig,
        settling_band: f64,
    ) -> Self {
        let positions = history.position();
        if positions.is_empty() {
            return Self {
                sample_count: 0,
                max_control_signal: 0.0,
                final_position: 0.0,
                peak_position: 0.0,
                steady_state_error: 0.0,
                settling_time: None,
                settling_band,
                ground_samples: 0,
            };
        }

        let target = config.target_height;

        let window = ((positions.len() as f64 * STEADY_STATE_FRACTION) as usize).max(1);
        let tail = &positions[positions.len() - window..];
        let steady_state_error =
            tail.iter().map(|z| (target - z).abs()).sum::<f64>() / tail.len() as f64;

        Self {
            sample_count: positions.len(),
            max_control_signal: history.max_control_signal(),
            final_position: positions[positions.len() - 1],
            peak_position: positions.iter().copied().fold(f64::MIN, f64::max),
            steady_state_error,
            settling_time: settling_time(history, target, settling_band),
            settling_band,
            ground_samples: positions.iter().filter(|&&z| z == 0.0).count(),
        }
    }

    /// 是否在带宽内稳定
    pub fn is_settled(&self) -> bool {
        self.settling_time.is_some()
    }
}

/// 稳定时间
///
/// 从后往前找最后一个越出带宽的采样，其后一个采样的时间即为稳定时间。
pub fn settling_time(history: &SampleHistory, target: f64, band: f64) -> Option<f64> {
    let positions = history.position();
    let settle_index = match positions.iter().rposition(|z| (z - target).abs() > band) {
        Some(last_outside) => last_outside + 1,
        None => 0,
    };
    history.time().get(settle_index).copied()
}
