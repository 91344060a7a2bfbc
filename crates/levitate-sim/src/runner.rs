//! Run driver - 固定步数仿真循环
//!
//! 循环 `trunc(T / dt)` 次调用 `advance()`，结果追加到 `SampleHistory`。
//! 不检测收敛，不提前结束。

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::history::SampleHistory;
use crate::simulator::Simulator;
use std::time::Instant;

/// 运行完整仿真
///
/// # 返回
///
/// - `Ok(history)`: 长度为 `config.steps()` 的采样历史
/// - `Err(SimError::InvalidConfig)`: 配置校验失败
///
/// # 示例
///
/// ```rust
/// use levitate_sim::{SimulationConfig, run};
///
/// let config = SimulationConfig::default().with_duration(1.0);
/// let history = run(&config).unwrap();
/// assert_eq!(history.len(), 100);
/// ```
pub fn run(config: &SimulationConfig) -> Result<SampleHistory, SimError> {
    let mut simulator = Simulator::new(config)?;
    Ok(run_with(&mut simulator))
}

/// 从仿真器当前状态运行剩余步数
pub fn run_with(simulator: &mut Simulator<'_>) -> SampleHistory {
    let config = simulator.config();
    let remaining = config.steps().saturating_sub(simulator.step_count());

    tracing::info!(
        "Running levitation simulation: {} steps (dt = {} s, T = {} s), gains Kp={} Ki={} Kd={}",
        remaining,
        config.dt,
        config.duration,
        config.gains.kp,
        config.gains.ki,
        config.gains.kd
    );

    let started = Instant::now();
    let mut history = SampleHistory::with_capacity(remaining);
    for _ in 0..remaining {
        history.push(simulator.advance());
    }

    tracing::info!(
        "Simulation finished in {:?}: final z = {:.4} m, max A = {:.2}",
        started.elapsed(),
        history.last().map_or(0.0, |s| s.position),
        history.max_control_signal()
    );

    history
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_length_matches_steps() {
        let config = SimulationConfig::default().with_duration(2.0);
        let history = run(&config).unwrap();

        assert_eq!(history.len(), 200);
        assert_eq!(history.time().len(), history.position().len());
        assert_eq!(history.position().len(), history.control_signal().len());
    }

    #[test]
    fn test_run_time_axis() {
        let config = SimulationConfig::default().with_duration(1.0);
        let history = run(&config).unwrap();

        for (i, t) in history.time().iter().enumerate() {
            assert_eq!(*t, i as f64 * config.dt);
        }
    }

    #[test]
    fn test_run_invalid_config() {
        let config = SimulationConfig::default().with_duration(0.0);
        assert!(matches!(run(&config), Err(SimError::InvalidConfig { .. })));
    }

    #[test]
    fn test_run_rejects_oversized_step_count() {
        let config = SimulationConfig::default().with_duration(1e300);
        assert!(matches!(
            run(&config),
            Err(SimError::InvalidConfig { field: "duration", .. })
        ));
    }

    #[test]
    fn test_run_with_continues_from_state() {
        let config = SimulationConfig::default().with_duration(1.0);
        let mut simulator = Simulator::new(&config).unwrap();
        let head: Vec<_> = (0..30).map(|_| simulator.advance()).collect();

        let tail = run_with(&mut simulator);
        assert_eq!(tail.len(), 70);
        assert!(simulator.is_finished());

        let full = run(&config).unwrap();
        assert_eq!(full.get(29), head.last().copied());
        assert_eq!(full.get(30), tail.get(0));
    }
}
