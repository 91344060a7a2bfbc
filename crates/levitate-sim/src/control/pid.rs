//! PID Controller - 比例-积分-微分控制器
//!
//! # 算法
//!
//! ```text
//! output = Kp * e + Ki * ∫e dt + Kd * de/dt
//! ```
//!
//! 其中：
//! - `e` = 目标高度 - 当前高度（误差）
//! - `∫e dt` = 累积误差（积分项），按 `integral += e * dt` 离散累积
//! - `de/dt` = `(e - prev_error) / dt`（一阶差分，不做滤波）
//!
//! # 特性
//!
//! - **无积分饱和保护**: 积分项无界累积，改变它会改变可观测的动态
//! - **无输出钳位**: 执行器约束（A >= 0）在 `Simulator` 中施加
//!
//! # 示例
//!
//! ```rust
//! use levitate_sim::control::{Controller, PidController};
//! use levitate_sim::PidGains;
//!
//! let mut pid = PidController::new(1.0, PidGains::new(10.0, 0.5, 0.1));
//! let output = pid.tick(0.5, 0.01);
//! assert!(output > 0.0);
//! ```

use super::controller::Controller;
use crate::config::PidGains;

/// 控制器状态
///
/// 初始为零，运行中不重置。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerState {
    /// 积分项累积值（误差 × dt）
    pub integral: f64,

    /// 上一次的误差（用于计算微分）
    pub prev_error: f64,
}

/// PID 单步计算的分项结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidTerms {
    /// 误差 `h - z`
    pub error: f64,
    /// 更新后的积分
    pub integral: f64,
    /// 差分导数
    pub derivative: f64,
    /// 原始输出（未钳位）
    pub output: f64,
}

/// PID 控制器
#[derive(Debug, Clone)]
pub struct PidController {
    /// 目标高度
    target: f64,

    /// 增益
    gains: PidGains,

    /// 积分与上次误差
    state: ControllerState,
}

impl PidController {
    /// 创建新的 PID 控制器，状态清零
    pub fn new(target: f64, gains: PidGains) -> Self {
        PidController {
            target,
            gains,
            state: ControllerState::default(),
        }
    }

    /// 从已有状态恢复控制器
    pub fn with_state(target: f64, gains: PidGains, state: ControllerState) -> Self {
        PidController {
            target,
            gains,
            state,
        }
    }

    /// 获取目标高度
    pub fn target(&self) -> f64 {
        self.target
    }

    /// 获取增益
    pub fn gains(&self) -> PidGains {
        self.gains
    }

    /// 获取控制器状态
    ///
    /// 用于调试和监控。
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// 计算一步并返回所有分项
    ///
    /// 顺序固定：误差 → 积分 → 微分（并更新 `prev_error`）→ 输出。
    pub fn step(&mut self, measured: f64, dt: f64) -> PidTerms {
        let error = self.target - measured;

        self.state.integral += error * dt;

        let derivative = (error - self.state.prev_error) / dt;
        self.state.prev_error = error;

        let output = self.gains.kp * error
            + self.gains.ki * self.state.integral
            + self.gains.kd * derivative;

        PidTerms {
            error,
            integral: self.state.integral,
            derivative,
            output,
        }
    }
}

impl Controller for PidController {
    fn tick(&mut self, measured: f64, dt: f64) -> f64 {
        self.step(measured, dt).output
    }

    fn reset(&mut self) {
        self.state = ControllerState::default();
    }
}
