//! # Simulator - 单步推进
//!
//! 持有物理状态与控制器状态，每次调用 `advance()` 推进一个固定步长。
//!
//! # 单步顺序
//!
//! ```text
//! 1. error = h - z
//! 2. integral += error * dt
//! 3. derivative = (error - prev_error) / dt; prev_error = error
//! 4. A = Kp*error + Ki*integral + Kd*derivative
//! 5. A = max(A, 0)                        // 执行器只能吸引
//! 6. z <  z_p: F_up = A / max(z_p - z, floor)²
//!    z >= z_p: z = z_p; v = min(v, 0); F_up = 0
//! 7. a = (F_up - m*g) / m
//! 8. v += a*dt; z += v*dt                 // 半隐式欧拉
//! 9. z >= z_p: z = z_p; v = min(v, 0)
//!    z <= 0:   z = 0;   v = max(v, 0)
//! 10. 输出 (step*dt, z, A)
//! ```
//!
//! 平面分支每步重新判定，不保存模式标志。步骤 9 的平面钳位保证输出采样满足
//! `0 <= z <= z_p`；受力计算仍以步骤 6 的判定为准。
//!
//! # 示例
//!
//! ```rust
//! use levitate_sim::{SimulationConfig, Simulator};
//!
//! let config = SimulationConfig::default();
//! let mut sim = Simulator::new(&config).unwrap();
//! let sample = sim.advance();
//! assert_eq!(sample.time, 0.0);
//! assert!(sample.control_signal >= 0.0);
//! ```

use crate::config::SimulationConfig;
use crate::control::{ControllerState, PidController, PidTerms};
use crate::error::SimError;
use crate::history::Sample;
use crate::physics::{self, PhysicalState};

/// 仿真器完整状态
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulatorState {
    /// 控制器状态
    pub controller: ControllerState,

    /// 物理状态
    pub physical: PhysicalState,
}

impl SimulatorState {
    /// 配置给定的初始状态（控制器清零）
    pub fn initial(config: &SimulationConfig) -> Self {
        Self {
            controller: ControllerState::default(),
            physical: PhysicalState::new(config.initial_position, config.initial_velocity),
        }
    }
}

/// 单步详细报告
///
/// 用于诊断和测试；`advance()` 只返回其中的 `sample`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// 本步输出采样
    pub sample: Sample,

    /// PID 分项
    pub pid: PidTerms,

    /// 钳位后的控制信号 A
    pub control_signal: f64,

    /// 平面吸引力 F_up
    pub upward_force: f64,

    /// 加速度 a
    pub acceleration: f64,

    /// 本步积分后的速度
    pub velocity: f64,

    /// 本步开始时质点位于平面或其上方
    pub plane_contact: bool,

    /// 本步积分后到达平面（已钳位到 z_p）
    pub plane_reached: bool,

    /// 本步积分后触地
    pub ground_contact: bool,
}

/// 悬浮仿真器
#[derive(Debug, Clone)]
pub struct Simulator<'a> {
    config: &'a SimulationConfig,
    controller: PidController,
    physical: PhysicalState,
    step: usize,
}

impl<'a> Simulator<'a> {
    /// 创建仿真器
    ///
    /// 校验配置；状态取配置中的初始条件。
    pub fn new(config: &'a SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::from_state(config, SimulatorState::initial(config)))
    }

    /// 从指定状态开始仿真（不校验配置）
    ///
    /// 步计数从 0 开始。
    pub fn from_state(config: &'a SimulationConfig, state: SimulatorState) -> Self {
        Self {
            config,
            controller: PidController::with_state(
                config.target_height,
                config.gains,
                state.controller,
            ),
            physical: state.physical,
            step: 0,
        }
    }

    pub fn config(&self) -> &'a SimulationConfig {
        self.config
    }

    /// 当前状态快照
    pub fn state(&self) -> SimulatorState {
        SimulatorState {
            controller: self.controller.state(),
            physical: self.physical,
        }
    }

    /// 已推进的步数
    pub fn step_count(&self) -> usize {
        self.step
    }

    /// 是否已推进满 `config.steps()` 步
    pub fn is_finished(&self) -> bool {
        self.step >= self.config.steps()
    }

    /// 推进一步，返回本步采样
    pub fn advance(&mut self) -> Sample {
        self.advance_detailed().sample
    }

    /// 推进一步，返回详细报告
    pub fn advance_detailed(&mut self) -> StepReport {
        let config = self.config;
        let dt = config.dt;
        let time = self.step as f64 * dt;

        // 1-4. PID
        let pid = self.controller.step(self.physical.position, dt);

        // 5. 执行器钳位
        let control_signal = pid.output.max(0.0);

        // 6. 受力
        let plane_contact = self.physical.apply_plane_contact(config.plane_height);
        let upward_force = if plane_contact {
            0.0
        } else {
            let distance = physics::plane_distance(
                self.physical.position,
                config.plane_height,
                config.distance_floor,
            );
            physics::levitation_force(control_signal, distance)
        };

        // 7-8. 积分
        let acceleration = physics::net_acceleration(upward_force, config.mass, config.gravity);
        self.physical.integrate(acceleration, dt);

        // 9. 接触钳位：积分可能越过平面，输出前同样钳位
        let plane_reached = self.physical.apply_plane_contact(config.plane_height);
        let ground_contact = self.physical.apply_ground_contact();

        if plane_contact {
            tracing::trace!(step = self.step, "Mass resting on plane, F_up = 0");
        }
        if plane_reached {
            tracing::trace!(step = self.step, "Mass reached plane during integration");
        }
        if ground_contact {
            tracing::trace!(step = self.step, "Mass clamped to ground");
        }
        tracing::trace!(
            step = self.step,
            z = self.physical.position,
            v = self.physical.velocity,
            a = control_signal,
            "advance"
        );

        self.step += 1;

        StepReport {
            sample: Sample {
                time,
                position: self.physical.position,
                control_signal,
            },
            pid,
            control_signal,
            upward_force,
            acceleration,
            velocity: self.physical.velocity,
            plane_contact,
            plane_reached,
            ground_contact,
        }
    }

    /// 惰性采样序列
    ///
    /// 从当前状态开始，产出剩余的 `config.steps() - step_count()` 个采样。
    pub fn samples(self) -> SampleIter<'a> {
        SampleIter::from_simulator(self)
    }
}

/// 有限、可重启的惰性采样序列
///
/// 显示层每渲染一帧拉取一个采样；`restart()` 回到起始状态重新计算。
#[derive(Debug, Clone)]
pub struct SampleIter<'a> {
    start: Simulator<'a>,
    current: Simulator<'a>,
}

impl<'a> SampleIter<'a> {
    /// 从配置的初始状态开始
    pub fn new(config: &'a SimulationConfig) -> Result<Self, SimError> {
        Ok(Self::from_simulator(Simulator::new(config)?))
    }

    fn from_simulator(simulator: Simulator<'a>) -> Self {
        Self {
            start: simulator.clone(),
            current: simulator,
        }
    }

    /// 回到起始状态
    pub fn restart(&mut self) {
        self.current = self.start.clone();
    }

    /// 当前仿真器
    pub fn simulator(&self) -> &Simulator<'a> {
        &self.current
    }
}

impl Iterator for SampleIter<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.current.is_finished() {
            return None;
        }
        Some(self.current.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.config.steps().saturating_sub(self.current.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleIter<'_> {}
