//! # 仿真配置
//!
//! 悬浮系统的物理参数、PID 增益和时间步长。
//!
//! 配置在启动时创建一次，之后只读；通过引用传入 `Simulator`。
//! 支持从 TOML 加载，缺省字段使用默认值：
//!
//! ```toml
//! target_height = 1.2
//! duration = 10.0
//!
//! [gains]
//! kp = 120.0
//! ```

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 单次仿真允许的最大步数
///
/// 采样历史按步数预分配，超过此值的 `duration / dt` 在校验时拒绝。
pub const MAX_STEPS: usize = 10_000_000;

/// PID 增益
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PidGains {
    /// 比例增益 (Kp)
    pub kp: f64,
    /// 积分增益 (Ki)
    pub ki: f64,
    /// 微分增益 (Kd)
    pub kd: f64,
}

impl PidGains {
    pub const fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    /// 全零增益（控制信号恒为 0）
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Default for PidGains {
    fn default() -> Self {
        Self::new(150.0, 60.0, 40.0)
    }
}

/// 仿真配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// 质量 m（kg）
    pub mass: f64,

    /// 重力加速度 g（m/s²）
    pub gravity: f64,

    /// 带电平面高度 z_p（m）
    pub plane_height: f64,

    /// 目标高度 h（m）
    pub target_height: f64,

    /// 时间步长 dt（s）
    pub dt: f64,

    /// 仿真总时长 T（s）
    pub duration: f64,

    /// 平面距离下限（m）
    ///
    /// 防止质点贴近平面时平方反比项发散。
    pub distance_floor: f64,

    /// 初始高度（m）
    pub initial_position: f64,

    /// 初始速度（m/s）
    pub initial_velocity: f64,

    /// PID 增益
    pub gains: PidGains,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            gravity: 9.81,
            plane_height: 2.0,
            target_height: 1.0,
            dt: 0.01,
            duration: 20.0,
            distance_floor: 0.01,
            initial_position: 0.0,
            initial_velocity: 0.0,
            gains: PidGains::default(),
        }
    }
}

impl SimulationConfig {
    /// 设置 PID 增益
    pub fn with_gains(mut self, kp: f64, ki: f64, kd: f64) -> Self {
        self.gains = PidGains::new(kp, ki, kd);
        self
    }

    /// 设置仿真总时长
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// 设置时间步长
    pub fn with_time_step(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// 设置目标高度
    pub fn with_target_height(mut self, target_height: f64) -> Self {
        self.target_height = target_height;
        self
    }

    /// 设置初始状态
    pub fn with_initial_state(mut self, position: f64, velocity: f64) -> Self {
        self.initial_position = position;
        self.initial_velocity = velocity;
        self
    }

    /// 总步数 `trunc(T / dt)`
    pub fn steps(&self) -> usize {
        let steps = self.duration / self.dt;
        if steps.is_finite() && steps > 0.0 {
            steps as usize
        } else {
            0
        }
    }

    /// 校验配置
    ///
    /// 通过校验的配置保证 `advance()` 中所有算术都有定义。
    pub fn validate(&self) -> Result<(), SimError> {
        let fields = [
            ("mass", self.mass),
            ("gravity", self.gravity),
            ("plane_height", self.plane_height),
            ("target_height", self.target_height),
            ("dt", self.dt),
            ("duration", self.duration),
            ("distance_floor", self.distance_floor),
            ("initial_position", self.initial_position),
            ("initial_velocity", self.initial_velocity),
            ("gains.kp", self.gains.kp),
            ("gains.ki", self.gains.ki),
            ("gains.kd", self.gains.kd),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SimError::invalid(field, format!("must be finite, got {}", value)));
            }
        }

        if self.mass <= 0.0 {
            return Err(SimError::invalid("mass", format!("must be > 0, got {}", self.mass)));
        }
        if self.gravity < 0.0 {
            return Err(SimError::invalid(
                "gravity",
                format!("must be >= 0, got {}", self.gravity),
            ));
        }
        if self.plane_height <= 0.0 {
            return Err(SimError::invalid(
                "plane_height",
                format!("must be > 0, got {}", self.plane_height),
            ));
        }
        if self.dt <= 0.0 {
            return Err(SimError::invalid("dt", format!("must be > 0, got {}", self.dt)));
        }
        if self.steps() == 0 {
            return Err(SimError::invalid(
                "duration",
                format!("must cover at least one step (duration {} < dt {})", self.duration, self.dt),
            ));
        }
        if self.duration / self.dt > MAX_STEPS as f64 {
            return Err(SimError::invalid(
                "duration",
                format!(
                    "duration {} / dt {} exceeds {} steps",
                    self.duration, self.dt, MAX_STEPS
                ),
            ));
        }
        if self.distance_floor <= 0.0 {
            return Err(SimError::invalid(
                "distance_floor",
                format!("must be > 0, got {}", self.distance_floor),
            ));
        }
        if self.initial_position < 0.0 || self.initial_position > self.plane_height {
            return Err(SimError::invalid(
                "initial_position",
                format!(
                    "must lie in [0, {}], got {}",
                    self.plane_height, self.initial_position
                ),
            ));
        }

        if self.target_height < 0.0 || self.target_height > self.plane_height {
            tracing::warn!(
                "Target height {} m is outside [0, {}] m; the mass can never reach it",
                self.target_height,
                self.plane_height
            );
        }

        Ok(())
    }

    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, SimError> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!("Loaded simulation config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> Result<String, SimError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let content = self.to_toml_string()?;
        fs::write(path, content)?;
        Ok(())
    }
}
