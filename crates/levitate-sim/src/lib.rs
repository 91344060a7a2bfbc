//! # levitate-sim - PID 悬浮仿真核心
//!
//! 单个质点悬浮在带电平面下方，由 PID 反馈控制器稳定在目标高度。
//!
//! # 架构
//!
//! - **配置** (`config`): 物理参数、增益、步长，支持 TOML
//! - **控制** (`control`): `Controller` trait 与 `PidController`
//! - **物理** (`physics`): 平方反比吸引力、半隐式欧拉积分、接触钳位
//! - **仿真器** (`simulator`): `advance()` 单步推进，惰性采样序列
//! - **运行** (`runner`): 固定步数循环，产出 `SampleHistory`
//! - **统计** (`statistics`): 稳定时间、稳态误差等汇总
//!
//! # 快速开始
//!
//! ```rust
//! use levitate_sim::{RunStatistics, SimulationConfig, run};
//!
//! let config = SimulationConfig::default();
//! let history = run(&config).unwrap();
//! let stats = RunStatistics::calculate(&history, &config);
//! assert_eq!(stats.sample_count, 2000);
//! ```
//!
//! 库本身只通过 `tracing` 输出日志，不安装 subscriber。

pub mod config;
pub mod control;
pub mod error;
pub mod history;
pub mod physics;
pub mod runner;
pub mod simulator;
pub mod statistics;

pub use config::{MAX_STEPS, PidGains, SimulationConfig};
pub use control::{Controller, ControllerState, PidController};
pub use error::SimError;
pub use history::{Sample, SampleHistory};
pub use physics::PhysicalState;
pub use runner::{run, run_with};
pub use simulator::{SampleIter, Simulator, SimulatorState, StepReport};
pub use statistics::RunStatistics;
