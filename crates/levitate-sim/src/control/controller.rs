//! Controller trait - 控制器通用接口
//!
//! # 设计理念
//!
//! - **Tick 模式**: 仿真循环驱动，控制器只负责计算
//! - **时间感知**: 显式传入 `dt`，便于单元测试
//! - **无执行器约束**: 控制器输出原始信号，钳位由执行器（`Simulator`）负责
//!
//! # 示例
//!
//! ```rust
//! use levitate_sim::control::Controller;
//!
//! struct Proportional {
//!     target: f64,
//!     kp: f64,
//! }
//!
//! impl Controller for Proportional {
//!     fn tick(&mut self, measured: f64, _dt: f64) -> f64 {
//!         self.kp * (self.target - measured)
//!     }
//!
//!     fn reset(&mut self) {}
//! }
//!
//! let mut p = Proportional { target: 1.0, kp: 2.0 };
//! assert_eq!(p.tick(0.5, 0.01), 1.0);
//! ```

/// 控制器通用接口
///
/// `tick()` 每个仿真步调用一次，不会失败：`dt` 由已校验的配置保证为正。
pub trait Controller {
    /// 计算一步控制输出
    ///
    /// # 参数
    ///
    /// - `measured`: 当前测量值（质点高度）
    /// - `dt`: 时间步长（秒）
    fn tick(&mut self, measured: f64, dt: f64) -> f64;

    /// 重置内部状态（积分、上次误差）
    fn reset(&mut self);
}
