//! 控制器模块
//!
//! - `Controller` trait - 控制器通用接口
//! - `PidController` - PID 高度控制器

pub mod controller;
pub mod pid;

// 重新导出常用类型
pub use controller::Controller;
pub use pid::{ControllerState, PidController, PidTerms};
