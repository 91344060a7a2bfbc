//! 命令定义和实现

pub mod animate;
pub mod config;
pub mod run;

pub use animate::AnimateCommand;
pub use config::ConfigCommand;
pub use run::RunCommand;
