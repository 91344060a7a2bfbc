//! animate 命令
//!
//! 终端动画：先完整运行一次得到控制信号最大值（坐标缩放需要），
//! 再用惰性采样序列逐帧拉取、渲染，`spin_sleep` 控制帧率。

use anyhow::Result;
use clap::Args;
use levitate_sim::{SampleIter, run};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::render::{FrameView, RenderOptions, render_frame};
use crate::settings::SimArgs;

/// 清屏并回到左上角
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// 动画命令参数
#[derive(Args, Debug)]
pub struct AnimateCommand {
    #[command(flatten)]
    pub sim: SimArgs,

    /// 帧率（Hz）
    #[arg(long, default_value_t = 100.0)]
    pub fps: f64,

    /// 每隔 N 个采样渲染一帧
    #[arg(long, default_value_t = 1)]
    pub stride: usize,

    /// 轨道行数
    #[arg(long, default_value_t = 22)]
    pub rows: usize,

    /// 不清屏（逐帧追加输出）
    #[arg(long)]
    pub no_clear: bool,
}

impl AnimateCommand {
    pub fn execute(&self) -> Result<()> {
        if !(self.fps > 0.0 && self.fps.is_finite()) {
            anyhow::bail!("帧率必须为正数，得到 {}", self.fps);
        }
        if self.stride == 0 {
            anyhow::bail!("stride 必须 >= 1");
        }
        let period = Duration::try_from_secs_f64(1.0 / self.fps)
            .map_err(|e| anyhow::anyhow!("帧率 {} 对应的帧间隔无效: {}", self.fps, e))?;

        let config = self.sim.resolve()?;
        let max_control_signal = run(&config)?.max_control_signal();

        let running = Arc::new(AtomicBool::new(true));
        let r = running.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            r.store(false, Ordering::SeqCst);
        }) {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
        }

        let options = RenderOptions {
            rows: self.rows,
            ..Default::default()
        };
        let mut stdout = std::io::stdout().lock();
        let mut frames = 0usize;
        let mut next_tick = Instant::now();

        for sample in SampleIter::new(&config)?.step_by(self.stride) {
            if !running.load(Ordering::SeqCst) {
                writeln!(stdout, "\n🛑 动画被用户中断")?;
                break;
            }

            let view = FrameView::new(sample, &config, max_control_signal);
            if !self.no_clear {
                write!(stdout, "{}", CLEAR_SCREEN)?;
            }
            write!(stdout, "{}", render_frame(&view, &options))?;
            stdout.flush()?;
            frames += 1;

            // 睡眠到下一个锚点（扣除渲染耗时）
            next_tick += period;
            let now = Instant::now();
            if next_tick > now {
                spin_sleep::sleep(next_tick - now);
            } else {
                tracing::debug!("Frame overrun by {:?}", now - next_tick);
                next_tick = now;
            }
        }

        tracing::info!("Rendered {} frames", frames);
        Ok(())
    }
}
