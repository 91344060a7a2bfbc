//! 终端帧渲染
//!
//! 纯函数：给定一个采样和显示范围，生成一帧文本。
//!
//! ```text
//!  t =  1.23 s   z = 0.987 m
//!  2.20 |
//!       |      ==========      <- 平面 z_p
//!       |
//!       |          O           <- 质点
//!       |      - - - - - -     <- 目标 h
//!  0.00 |____________________
//!  A |##########          | A = 123.4
//! ```

use levitate_sim::{Sample, SimulationConfig};

/// 轨道顶部留白（m），与平面上方留出空间
const TRACK_HEADROOM: f64 = 0.2;

/// 控制信号坐标上方留白比例
const BAR_HEADROOM: f64 = 1.1;

/// 渲染尺寸
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// 轨道行数
    pub rows: usize,
    /// 轨道列宽
    pub track_width: usize,
    /// 控制信号条宽度
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rows: 22,
            track_width: 21,
            bar_width: 40,
        }
    }
}

/// 一帧所需的数据
#[derive(Debug, Clone, Copy)]
pub struct FrameView {
    pub sample: Sample,
    pub plane_height: f64,
    pub target_height: f64,
    /// 控制信号条满刻度
    pub control_scale: f64,
}

impl FrameView {
    /// 控制信号满刻度取 `1.1 * max(A)`
    pub fn new(sample: Sample, config: &SimulationConfig, max_control_signal: f64) -> Self {
        Self {
            sample,
            plane_height: config.plane_height,
            target_height: config.target_height,
            control_scale: max_control_signal * BAR_HEADROOM,
        }
    }
}

/// 高度映射到行号（0 为顶行）
fn row_of(z: f64, top: f64, rows: usize) -> usize {
    let last = rows.saturating_sub(1);
    let fraction = ((top - z) / top).clamp(0.0, 1.0);
    ((fraction * last as f64).round() as usize).min(last)
}

/// 渲染一帧
pub fn render_frame(view: &FrameView, options: &RenderOptions) -> String {
    let rows = options.rows.max(2);
    let width = options.track_width.max(3);
    let top = view.plane_height + TRACK_HEADROOM;

    let plane_row = row_of(view.plane_height, top, rows);
    let target_row = row_of(view.target_height, top, rows);
    let ball_row = row_of(view.sample.position, top, rows);
    let center = width / 2;

    let mut out = String::new();
    out.push_str(&format!(
        " t = {:>6.2} s   z = {:.3} m\n",
        view.sample.time, view.sample.position
    ));

    for row in 0..rows {
        let label = if row == 0 {
            format!("{:>5.2}", top)
        } else if row == rows - 1 {
            format!("{:>5.2}", 0.0)
        } else {
            " ".repeat(5)
        };

        let mut cells: Vec<char> = vec![' '; width];
        if row == target_row {
            for (i, cell) in cells.iter_mut().enumerate() {
                if i % 2 == 0 {
                    *cell = '-';
                }
            }
        }
        if row == plane_row {
            let half = width / 4;
            for cell in &mut cells[center - half..=center + half] {
                *cell = '=';
            }
        }
        if row == rows - 1 {
            for cell in cells.iter_mut().filter(|c| **c == ' ') {
                *cell = '_';
            }
        }
        if row == ball_row {
            cells[center] = 'O';
        }

        let line: String = cells.into_iter().collect();
        out.push_str(&format!("{} |{}\n", label, line.trim_end()));
    }

    let control = view.sample.control_signal;
    let filled = if view.control_scale > 0.0 {
        ((control / view.control_scale).clamp(0.0, 1.0) * options.bar_width as f64).round() as usize
    } else {
        0
    };
    out.push_str(&format!(
        " A |{}{}| A = {:.1}\n",
        "#".repeat(filled),
        " ".repeat(options.bar_width - filled.min(options.bar_width)),
        control
    ));

    out
}
