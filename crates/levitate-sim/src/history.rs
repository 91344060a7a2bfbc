//! 采样历史
//!
//! 每步一个 `(time, position, control_signal)` 三元组，只追加。
//! 三个序列长度始终相等，按步序号索引；显示层只读。

/// 单步采样
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// 采样时间 `step * dt`（s）
    pub time: f64,

    /// 本步结束时的高度（m）
    pub position: f64,

    /// 本步使用的控制信号 A（已钳位，>= 0）
    pub control_signal: f64,
}

/// 采样历史（列式存储）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleHistory {
    time: Vec<f64>,
    position: Vec<f64>,
    control_signal: Vec<f64>,
}

impl SampleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配容量
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            position: Vec::with_capacity(capacity),
            control_signal: Vec::with_capacity(capacity),
        }
    }

    /// 追加一个采样
    pub fn push(&mut self, sample: Sample) {
        self.time.push(sample.time);
        self.position.push(sample.position);
        self.control_signal.push(sample.control_signal);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// 时间序列
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// 高度序列
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// 控制信号序列
    pub fn control_signal(&self) -> &[f64] {
        &self.control_signal
    }

    /// 按步序号取采样
    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time: *self.time.get(index)?,
            position: *self.position.get(index)?,
            control_signal: *self.control_signal.get(index)?,
        })
    }

    /// 最后一个采样
    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// 按步序号遍历采样
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        (0..self.len()).map(move |i| Sample {
            time: self.time[i],
            position: self.position[i],
            control_signal: self.control_signal[i],
        })
    }

    /// 最大控制信号
    ///
    /// 显示层据此确定控制信号坐标轴范围；空历史返回 0。
    pub fn max_control_signal(&self) -> f64 {
        self.control_signal.iter().copied().fold(0.0, f64::max)
    }
}

impl FromIterator<Sample> for SampleHistory {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut history = SampleHistory::with_capacity(iter.size_hint().0);
        for sample in iter {
            history.push(sample);
        }
        history
    }
}

impl Extend<Sample> for SampleHistory {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(step: usize, position: f64, control_signal: f64) -> Sample {
        Sample {
            time: step as f64 * 0.01,
            position,
            control_signal,
        }
    }

    #[test]
    fn test_empty_history() {
        let history = SampleHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.last(), None);
        assert_eq!(history.max_control_signal(), 0.0);
    }

    #[test]
    fn test_push_keeps_sequences_aligned() {
        let mut history = SampleHistory::new();
        history.push(sample(0, 0.1, 5.0));
        history.push(sample(1, 0.2, 7.5));
        history.push(sample(2, 0.25, 3.0));

        assert_eq!(history.len(), 3);
        assert_eq!(history.time().len(), 3);
        assert_eq!(history.position(), &[0.1, 0.2, 0.25]);
        assert_eq!(history.control_signal(), &[5.0, 7.5, 3.0]);
        assert_eq!(history.get(1), Some(sample(1, 0.2, 7.5)));
        assert_eq!(history.get(3), None);
        assert_eq!(history.last(), Some(sample(2, 0.25, 3.0)));
    }

    #[test]
    fn test_max_control_signal() {
        let history: SampleHistory =
            vec![sample(0, 0.0, 1.0), sample(1, 0.0, 42.0), sample(2, 0.0, 0.0)]
                .into_iter()
                .collect();
        assert_eq!(history.max_control_signal(), 42.0);
    }

    #[test]
    fn test_iter_matches_columns() {
        let mut history = SampleHistory::new();
        history.extend((0..5).map(|i| sample(i, i as f64, 2.0 * i as f64)));

        let collected: Vec<Sample> = history.iter().collect();
        assert_eq!(collected.len(), 5);
        for (i, s) in collected.iter().enumerate() {
            assert_eq!(s.position, history.position()[i]);
            assert_eq!(s.control_signal, history.control_signal()[i]);
        }
    }
}
