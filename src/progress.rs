/// Display-side progress math: a pure function of (current index, total).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// 1-based position label, e.g. "Question 3 of 10".
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.current + 1, self.total)
    }

    /// Fraction of questions sitting before the current one, in 0.0..=1.0.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f64 / self.total as f64
    }

    /// Fixed-width bar of `width` cells, filled proportionally.
    pub fn bar(&self, width: usize) -> String {
        let filled = (self.ratio() * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }
}

pub fn format_percent(score: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", score as f64 / total as f64 * 100.0)
}
