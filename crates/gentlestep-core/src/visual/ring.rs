/// Circular progress indicator driven by session progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    fraction: f64,
}

impl ProgressRing {
    pub fn new(progress: f64) -> Self {
        let fraction = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        Self { fraction }
    }

    /// Portion of the ring stroke that is drawn.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Whole percent, truncated.
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0) as u8
    }

    pub fn accessibility_value(&self) -> String {
        format!("{} percent complete", self.percent())
    }

    /// Horizontal bar of `width` cells, e.g. `[#####.....]`.
    pub fn render_bar(&self, width: usize) -> String {
        let filled = ((self.fraction * width as f64).round() as usize).min(width);
        format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_progress() {
        assert_eq!(ProgressRing::new(1.7).fraction(), 1.0);
        assert_eq!(ProgressRing::new(-0.2).fraction(), 0.0);
        assert_eq!(ProgressRing::new(f64::NAN).fraction(), 0.0);
    }

    #[test]
    fn percent_truncates() {
        assert_eq!(ProgressRing::new(0.999).percent(), 99);
        assert_eq!(ProgressRing::new(1.0).accessibility_value(), "100 percent complete");
    }

    #[test]
    fn bar_has_fixed_width() {
        assert_eq!(ProgressRing::new(0.5).render_bar(10), "[#####.....]");
        assert_eq!(ProgressRing::new(0.0).render_bar(4), "[....]");
        assert_eq!(ProgressRing::new(1.0).render_bar(4), "[####]");
    }
}
