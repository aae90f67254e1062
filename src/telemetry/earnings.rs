pub const INITIAL_EARNINGS: f64 = 450.0;
pub const EARNINGS_INCREMENT: f64 = 0.0042;
pub const EARNINGS_UNIT: &str = "RIT";

/// Monotonic earnings counter advanced once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct EarningsAccumulator {
    value: f64,
    increment: f64,
    ticks: u64,
}

impl EarningsAccumulator {
    /// Negative increments are treated as zero so the value never decreases.
    pub fn new(initial: f64, increment: f64) -> Self {
        Self {
            value: initial,
            increment: increment.max(0.0),
            ticks: 0,
        }
    }

    pub fn tick(&mut self) {
        self.value += self.increment;
        self.ticks += 1;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn formatted(&self, unit: &str) -> String {
        format_earnings(self.value, unit)
    }
}

impl Default for EarningsAccumulator {
    fn default() -> Self {
        Self::new(INITIAL_EARNINGS, EARNINGS_INCREMENT)
    }
}

pub fn format_earnings(value: f64, unit: &str) -> String {
    format!("{value:.4} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_value() {
        let acc = EarningsAccumulator::default();
        assert_eq!(acc.formatted(EARNINGS_UNIT), "450.0000 RIT");
        assert_eq!(acc.ticks(), 0);
    }

    #[test]
    fn value_after_k_ticks() {
        let mut acc = EarningsAccumulator::default();
        for k in 1..=1_000u64 {
            acc.tick();
            let expected = INITIAL_EARNINGS + EARNINGS_INCREMENT * k as f64;
            assert!((acc.value() - expected).abs() < 1e-4);
        }
        assert_eq!(acc.ticks(), 1_000);
    }

    #[test]
    fn formats_four_decimals() {
        let mut acc = EarningsAccumulator::default();
        acc.tick();
        assert_eq!(acc.formatted("RIT"), "450.0042 RIT");
        assert_eq!(format_earnings(454.5042, "RIT"), "454.5042 RIT");
        assert_eq!(format_earnings(12.0, "ETH"), "12.0000 ETH");
    }

    #[test]
    fn negative_increment_never_decreases() {
        let mut acc = EarningsAccumulator::new(10.0, -1.0);
        acc.tick();
        assert_eq!(acc.value(), 10.0);
    }
}
