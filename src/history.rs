//! The operation history: an append-only log of completed operations
//!
//! Unlike the stack and the memories the history has no hard cap; it keeps
//! growing for as long as the session lasts. That is deliberate, not an
//! oversight.

/// Entries allocated at startup
pub const INITIAL_CAPACITY: usize = 10;
/// Entries added on each overflow
pub const GROWTH_STEP: usize = 10;

/// Append-only log of formatted operation records.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Record a two-operand operation. `y` is the first-popped operand, so
    /// the entry reads in the order the operation was applied:
    /// `3 4 +` logs `4 + 3 = 7`.
    pub fn record_binary(&mut self, y: f64, x: f64, op: &str, result: f64) {
        self.append(format!(
            "{} {} {} = {}",
            format_compact(y),
            op,
            format_compact(x),
            format_compact(result)
        ));
    }

    /// Record a single-operand operation: `9 sqrt` logs `9 sqrt = 3`.
    pub fn record_unary(&mut self, x: f64, op: &str, result: f64) {
        self.append(format!(
            "{} {} = {}",
            format_compact(x),
            op,
            format_compact(result)
        ));
    }

    fn append(&mut self, entry: String) {
        if self.entries.len() == self.entries.capacity() {
            self.entries.reserve(GROWTH_STEP);
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compact number formatting for log entries and panel rows: up to six
/// significant digits, switching to exponent form for very large or very
/// small magnitudes, trailing zeros trimmed.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let exp = value.abs().log10().floor() as i32;
    if !(-5..6).contains(&exp) {
        // %g territory: 1.23457e8, mantissa trimmed of trailing zeros
        let mantissa = value / 10f64.powi(exp);
        let m = format!("{:.5}", mantissa);
        let m = m.trim_end_matches('0').trim_end_matches('.');
        return format!("{}e{}", m, exp);
    }

    let decimals = (5 - exp).max(0) as usize;
    let s = format!("{:.*}", decimals, value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
