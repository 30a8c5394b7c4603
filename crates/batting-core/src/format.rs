//! Box-score rendering of averages

/// How to render a batting average as text
///
/// The default matches box-score convention: three decimals with the
/// leading zero dropped, so `0.2857` prints as `.286`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AverageFormat {
    /// Digits after the decimal point
    pub precision: usize,
    /// Keep the `0` before the decimal point for averages below one
    pub leading_zero: bool,
}

impl AverageFormat {
    /// Create the box-score format
    pub fn new() -> Self {
        Self {
            precision: 3,
            leading_zero: false,
        }
    }

    /// Set the number of decimals
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Keep the leading zero
    pub fn with_leading_zero(mut self) -> Self {
        self.leading_zero = true;
        self
    }

    /// Render an average
    pub fn format(&self, average: f64) -> String {
        let text = format!("{:.*}", self.precision, average);
        if self.leading_zero {
            return text;
        }

        if let Some(rest) = text.strip_prefix("0.") {
            format!(".{rest}")
        } else if let Some(rest) = text.strip_prefix("-0.") {
            format!("-.{rest}")
        } else {
            text
        }
    }
}

impl Default for AverageFormat {
    fn default() -> Self {
        Self::new()
    }
}
