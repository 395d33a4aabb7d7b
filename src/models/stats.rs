use std::fmt;

/// Luminance spread of a grayscale image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuminanceRange {
    /// Darkest pixel
    pub darkest: u8,
    /// Brightest pixel
    pub brightest: u8,
    /// Mean luminance, truncated
    pub mean: u8,
}

impl LuminanceRange {
    /// Range over a luminance buffer. `None` for an empty image.
    pub fn of(luminance: &[u8]) -> Option<Self> {
        let (&first, rest) = luminance.split_first()?;
        let (darkest, brightest, sum) = rest.iter().fold(
            (first, first, first as u64),
            |(lo, hi, sum), &v| (lo.min(v), hi.max(v), sum + v as u64),
        );
        Some(Self {
            darkest,
            brightest,
            mean: (sum / luminance.len() as u64) as u8,
        })
    }

    /// True when every pixel has the same luminance, so no threshold can split it
    pub fn is_flat(&self) -> bool {
        self.darkest == self.brightest
    }
}

impl fmt::Display for LuminanceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "luminance {}-{}, mean {}",
            self.darkest, self.brightest, self.mean
        )
    }
}

/// Black/white split of a binary image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    /// Black pixels
    pub black: usize,
    /// All pixels
    pub total: usize,
}

impl Balance {
    /// White pixels
    pub fn white(&self) -> usize {
        self.total - self.black
    }

    /// Share of black pixels in `[0, 1]`; 0 for an empty image
    pub fn black_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.black as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} black / {} white of {} pixels ({:.1}% black)",
            self.black,
            self.white(),
            self.total,
            self.black_ratio() * 100.0
        )
    }
}
