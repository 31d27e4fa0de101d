//! Signed fixed-point formats and quantization of taps.
use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::Result;

/// Signed two's complement fixed-point format.
///
/// Formats can be parsed from the following notations (case-insensitive):
///
/// | Notation       | Word bits | Fraction bits |
/// |----------------|-----------|---------------|
/// | `Q<m>.<n>`     | `m + n`   | `n`           |
/// | `Q<n>`         | `n + 1`   | `n`           |
/// | `fxp-s<m>/<n>` | `m`       | `n`           |
///
/// Example usage:
/// ```
/// use firxover::FixedPointFormat;
///
/// let q15: FixedPointFormat = "Q1.15".parse().unwrap();
/// assert_eq!(q15, "fxp-s16/15".parse::<FixedPointFormat>().unwrap());
/// assert_eq!(q15.quantize(0.5), 16384);
/// assert_eq!(q15.quantize(1.5), 32767);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPointFormat {
    word_bits: u32,
    frac_bits: u32,
}

impl FixedPointFormat {
    /// Largest supported word width.
    pub const MAX_WORD_BITS: u32 = 64;

    /// Creates a format with `word_bits` in total, `frac_bits` of them after the binary point.
    pub fn new(word_bits: u32, frac_bits: u32) -> Result<Self> {
        if word_bits > Self::MAX_WORD_BITS || word_bits <= frac_bits {
            return Err(Error::InvalidFormatString(format!(
                "fxp-s{word_bits}/{frac_bits}"
            )));
        }
        Ok(FixedPointFormat {
            word_bits,
            frac_bits,
        })
    }

    /// Total number of bits, including the sign.
    pub fn word_bits(&self) -> u32 {
        self.word_bits
    }

    /// Number of bits after the binary point.
    pub fn frac_bits(&self) -> u32 {
        self.frac_bits
    }

    /// Smallest representable code, `-2^(word_bits - 1)`.
    pub fn min_code(&self) -> i64 {
        i64::MIN >> (Self::MAX_WORD_BITS - self.word_bits)
    }

    /// Largest representable code, `2^(word_bits - 1) - 1`.
    pub fn max_code(&self) -> i64 {
        i64::MAX >> (Self::MAX_WORD_BITS - self.word_bits)
    }

    /// Quantizes `value`, rounding half to even and saturating at the limits of the format.
    pub fn quantize(&self, value: f64) -> i64 {
        self.quantize_checked(value).0
    }

    /// Quantizes all `taps`.
    pub fn quantize_taps(&self, taps: &[f64]) -> Vec<i64> {
        let mut clipped = 0;
        let codes = taps
            .iter()
            .map(|&t| {
                let (code, saturated) = self.quantize_checked(t);
                if saturated {
                    clipped += 1;
                }
                code
            })
            .collect();
        if clipped > 0 {
            debug!("{clipped} of {} taps saturated in {self}", taps.len());
        }
        codes
    }

    fn quantize_checked(&self, value: f64) -> (i64, bool) {
        let scaled = (value * 2f64.powi(self.frac_bits as i32)).round_ties_even();
        let min = self.min_code();
        let max = self.max_code();
        if scaled < min as f64 {
            (min, true)
        } else if scaled > max as f64 {
            (max, true)
        } else {
            // float to int casts saturate, which covers the inexact max of 64 bit words
            (scaled as i64, false)
        }
    }
}

impl fmt::Display for FixedPointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fxp-s{}/{}", self.word_bits, self.frac_bits)
    }
}

impl FromStr for FixedPointFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormatString(s.to_string());
        let lower = s.trim().to_ascii_lowercase();

        let (word_bits, frac_bits) = if let Some(q) = lower.strip_prefix('q') {
            match q.split_once('.') {
                Some((m, n)) => {
                    let m = bits(m).ok_or_else(invalid)?;
                    let n = bits(n).ok_or_else(invalid)?;
                    (m.checked_add(n).ok_or_else(invalid)?, n)
                }
                None => {
                    let n = bits(q).ok_or_else(invalid)?;
                    (n.checked_add(1).ok_or_else(invalid)?, n)
                }
            }
        } else if let Some(fxp) = lower.strip_prefix("fxp-s") {
            let (m, n) = fxp.split_once('/').ok_or_else(invalid)?;
            (bits(m).ok_or_else(invalid)?, bits(n).ok_or_else(invalid)?)
        } else {
            return Err(invalid());
        };

        FixedPointFormat::new(word_bits, frac_bits).map_err(|_| invalid())
    }
}

fn bits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Taps of both crossover filters as fixed-point codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedTaps {
    /// Format of the codes
    pub format: FixedPointFormat,
    /// Lowpass codes
    pub lowpass: Vec<i64>,
    /// Highpass codes
    pub highpass: Vec<i64>,
}

impl QuantizedTaps {
    /// Quantizes lowpass and highpass taps to `format`.
    pub fn new(format: FixedPointFormat, lowpass: &[f64], highpass: &[f64]) -> Self {
        QuantizedTaps {
            format,
            lowpass: format.quantize_taps(lowpass),
            highpass: format.quantize_taps(highpass),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<(u32, u32)> {
        s.parse::<FixedPointFormat>()
            .map(|f| (f.word_bits(), f.frac_bits()))
    }

    #[test]
    fn notations() {
        assert_eq!(parse("Q1.15").unwrap(), (16, 15));
        assert_eq!(parse("Q15").unwrap(), (16, 15));
        assert_eq!(parse("fxp-s16/15").unwrap(), (16, 15));
        assert_eq!(parse("q2.30").unwrap(), (32, 30));
        assert_eq!(parse("  FXP-S24/23 ").unwrap(), (24, 23));
        assert_eq!(parse("Q63").unwrap(), (64, 63));
        assert_eq!(parse("fxp-s8/0").unwrap(), (8, 0));
    }

    #[test]
    fn invalid_notations() {
        for s in [
            "garbage", "", "Q", "Q.15", "Q1.", "Q1.15x", "Q-1.15", "Q+15", "fxp-u16/15",
            "fxp-s16", "fxp-s16/", "fxp-s/15", "xQ15", "Q1 .15",
        ] {
            assert_eq!(
                parse(s),
                Err(Error::InvalidFormatString(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn out_of_range() {
        assert!(parse("Q0.15").is_err());
        assert!(parse("Q64").is_err());
        assert!(parse("fxp-s65/15").is_err());
        assert!(parse("fxp-s16/16").is_err());
        assert!(parse("Q99999999999.1").is_err());
        assert!(FixedPointFormat::new(16, 15).is_ok());
        assert!(FixedPointFormat::new(0, 0).is_err());
    }

    #[test]
    fn display() {
        let f: FixedPointFormat = "Q1.15".parse().unwrap();
        assert_eq!(f.to_string(), "fxp-s16/15");
        assert_eq!(f.to_string().parse::<FixedPointFormat>().unwrap(), f);
    }

    #[test]
    fn limits() {
        let f = FixedPointFormat::new(16, 15).unwrap();
        assert_eq!((f.min_code(), f.max_code()), (-32768, 32767));
        let f = FixedPointFormat::new(1, 0).unwrap();
        assert_eq!((f.min_code(), f.max_code()), (-1, 0));
        let f = FixedPointFormat::new(64, 63).unwrap();
        assert_eq!((f.min_code(), f.max_code()), (i64::MIN, i64::MAX));
    }

    #[test]
    fn quantize() {
        let f = FixedPointFormat::new(16, 15).unwrap();
        assert_eq!(f.quantize(0.5), 16384);
        assert_eq!(f.quantize(1.5), 32767);
        assert_eq!(f.quantize(-1.0), -32768);
        assert_eq!(f.quantize(-2.0), -32768);
        assert_eq!(f.quantize(0.0), 0);
        // half to even
        assert_eq!(f.quantize(0.5 / 32768.0), 0);
        assert_eq!(f.quantize(1.5 / 32768.0), 2);
        assert_eq!(f.quantize(-2.5 / 32768.0), -2);
    }

    #[test]
    fn quantize_wide() {
        let f = FixedPointFormat::new(64, 63).unwrap();
        assert_eq!(f.quantize(1.0), i64::MAX);
        assert_eq!(f.quantize(-1.0), i64::MIN);
        assert_eq!(f.quantize(0.5), 1 << 62);
    }

    #[test]
    fn quantize_taps() {
        let f = FixedPointFormat::new(8, 7).unwrap();
        let q = QuantizedTaps::new(f, &[0.25, 1.0, -1.25], &[0.5]);
        assert_eq!(q.lowpass, vec![32, 127, -128]);
        assert_eq!(q.highpass, vec![64]);
        assert_eq!(q.format, f);
    }
}
