// File: crates/spectrum-core/src/parser.rs
// Summary: Lenient parser turning pasted tab-delimited text into parallel mass/intensity vectors.

use tracing::{debug, trace};

use crate::densify::{densify, DenseAxis};
use crate::error::{Result, SpectrumError};

/// One (mass, intensity) observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    pub mass: f64,
    pub intensity: f64,
}

/// Peaks in input line order, kept as two parallel columns.
/// Contract: `masses.len() == intensities.len()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    pub masses: Vec<f64>,
    pub intensities: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize { self.masses.len() }

    pub fn is_empty(&self) -> bool { self.masses.is_empty() }

    pub fn push(&mut self, peak: Peak) {
        self.masses.push(peak.mass);
        self.intensities.push(peak.intensity);
    }

    pub fn peaks(&self) -> impl Iterator<Item = Peak> + '_ {
        self.masses
            .iter()
            .zip(&self.intensities)
            .map(|(&mass, &intensity)| Peak { mass, intensity })
    }

    /// Expand into a continuous, step-1 mass axis.
    pub fn densify(&self) -> Result<DenseAxis> {
        densify(&self.masses, &self.intensities)
    }
}

impl FromIterator<Peak> for Spectrum {
    fn from_iter<I: IntoIterator<Item = Peak>>(iter: I) -> Self {
        let mut s = Spectrum::default();
        for p in iter { s.push(p); }
        s
    }
}

/// Parse `<mass>\t<intensity>` lines. Lines that do not have exactly two
/// numeric fields are dropped without error; if none survive the whole
/// input is rejected with [`SpectrumError::UserInputEmpty`].
pub fn parse_peaks(input: &str) -> Result<Spectrum> {
    let mut skipped = 0usize;
    let spectrum: Spectrum = input
        .trim()
        .split('\n')
        .enumerate()
        .filter_map(|(n, line)| {
            let peak = parse_line(line);
            if peak.is_none() {
                skipped += 1;
                trace!(line = n + 1, text = line, "skipping malformed line");
            }
            peak
        })
        .collect();

    debug!(accepted = spectrum.len(), skipped, "parsed peak list");
    if spectrum.is_empty() {
        return Err(SpectrumError::UserInputEmpty);
    }
    Ok(spectrum)
}

/// Parse a single line; `None` unless it holds exactly two numeric fields.
pub fn parse_line(line: &str) -> Option<Peak> {
    let mut fields = line.split('\t').map(str::trim);
    let (Some(mass), Some(intensity), None) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };
    Some(Peak { mass: parse_number(mass)?, intensity: parse_number(intensity)? })
}

/// Parse the longest decimal prefix of `field`, so `"100,5"` reads as 100 and
/// `"7 counts"` as 7. A field with no leading digits is not a number.
/// Infinities and overflow to infinity are rejected; they have no place on an axis.
fn parse_number(field: &str) -> Option<f64> {
    let end = decimal_prefix_len(field.as_bytes())?;
    field[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Length of `[+-]? digits* ('.' digits*)? ([eE] [+-]? digits+)?` at the start
/// of `b`, or `None` when the mantissa has no digit.
fn decimal_prefix_len(b: &[u8]) -> Option<usize> {
    let digits = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_digits = digits(i);
    i += int_digits;
    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = digits(i + 1);
        i += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(b.get(i + 1), Some(b'+' | b'-')));
        let exp_digits = digits(i + 1 + sign);
        if exp_digits > 0 {
            i += 1 + sign + exp_digits;
        }
    }
    Some(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_needs_exactly_two_fields() {
        assert_eq!(parse_line("100\t5"), Some(Peak { mass: 100.0, intensity: 5.0 }));
        assert_eq!(parse_line("100"), None);
        assert_eq!(parse_line("100\t5\t7"), None);
        assert_eq!(parse_line("100\t"), None);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(parse_line("  100.5 \t -2e1 \r"), Some(Peak { mass: 100.5, intensity: -20.0 }));
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        assert_eq!(parse_line("NaN\t1"), None);
        assert_eq!(parse_line("1\tinf"), None);
        assert_eq!(parse_line("abc\t1"), None);
    }

    #[test]
    fn numbers_are_read_up_to_the_first_stray_character() {
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number(".5x"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e"), Some(1.0));
        assert_eq!(parse_number("1e+"), Some(1.0));
        assert_eq!(parse_number("-2.5E-1kg"), Some(-0.25));
        assert_eq!(parse_number("+.e1"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn infinities_and_overflow_are_rejected() {
        assert_eq!(parse_number("Infinity"), None);
        assert_eq!(parse_number("-Infinity"), None);
        assert_eq!(parse_number("1e999"), None);
    }
}
