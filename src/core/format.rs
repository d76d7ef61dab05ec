//! Compact numeric-format mini-language used for ring and tooltip labels.
//!
//! A pattern encodes sign inversion (leading `-`), grouping and decimal
//! separators, minimum integer digits (leading `0`s), and minimum fraction
//! digits (trailing `0`s after the decimal separator). `"#,##0.00"` formats
//! `1234.5` as `"1,234.50"`.

use serde::{Deserialize, Serialize};

/// Formats `value` according to `pattern`.
///
/// Pure and stateless: identical inputs always produce identical output, no
/// locale involved. An empty pattern or a non-finite value returns the
/// value's default textual form unchanged; the function never fails.
#[must_use]
pub fn format_number(pattern: &str, value: f64) -> String {
    if pattern.is_empty() || !value.is_finite() {
        return value.to_string();
    }

    let signed = if pattern.starts_with('-') { -value } else { value };
    let negative = signed < 0.0;
    let magnitude = signed.abs();

    // Separator scan: every char that is not a digit, a sign, or `#`.
    // Rightmost is the decimal separator; the leftmost doubles as the
    // grouping separator only when at least two such chars are present.
    let separators: Vec<char> = pattern
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '-' && *c != '+' && *c != '#')
        .collect();
    let decimal_sep = separators.last().copied().unwrap_or('.');
    let group_sep = if separators.len() >= 2 {
        separators[0]
    } else {
        ','
    };

    // Pattern halves around the first decimal separator. An empty fraction
    // segment counts as no fraction segment at all.
    let mut segments = pattern.splitn(3, decimal_sep);
    let int_pattern = segments.next().unwrap_or("");
    let frac_pattern = segments.next().filter(|segment| !segment.is_empty());

    // Round to the fraction width, then trim trailing decimal zeros so the
    // trailing-`0` rule below can re-pad exactly as far as the pattern asks.
    let frac_digits = frac_pattern.map_or(0, |segment| segment.chars().count());
    let fixed = to_fixed(magnitude, frac_digits);
    let rounded: f64 = fixed.parse().unwrap_or(magnitude);
    let trimmed = trim_trailing_zeros(&fixed);

    let pos_trail_zero = frac_pattern.map(|segment| {
        segment
            .chars()
            .rev()
            .position(|c| c == '0')
            .map_or(-1, |from_end| (segment.chars().count() - 1 - from_end) as i64)
    });
    let trimmed_frac_len = trimmed
        .split('.')
        .nth(1)
        .map(|fraction| fraction.chars().count() as i64);
    let refixed = match (trimmed_frac_len, pos_trail_zero) {
        (None, Some(pos)) => to_fixed(rounded, (pos + 1).max(0) as usize),
        (None, None) => to_fixed(rounded, 0),
        (Some(len), Some(pos)) if len <= pos => to_fixed(rounded, (pos + 1) as usize),
        _ => trimmed,
    };

    let mut split = refixed.splitn(2, '.');
    let mut int_part: String = split.next().unwrap_or("").to_owned();
    let frac_part = split.next();

    // Minimum integer digits come from the first `0` in the integer pattern
    // once grouping separators are stripped out of it.
    let group_segments: Vec<&str> = int_pattern.split(group_sep).collect();
    let int_pattern_digits: Vec<char> = group_segments.concat().chars().collect();
    match int_pattern_digits.iter().position(|c| *c == '0') {
        Some(first_zero) => {
            let min_len = int_pattern_digits.len() - first_zero;
            while int_part.chars().count() < min_len {
                int_part.insert(0, '0');
            }
        }
        None => {
            // A literal zero integer part renders blank when the pattern
            // asks for no padding at all (and the pattern has an integer
            // segment to say so).
            if !int_pattern_digits.is_empty() && int_part.chars().all(|c| c == '0') {
                int_part.clear();
            }
        }
    }

    // Group size: length of the integer-pattern segment after the last
    // grouping separator, active only when the segment right after the
    // first separator is non-empty.
    let group_size = group_segments
        .get(1)
        .filter(|segment| !segment.is_empty())
        .map_or(0, |_| {
            group_segments
                .last()
                .map_or(0, |segment| segment.chars().count())
        });
    let grouped = if group_size > 0 {
        insert_group_separators(&int_part, group_sep, group_size)
    } else {
        int_part
    };

    let fraction = match (frac_pattern, frac_part) {
        (Some(_), Some(fraction)) if !fraction.is_empty() => {
            format!("{decimal_sep}{fraction}")
        }
        _ => String::new(),
    };

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}{fraction}")
}

/// Fixed-point rendering with round-half-away-from-zero, the rounding the
/// format pattern language promises.
fn to_fixed(value: f64, digits: usize) -> String {
    let digits = digits.min(100);
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        format!("{:.*}", digits, scaled.round() / factor)
    } else {
        format!("{:.*}", digits, value)
    }
}

fn trim_trailing_zeros(fixed: &str) -> String {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        fixed.to_owned()
    }
}

fn insert_group_separators(int_part: &str, group_sep: char, group_size: usize) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    let len = digits.len();
    let offset = len % group_size;
    let mut grouped = String::with_capacity(len + len / group_size);
    for (i, digit) in digits.iter().enumerate() {
        grouped.push(*digit);
        let boundary = (i as i64 - offset as i64 + 1) % group_size as i64 == 0;
        if boundary && i + group_size < len {
            grouped.push(group_sep);
        }
    }
    grouped
}

fn default_multiplier() -> f64 {
    1.0
}

/// Display format applied to ring labels and tooltip values: a pattern for
/// [`format_number`], a multiplier applied before formatting, and a literal
/// suffix appended after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFormat {
    #[serde(default)]
    pub pattern: String,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    #[serde(default)]
    pub suffix: String,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            multiplier: 1.0,
            suffix: String::new(),
        }
    }
}

impl DisplayFormat {
    #[must_use]
    pub fn new(
        pattern: impl Into<String>,
        multiplier: f64,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            multiplier,
            suffix: suffix.into(),
        }
    }

    #[must_use]
    pub fn apply(&self, value: f64) -> String {
        let formatted = format_number(&self.pattern, value * self.multiplier);
        format!("{formatted}{}", self.suffix)
    }
}
