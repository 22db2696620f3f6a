//! Count-driven phrase selection
//!
//! A choice string is a `|` separated list of phrase variants. Each variant
//! may carry one range marker:
//!
//! | marker      | matches                  |
//! |-------------|--------------------------|
//! | `{3}`       | exactly 3                |
//! | `[2, 5]`    | 2 to 5 inclusive         |
//! | `[2, *]`    | 2 and above              |
//! | *(none)*    | ordinal bucket, see below |
//!
//! Unmarked variants are numbered 1, 2, 3... among themselves and the last
//! one is open ended. When there are several, the last one also takes a
//! count of zero, so `"apple|apples"` selects `apple` for 1 and `apples` for
//! 0 and everything from 2 upwards.
//!
//! Selection takes the first variant in written order whose range contains
//! the count. Narrower variants written after a wider one are shadowed. When
//! nothing matches the whole string is returned unchanged.

use std::fmt;
use std::ops::Range;

/// Separator between phrase variants
pub const VARIANT_SEPARATOR: char = '|';

/// Inclusive upper bound of a choice range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// Bounded by this value
    Inclusive(i64),
    /// No upper limit
    Unbounded,
}

impl UpperBound {
    /// Bound as an integer, with `i64::MAX` standing for unbounded
    pub const fn value(self) -> i64 {
        match self {
            Self::Inclusive(high) => high,
            Self::Unbounded => i64::MAX,
        }
    }
}

impl fmt::Display for UpperBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inclusive(high) => write!(f, "{high}"),
            Self::Unbounded => f.write_str("*"),
        }
    }
}

/// Range marker found in a phrase variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMarker {
    /// `{N}`
    Exact(i64),
    /// `[low, high]` or `[low, *]`
    Interval {
        /// Inclusive lower bound
        low: i64,
        /// Inclusive upper bound
        high: UpperBound,
    },
    /// No marker; range assigned by position among unmarked variants
    Implicit,
}

/// A parsed phrase variant with the counts it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRule {
    marker: RuleMarker,
    low: i64,
    high: UpperBound,
    zero: bool,
    text: String,
    raw: String,
}

impl ChoiceRule {
    /// Marker the variant was written with
    pub const fn marker(&self) -> RuleMarker {
        self.marker
    }

    /// Inclusive lower bound
    pub const fn low(&self) -> i64 {
        self.low
    }

    /// Inclusive upper bound
    pub const fn high(&self) -> UpperBound {
        self.high
    }

    /// Whether the variant was marked `{N}`
    pub const fn is_exact(&self) -> bool {
        matches!(self.marker, RuleMarker::Exact(_))
    }

    /// Whether the variant was marked `[low, high]`
    pub const fn is_interval(&self) -> bool {
        matches!(self.marker, RuleMarker::Interval { .. })
    }

    /// Whether a count of zero selects this variant outside its range.
    /// Only the last of several unmarked variants has this set.
    pub const fn covers_zero(&self) -> bool {
        self.zero
    }

    /// Phrase with its marker removed and surrounding whitespace trimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Variant exactly as written
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether `count` falls inside this variant's range
    pub const fn contains(&self, count: i64) -> bool {
        (self.low <= count && count <= self.high.value()) || (self.zero && count == 0)
    }
}

impl fmt::Display for ChoiceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.marker {
            RuleMarker::Exact(_) => "exact",
            RuleMarker::Interval { .. } => "interval",
            RuleMarker::Implicit => "implicit",
        };
        write!(f, "[{}, {}] {kind} => {:?}", self.low, self.high, self.text)?;
        if self.zero {
            f.write_str(", also 0")?;
        }
        Ok(())
    }
}

/// Parse a choice string into its rules, in written order.
///
/// The first pass classifies each variant by its first `{N}` marker, or
/// failing that its first `[low, high]` marker. The second pass numbers the
/// unmarked variants; the last one is left open and, unless it is the only
/// one, also takes zero.
pub fn parse_rules(translation: &str) -> Vec<ChoiceRule> {
    let mut rules: Vec<ChoiceRule> = translation
        .split(VARIANT_SEPARATOR)
        .map(classify)
        .collect();

    let implicit_total = rules
        .iter()
        .filter(|rule| rule.marker == RuleMarker::Implicit)
        .count();
    let implicit = rules
        .iter_mut()
        .filter(|rule| rule.marker == RuleMarker::Implicit);
    for (index, rule) in implicit.enumerate() {
        let position = i64::try_from(index + 1).unwrap_or(i64::MAX);
        let last = index + 1 == implicit_total;
        rule.low = position;
        rule.high = if last {
            UpperBound::Unbounded
        } else {
            UpperBound::Inclusive(position)
        };
        rule.zero = last && implicit_total > 1;
    }

    rules
}

/// First rule, in written order, whose range contains `count`
pub fn select(rules: &[ChoiceRule], count: i64) -> Option<&ChoiceRule> {
    rules.iter().find(|rule| rule.contains(count))
}

/// Pick the phrase for `count`, or the whole string when no rule matches
pub fn choose(translation: &str, count: i64) -> String {
    let rules = parse_rules(translation);
    select(&rules, count).map_or_else(|| translation.to_string(), |rule| rule.text.clone())
}

fn classify(segment: &str) -> ChoiceRule {
    if let Some((span, value)) = find_exact(segment) {
        return ChoiceRule {
            marker: RuleMarker::Exact(value),
            low: value,
            high: UpperBound::Inclusive(value),
            zero: false,
            text: strip_span(segment, span),
            raw: segment.to_string(),
        };
    }

    if let Some((span, low, high)) = find_interval(segment) {
        return ChoiceRule {
            marker: RuleMarker::Interval { low, high },
            low,
            high,
            zero: false,
            text: strip_span(segment, span),
            raw: segment.to_string(),
        };
    }

    ChoiceRule {
        marker: RuleMarker::Implicit,
        low: 0,
        high: UpperBound::Inclusive(0),
        zero: false,
        text: segment.to_string(),
        raw: segment.to_string(),
    }
}

/// Remove the marker at `span` and trim what is left
fn strip_span(segment: &str, span: Range<usize>) -> String {
    let (before, rest) = segment.split_at(span.start);
    let after = &rest[span.len()..];
    format!("{before}{after}").trim().to_string()
}

/// Length of the ASCII digit run at the start of `s`
fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Value of an ASCII digit run, saturating at `i64::MAX`
fn digits_value(digits: &str) -> i64 {
    digits.bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    })
}

/// Span and value of the first `{digits}` token
fn find_exact(segment: &str) -> Option<(Range<usize>, i64)> {
    segment.match_indices('{').find_map(|(start, _)| {
        let body = &segment[start + 1..];
        let len = leading_digits(body);
        if len == 0 || !body[len..].starts_with('}') {
            return None;
        }
        Some((start..start + len + 2, digits_value(&body[..len])))
    })
}

/// Span and bounds of the first `[digits,<ws>(digits|*)]` token
fn find_interval(segment: &str) -> Option<(Range<usize>, i64, UpperBound)> {
    segment
        .match_indices('[')
        .find_map(|(start, _)| scan_interval(segment, start))
}

fn scan_interval(segment: &str, start: usize) -> Option<(Range<usize>, i64, UpperBound)> {
    let body = &segment[start + 1..];
    let low_len = leading_digits(body);
    if low_len == 0 {
        return None;
    }
    let low = digits_value(&body[..low_len]);

    let upper = body[low_len..].strip_prefix(',')?.trim_start();
    let (high, rest) = if let Some(rest) = upper.strip_prefix('*') {
        (UpperBound::Unbounded, rest)
    } else {
        let high_len = leading_digits(upper);
        if high_len == 0 {
            return None;
        }
        (
            UpperBound::Inclusive(digits_value(&upper[..high_len])),
            &upper[high_len..],
        )
    };

    let tail = rest.strip_prefix(']')?;
    Some((start..segment.len() - tail.len(), low, high))
}
