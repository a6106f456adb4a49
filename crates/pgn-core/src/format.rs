//! Human-readable evaluation and elapsed-time strings.

use serde::Serialize;

/// Magnitude above which an evaluation is read as a mate distance.
pub const MATE_THRESHOLD: f64 = 10.0;

/// Formats an engine evaluation for display.
///
/// Absent values format as an empty string. Magnitudes above
/// [`MATE_THRESHOLD`] render as `M<n>` / `-M<n>`; everything else gets two
/// decimals with an explicit `+` on positive values. Values exactly halfway
/// between two hundredths round away from zero, so `0.125` is `+0.13`.
pub fn format_eval(evaluation: Option<f64>) -> String {
    let Some(value) = evaluation.filter(|v| v.is_finite()) else {
        return String::new();
    };

    if value.abs() > MATE_THRESHOLD {
        let distance = value.abs().floor() as u64;
        return if value > 0.0 {
            format!("M{}", distance)
        } else {
            format!("-M{}", distance)
        };
    }

    // -0.0 would otherwise print as "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}", sign, round_midpoint_away(value))
}

/// `{:.2}` rounds exact midpoints to even. The only midpoints a double can
/// hold exactly are odd multiples of 1/8, so those are nudged off the tie.
fn round_midpoint_away(value: f64) -> f64 {
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        value + value.signum() * 0.001
    } else {
        value
    }
}

/// Formats whole seconds as `M:SS`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Which side an evaluation favours, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvalBucket {
    WhiteVeryGood,
    WhiteGood,
    WhiteSlightlyGood,
    Neutral,
    BlackSlightlyGood,
    BlackGood,
    BlackVeryGood,
}

impl EvalBucket {
    /// Buckets an evaluation. Absent values and `[-0.1, 0.1]` are neutral.
    pub fn classify(evaluation: Option<f64>) -> Self {
        let Some(value) = evaluation else {
            return EvalBucket::Neutral;
        };

        if value > 2.0 {
            EvalBucket::WhiteVeryGood
        } else if value > 0.5 {
            EvalBucket::WhiteGood
        } else if value > 0.1 {
            EvalBucket::WhiteSlightlyGood
        } else if value < -2.0 {
            EvalBucket::BlackVeryGood
        } else if value < -0.5 {
            EvalBucket::BlackGood
        } else if value < -0.1 {
            EvalBucket::BlackSlightlyGood
        } else {
            EvalBucket::Neutral
        }
    }

    /// Class name used as a styling hook in HTML output.
    pub const fn css_class(self) -> &'static str {
        match self {
            EvalBucket::WhiteVeryGood => "eval-white-very-good",
            EvalBucket::WhiteGood => "eval-white-good",
            EvalBucket::WhiteSlightlyGood => "eval-white-slightly-good",
            EvalBucket::Neutral => "eval-neutral",
            EvalBucket::BlackSlightlyGood => "eval-black-slightly-good",
            EvalBucket::BlackGood => "eval-black-good",
            EvalBucket::BlackVeryGood => "eval-black-very-good",
        }
    }
}
