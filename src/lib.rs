//! Core logic for the Live Speedometer Monitor.
//!
//! Units, the simulated sample set, and the tiered alarm classification
//! live here, free of any Yew or browser dependency so they can be
//! tested on the host target.

use log::debug;
use rand::Rng;

/// Default gauge parameters
pub mod defaults {
    /// Upper bound of the dial scale; samples are drawn from `[0, MAX_VALUE)`.
    pub const MAX_VALUE: f64 = 200.0;
}

/// The three supported display units, in selection order.
///
/// These are labels only; the streams are independent and never
/// converted between each other.
pub const UNIT_LABELS: [&str; 3] = ["CPS", "CPM", "µSv/h"];

pub type UnitIndex = usize;

/// One simulated measurement per unit, index-aligned with [`UNIT_LABELS`].
///
/// A set is always replaced wholesale: either all three values come from
/// the same generator tick, or none do.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet([f64; 3]);

impl SampleSet {
    /// The all-zero set shown before the first generator tick.
    pub fn zeroed() -> Self {
        Self([0.0; 3])
    }

    /// Draw a fresh set of three independent uniform values in
    /// `[0, MAX_VALUE)`.
    pub fn simulate(rng: &mut impl Rng) -> Self {
        let values = std::array::from_fn(|_| rng.random_range(0.0..defaults::MAX_VALUE));
        debug!("simulated sample set: {:?}", values);
        Self(values)
    }

    /// Value for the given unit, `0.0` when the index is out of range.
    pub fn value_for(&self, unit: UnitIndex) -> f64 {
        self.0.get(unit).copied().unwrap_or(0.0)
    }
}

impl From<[f64; 3]> for SampleSet {
    fn from(values: [f64; 3]) -> Self {
        Self(values)
    }
}

/// Raw threshold text exactly as entered.
///
/// The fields are stored verbatim (empty or non-numeric content is
/// legal) and only interpreted by [`ThresholdText::parse`] at
/// classification time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdText {
    pub low: String,
    pub medium: String,
    pub high: String,
}

impl ThresholdText {
    /// Best-effort parse of all three fields.
    ///
    /// `None` means the thresholds are not (fully) configured; it is
    /// not an error and the caller degrades to the Normal tier.
    pub fn parse(&self) -> Option<ThresholdLevels> {
        Some(ThresholdLevels {
            low: parse_threshold(&self.low)?,
            medium: parse_threshold(&self.medium)?,
            high: parse_threshold(&self.high)?,
        })
    }
}

fn parse_threshold(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Numeric thresholds after a successful parse.
///
/// Ordering low < medium < high is assumed but never enforced; the
/// strict check order in [`classify_alarm`] resolves out-of-order
/// entries silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdLevels {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

/// Chip color tier, matching the widget's CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Default,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Default => "chip-default",
            Severity::Success => "chip-success",
            Severity::Warning => "chip-warning",
            Severity::Error => "chip-error",
        }
    }
}

/// A classified alarm tier: display label, glyph, and chip severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmStatus {
    pub label: &'static str,
    pub glyph: &'static str,
    pub severity: Severity,
}

impl AlarmStatus {
    pub const NORMAL: Self = Self {
        label: "Normal",
        glyph: "⚪",
        severity: Severity::Default,
    };
    pub const LOW: Self = Self {
        label: "Low",
        glyph: "🟢",
        severity: Severity::Success,
    };
    pub const MEDIUM: Self = Self {
        label: "Medium",
        glyph: "🟡",
        severity: Severity::Warning,
    };
    pub const HIGH: Self = Self {
        label: "High",
        glyph: "🔴",
        severity: Severity::Error,
    };
}

/// Map the current CPS value and the raw threshold text to an alarm tier.
///
/// Checks run strictly in high → medium → low order with exclusive
/// comparisons; any unparsable threshold degrades the whole
/// classification to Normal regardless of the value.
pub fn classify_alarm(value: f64, thresholds: &ThresholdText) -> AlarmStatus {
    let Some(levels) = thresholds.parse() else {
        return AlarmStatus::NORMAL;
    };
    if value > levels.high {
        AlarmStatus::HIGH
    } else if value > levels.medium {
        AlarmStatus::MEDIUM
    } else if value > levels.low {
        AlarmStatus::LOW
    } else {
        AlarmStatus::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds(low: &str, medium: &str, high: &str) -> ThresholdText {
        ThresholdText {
            low: low.to_string(),
            medium: medium.to_string(),
            high: high.to_string(),
        }
    }

    #[test]
    fn classification_tiers_with_ordered_thresholds() {
        let t = thresholds("10", "20", "30");
        assert_eq!(classify_alarm(50.0, &t), AlarmStatus::HIGH);
        assert_eq!(classify_alarm(25.0, &t), AlarmStatus::MEDIUM);
        assert_eq!(classify_alarm(15.0, &t), AlarmStatus::LOW);
        assert_eq!(classify_alarm(5.0, &t), AlarmStatus::NORMAL);
    }

    #[test]
    fn tier_boundaries_are_exclusive() {
        let t = thresholds("10", "20", "30");
        // value equal to a threshold falls into the tier below
        assert_eq!(classify_alarm(30.0, &t), AlarmStatus::MEDIUM);
        assert_eq!(classify_alarm(20.0, &t), AlarmStatus::LOW);
        assert_eq!(classify_alarm(10.0, &t), AlarmStatus::NORMAL);
    }

    #[test]
    fn unparsable_threshold_degrades_to_normal() {
        assert_eq!(
            classify_alarm(50.0, &thresholds("", "5", "10")),
            AlarmStatus::NORMAL
        );
        assert_eq!(
            classify_alarm(50.0, &thresholds("1", "abc", "10")),
            AlarmStatus::NORMAL
        );
        assert_eq!(
            classify_alarm(50.0, &thresholds("1", "5", "NaN")),
            AlarmStatus::NORMAL
        );
    }

    #[test]
    fn whitespace_around_numbers_is_accepted() {
        let t = thresholds(" 10 ", "20", " 30");
        assert_eq!(classify_alarm(25.0, &t), AlarmStatus::MEDIUM);
    }

    #[test]
    fn out_of_order_thresholds_follow_check_order() {
        // high entered lower than low: the high check still runs first
        let t = thresholds("30", "20", "10");
        assert_eq!(classify_alarm(15.0, &t), AlarmStatus::HIGH);
        assert_eq!(classify_alarm(5.0, &t), AlarmStatus::NORMAL);
    }

    #[test]
    fn threshold_text_round_trips_verbatim() {
        let t = thresholds("12.5", "", "007");
        assert_eq!(t.low, "12.5");
        assert_eq!(t.medium, "");
        assert_eq!(t.high, "007");
    }

    #[test]
    fn value_for_reads_by_index_without_mutating() {
        let set = SampleSet::from([10.0, 20.0, 30.0]);
        assert_eq!(set.value_for(0), 10.0);
        assert_eq!(set.value_for(2), 30.0);
        assert_eq!(set.value_for(7), 0.0);
        // reads leave the set untouched
        assert_eq!(set, SampleSet::from([10.0, 20.0, 30.0]));
    }

    #[test]
    fn simulated_samples_stay_in_range() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let set = SampleSet::simulate(&mut rng);
            for unit in 0..UNIT_LABELS.len() {
                let v = set.value_for(unit);
                assert!(
                    (0.0..defaults::MAX_VALUE).contains(&v),
                    "value {} out of range",
                    v
                );
            }
        }
    }

    #[test]
    fn zeroed_set_reads_zero_for_every_unit() {
        let set = SampleSet::zeroed();
        for unit in 0..UNIT_LABELS.len() {
            assert_eq!(set.value_for(unit), 0.0);
        }
    }
}
