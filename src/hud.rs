//! HUD text for the statistics labels
//!
//! Values are rounded to whole numbers; statistics without a denominator yet
//! show `?`.

use crate::sim::SessionStats;

/// Placeholder for a statistic that is not defined yet
pub const UNDEFINED: &str = "?";

/// One frame's worth of label text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub targets: String,
    pub error: String,
    pub accuracy: String,
}

impl HudText {
    pub fn from_stats(stats: &SessionStats) -> Self {
        Self {
            score: format!("Score: {}", round(stats.score)),
            targets: format!("Targets: {}", stats.targets_created),
            error: format!("Avg Error: {}", display_or_undefined(stats.average_error())),
            accuracy: match stats.accuracy() {
                Some(acc) => format!("Accuracy: {}%", round(acc * 100.0)),
                None => format!("Accuracy: {}", UNDEFINED),
            },
        }
    }

    /// Labels in display order
    pub fn lines(&self) -> [&str; 4] {
        [
            self.score.as_str(),
            self.error.as_str(),
            self.accuracy.as_str(),
            self.targets.as_str(),
        ]
    }
}

#[inline]
fn round(value: f64) -> i64 {
    value.round() as i64
}

fn display_or_undefined(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| round(v).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_text() {
        let stats = SessionStats {
            targets_created: 3,
            ..Default::default()
        };
        let hud = HudText::from_stats(&stats);
        assert_eq!(hud.score, "Score: 0");
        assert_eq!(hud.targets, "Targets: 3");
        assert_eq!(hud.error, "Avg Error: ?");
        assert_eq!(hud.accuracy, "Accuracy: ?");
    }

    #[test]
    fn test_rounding() {
        let stats = SessionStats {
            score: 12.5,
            total_error: 41.0,
            hit_count: 2,
            miss_count: 1,
            targets_created: 5,
        };
        let hud = HudText::from_stats(&stats);
        assert_eq!(hud.score, "Score: 13");
        assert_eq!(hud.error, "Avg Error: 21");
        assert_eq!(hud.accuracy, "Accuracy: 67%");
        assert_eq!(hud.targets, "Targets: 5");
    }

    #[test]
    fn test_miss_only_accuracy() {
        let stats = SessionStats {
            miss_count: 1,
            ..Default::default()
        };
        let hud = HudText::from_stats(&stats);
        assert_eq!(hud.accuracy, "Accuracy: 0%");
        assert_eq!(hud.error, "Avg Error: ?");
    }

    #[test]
    fn test_lines_order() {
        let hud = HudText::from_stats(&SessionStats::default());
        assert_eq!(
            hud.lines(),
            ["Score: 0", "Avg Error: ?", "Accuracy: ?", "Targets: 0"]
        );
    }
}
