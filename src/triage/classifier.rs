use serde::{Deserialize, Serialize};

/// Score at or above which a case without red flags needs a doctor.
pub const URGENT_SCORE_THRESHOLD: u32 = 7;

/// Coarse urgency classification, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TriageLevel {
    Home,
    Urgent,
    Emergency,
}

impl TriageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Urgent => "URGENT",
            Self::Emergency => "EMERGENCY",
        }
    }
}

impl std::fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an analysis outcome to a triage level. A red flag overrides the score.
pub fn classify(score: u32, has_red_flag: bool) -> TriageLevel {
    if has_red_flag {
        TriageLevel::Emergency
    } else if score >= URGENT_SCORE_THRESHOLD {
        TriageLevel::Urgent
    } else {
        TriageLevel::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_flag_dominates_any_score() {
        for score in [0, 1, 6, 7, 8, 30, u32::MAX] {
            assert_eq!(classify(score, true), TriageLevel::Emergency, "score {score}");
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(classify(6, false), TriageLevel::Home);
        assert_eq!(classify(7, false), TriageLevel::Urgent);
    }

    #[test]
    fn without_red_flag_urgent_iff_score_reaches_threshold() {
        for score in 0..50 {
            let expected = if score >= 7 { TriageLevel::Urgent } else { TriageLevel::Home };
            assert_eq!(classify(score, false), expected, "score {score}");
        }
    }

    #[test]
    fn zero_score_is_home() {
        assert_eq!(classify(0, false), TriageLevel::Home);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(TriageLevel::Home < TriageLevel::Urgent);
        assert!(TriageLevel::Urgent < TriageLevel::Emergency);
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&TriageLevel::Emergency).unwrap(), "\"EMERGENCY\"");
        assert_eq!(TriageLevel::Home.to_string(), "HOME");
    }
}
