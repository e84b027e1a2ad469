//! Risk-factor escalation of a triage level.

use serde::{Deserialize, Serialize};

use super::classifier::TriageLevel;

/// Condition keywords that mark a chronic-risk patient.
pub const CHRONIC_CONDITION_KEYWORDS: &[&str] =
    &["diabetes", "heart", "asthma", "copd", "kidney", "cancer"];

const ELDERLY_AGE: f64 = 65.0;
const YOUNG_CHILD_AGE: f64 = 5.0;

/// Caller-supplied hints about the patient. Every field is optional.
///
/// `age` is in years and may be fractional (a toddler of 2.5).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRiskProfile {
    pub age: Option<f64>,
    pub pregnant: Option<bool>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

/// Why a profile counts as high risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFactor {
    Age,
    Pregnancy,
    ChronicCondition,
}

impl UserRiskProfile {
    pub fn risk_factors(&self) -> Vec<RiskFactor> {
        let mut factors = Vec::new();
        if self
            .age
            .is_some_and(|age| age >= ELDERLY_AGE || age <= YOUNG_CHILD_AGE)
        {
            factors.push(RiskFactor::Age);
        }
        if self.pregnant == Some(true) {
            factors.push(RiskFactor::Pregnancy);
        }
        if self.conditions.iter().any(|c| is_chronic_condition(c)) {
            factors.push(RiskFactor::ChronicCondition);
        }
        factors
    }

    pub fn is_high_risk(&self) -> bool {
        !self.risk_factors().is_empty()
    }
}

fn is_chronic_condition(condition: &str) -> bool {
    let lower = condition.to_lowercase();
    CHRONIC_CONDITION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Escalate HOME to URGENT for high-risk patients. Never lowers a level and
/// never raises anything to EMERGENCY.
pub fn adjust(level: TriageLevel, profile: Option<&UserRiskProfile>) -> TriageLevel {
    match profile {
        Some(profile) if level == TriageLevel::Home && profile.is_high_risk() => {
            TriageLevel::Urgent
        }
        _ => level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [TriageLevel; 3] =
        [TriageLevel::Home, TriageLevel::Urgent, TriageLevel::Emergency];

    fn aged(age: f64) -> UserRiskProfile {
        UserRiskProfile { age: Some(age), ..Default::default() }
    }

    #[test]
    fn absent_profile_leaves_level_unchanged() {
        for level in LEVELS {
            assert_eq!(adjust(level, None), level);
        }
    }

    #[test]
    fn empty_profile_is_not_high_risk() {
        let profile = UserRiskProfile::default();
        assert_eq!(adjust(TriageLevel::Home, Some(&profile)), TriageLevel::Home);
    }

    #[test]
    fn elderly_escalates_home() {
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(70.0))), TriageLevel::Urgent);
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(65.0))), TriageLevel::Urgent);
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(64.0))), TriageLevel::Home);
    }

    #[test]
    fn young_child_escalates_home() {
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(5.0))), TriageLevel::Urgent);
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(0.0))), TriageLevel::Urgent);
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(6.0))), TriageLevel::Home);
    }

    #[test]
    fn fractional_ages_use_the_same_bounds() {
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(2.5))), TriageLevel::Urgent);
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(5.5))), TriageLevel::Home);
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(64.9))), TriageLevel::Home);
        assert_eq!(adjust(TriageLevel::Home, Some(&aged(65.0))), TriageLevel::Urgent);
    }

    #[test]
    fn pregnancy_escalates_only_when_true() {
        let pregnant = UserRiskProfile { pregnant: Some(true), ..Default::default() };
        let not_pregnant = UserRiskProfile { pregnant: Some(false), ..Default::default() };
        assert_eq!(adjust(TriageLevel::Home, Some(&pregnant)), TriageLevel::Urgent);
        assert_eq!(adjust(TriageLevel::Home, Some(&not_pregnant)), TriageLevel::Home);
    }

    #[test]
    fn chronic_condition_matched_case_insensitively_as_substring() {
        let profile = UserRiskProfile {
            conditions: vec!["Type 2 DIABETES".into()],
            ..Default::default()
        };
        assert_eq!(profile.risk_factors(), vec![RiskFactor::ChronicCondition]);

        let heart = UserRiskProfile {
            conditions: vec!["congenital heart defect".into()],
            ..Default::default()
        };
        assert!(heart.is_high_risk());
    }

    #[test]
    fn unrelated_conditions_are_not_risk() {
        let profile = UserRiskProfile {
            conditions: vec!["seasonal allergy".into(), "myopia".into()],
            ..Default::default()
        };
        assert!(!profile.is_high_risk());
    }

    #[test]
    fn urgent_and_emergency_never_altered() {
        let risky = UserRiskProfile {
            age: Some(80.0),
            pregnant: Some(true),
            conditions: vec!["COPD".into()],
        };
        assert_eq!(adjust(TriageLevel::Urgent, Some(&risky)), TriageLevel::Urgent);
        assert_eq!(adjust(TriageLevel::Emergency, Some(&risky)), TriageLevel::Emergency);
    }

    #[test]
    fn adjustment_is_monotonic() {
        let profiles = [
            UserRiskProfile::default(),
            aged(3.0),
            aged(30.0),
            aged(90.0),
            UserRiskProfile { pregnant: Some(true), ..Default::default() },
            UserRiskProfile { conditions: vec!["kidney stones".into()], ..Default::default() },
        ];
        for level in LEVELS {
            assert!(adjust(level, None) >= level);
            for profile in &profiles {
                let adjusted = adjust(level, Some(profile));
                assert!(adjusted >= level, "{level} lowered to {adjusted}");
                assert!(adjusted <= TriageLevel::Emergency.max(level));
            }
        }
    }

    #[test]
    fn all_risk_factors_reported() {
        let profile = UserRiskProfile {
            age: Some(2.0),
            pregnant: Some(true),
            conditions: vec!["asthma".into()],
        };
        assert_eq!(
            profile.risk_factors(),
            vec![RiskFactor::Age, RiskFactor::Pregnancy, RiskFactor::ChronicCondition]
        );
    }
}
