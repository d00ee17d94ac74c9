use crate::inspection::domain::{ComplianceSnapshot, InspectionSession};

/// SIS reported for a session with nothing checked
const EMPTY_SESSION_SIS: &str = "0.000";

/// Compliance reported for a session with nothing checked
const EMPTY_SESSION_COMPLIANCE: u8 = 100;

/// ComplianceScorer service turning tallies and observations into audit metrics
///
/// Only categories listed in the session's scoring config contribute. Observations
/// under the non-maintenance sentinel, or under a category that is no longer
/// configured, are ignored by both metrics.
pub struct ComplianceScorer;

impl ComplianceScorer {
    /// Scores a session snapshot
    ///
    /// Pure and total: the same session always yields the same snapshot, and an
    /// empty session scores as fully compliant with a zero SIS.
    pub fn score(session: &InspectionSession) -> ComplianceSnapshot {
        let pass_tally_total: u64 = session
            .config
            .categories
            .iter()
            .map(|category| session.tally_for(category))
            .fold(0u64, u64::saturating_add);

        let (maintenance_observation_count, maintenance_defect_total) = session
            .maintenance_observations()
            .fold((0u64, 0u64), |(count, defects), observation| {
                (
                    count.saturating_add(1),
                    defects.saturating_add(u64::from(observation.non_compliance_count)),
                )
            });

        let total_assets_checked = pass_tally_total.saturating_add(maintenance_observation_count);

        let (site_issue_score, compliance_percentage) = if total_assets_checked == 0 {
            (EMPTY_SESSION_SIS.to_string(), EMPTY_SESSION_COMPLIANCE)
        } else {
            let thousandths =
                Self::round_half_up(maintenance_defect_total as u128 * 1000, total_assets_checked);
            let percentage =
                Self::round_half_up(pass_tally_total as u128 * 100, total_assets_checked);
            (
                Self::format_thousandths(thousandths),
                percentage.min(100) as u8,
            )
        };

        ComplianceSnapshot {
            pass_tally_total,
            maintenance_observation_count,
            maintenance_defect_total,
            total_assets_checked,
            site_issue_score,
            compliance_percentage,
        }
    }

    /// `numerator / denominator` rounded half-up, in exact integer arithmetic
    fn round_half_up(numerator: u128, denominator: u64) -> u128 {
        let denominator = denominator as u128;
        (2 * numerator + denominator) / (2 * denominator)
    }

    fn format_thousandths(thousandths: u128) -> String {
        format!("{}.{:03}", thousandths / 1000, thousandths % 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::domain::{
        AssetCategory, Observation, ObservationCategory, ScoringConfig, SiteType,
    };

    fn category(name: &str) -> AssetCategory {
        AssetCategory::new(name).unwrap()
    }

    fn session_with(categories: &[&str]) -> InspectionSession {
        let config =
            ScoringConfig::new(categories.iter().map(|name| category(name)).collect()).unwrap();
        InspectionSession::new("Inspector", "Site", SiteType::WaterTreatment, "01/01/2026", config)
    }

    fn set_tally(session: &mut InspectionSession, name: &str, count: i64) {
        session.compliant_tally.insert(name.to_string(), count);
    }

    fn add(session: &mut InspectionSession, category: ObservationCategory, count: u32) {
        session
            .add_observation(Observation::new(category, "Asset").with_non_compliance_count(count))
            .unwrap();
    }

    #[test]
    fn test_empty_session_is_fully_compliant() {
        let snapshot = ComplianceScorer::score(&session_with(&["Pumps"]));
        assert_eq!(snapshot.total_assets_checked, 0);
        assert_eq!(snapshot.site_issue_score, "0.000");
        assert_eq!(snapshot.compliance_percentage, 100);
    }

    #[test]
    fn test_single_category_scenario() {
        let mut session = session_with(&["Pumps"]);
        set_tally(&mut session, "Pumps", 9);
        add(&mut session, category("Pumps").into(), 1);

        let snapshot = ComplianceScorer::score(&session);
        assert_eq!(snapshot.pass_tally_total, 9);
        assert_eq!(snapshot.maintenance_observation_count, 1);
        assert_eq!(snapshot.maintenance_defect_total, 1);
        assert_eq!(snapshot.total_assets_checked, 10);
        assert_eq!(snapshot.compliance_percentage, 90);
        assert_eq!(snapshot.site_issue_score, "0.100");
    }

    #[test]
    fn test_defect_density_can_exceed_one() {
        let mut session = session_with(&["Pumps"]);
        add(&mut session, category("Pumps").into(), 5);
        add(&mut session, category("Pumps").into(), 2);

        let snapshot = ComplianceScorer::score(&session);
        assert_eq!(snapshot.total_assets_checked, 2);
        assert_eq!(snapshot.site_issue_score, "3.500");
        assert_eq!(snapshot.compliance_percentage, 0);
    }

    #[test]
    fn test_compliance_rounds_half_up() {
        // 1 pass of 8 checked = 12.5%
        let mut session = session_with(&["Pumps"]);
        set_tally(&mut session, "Pumps", 1);
        for _ in 0..7 {
            add(&mut session, category("Pumps").into(), 1);
        }
        let snapshot = ComplianceScorer::score(&session);
        assert_eq!(snapshot.compliance_percentage, 13);
        assert_eq!(snapshot.site_issue_score, "0.875");
    }

    #[test]
    fn test_sis_rounds_to_three_decimals() {
        // 2 defects over 3 checked = 0.6666...
        let mut session = session_with(&["Pumps"]);
        set_tally(&mut session, "Pumps", 2);
        add(&mut session, category("Pumps").into(), 2);
        let snapshot = ComplianceScorer::score(&session);
        assert_eq!(snapshot.site_issue_score, "0.667");
        assert_eq!(snapshot.compliance_percentage, 67);
    }

    #[test]
    fn test_non_maintenance_observations_never_change_scores() {
        let mut session = session_with(&["Pumps", "Motors"]);
        set_tally(&mut session, "Pumps", 3);
        set_tally(&mut session, "Motors", 4);
        add(&mut session, category("Motors").into(), 2);
        let before = ComplianceScorer::score(&session);

        for count in 1..=5 {
            add(&mut session, ObservationCategory::NonMaintenance, count);
        }
        let after = ComplianceScorer::score(&session);

        assert_eq!(before, after);
    }

    #[test]
    fn test_unconfigured_categories_are_ignored() {
        let mut session = session_with(&["Pumps"]);
        set_tally(&mut session, "Pumps", 4);
        set_tally(&mut session, "Valves", 100);
        add(&mut session, category("Valves").into(), 3);

        let snapshot = ComplianceScorer::score(&session);
        assert_eq!(snapshot.total_assets_checked, 4);
        assert_eq!(snapshot.compliance_percentage, 100);
        assert_eq!(snapshot.site_issue_score, "0.000");
    }

    #[test]
    fn test_huge_tallies_saturate_instead_of_overflowing() {
        let mut session = session_with(&["Pumps", "Motors", "Compressors"]);
        for name in ["Pumps", "Motors", "Compressors"] {
            set_tally(&mut session, name, i64::MAX);
        }
        add(&mut session, category("Pumps").into(), u32::MAX);

        let snapshot = ComplianceScorer::score(&session);
        assert_eq!(snapshot.pass_tally_total, u64::MAX);
        assert_eq!(snapshot.total_assets_checked, u64::MAX);
        assert_eq!(snapshot.compliance_percentage, 100);
        assert_eq!(snapshot.site_issue_score, "0.000");
    }

    #[test]
    fn test_negative_tallies_are_clamped() {
        let mut session = session_with(&["Pumps"]);
        set_tally(&mut session, "Pumps", -3);
        add(&mut session, category("Pumps").into(), 1);

        let snapshot = ComplianceScorer::score(&session);
        assert_eq!(snapshot.pass_tally_total, 0);
        assert_eq!(snapshot.total_assets_checked, 1);
        assert_eq!(snapshot.compliance_percentage, 0);
    }

    #[test]
    fn test_scoring_is_idempotent_and_leaves_session_untouched() {
        let mut session = session_with(&["Pumps", "Motors"]);
        set_tally(&mut session, "Pumps", 7);
        add(&mut session, category("Motors").into(), 3);
        let original = session.clone();

        let first = ComplianceScorer::score(&session);
        let second = ComplianceScorer::score(&session);
        assert_eq!(first, second);
        assert_eq!(session, original);
    }

    #[test]
    fn test_compliance_always_within_bounds() {
        for passes in 0..20i64 {
            for failures in 0..20u32 {
                let mut session = session_with(&["Pumps"]);
                set_tally(&mut session, "Pumps", passes);
                for _ in 0..failures {
                    add(&mut session, category("Pumps").into(), 1);
                }
                let snapshot = ComplianceScorer::score(&session);
                assert!(snapshot.compliance_percentage <= 100);
            }
        }
    }
}
