//! Scored result document, as received from the backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ResponseRating, TestId, Timestamp};

use super::indicator::{IndicatorCode, IndicatorLevel};

/// Interpretation text attached to a High-level indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Dimension name as the backend phrases it.
    pub name: String,
    /// The interpretation paragraph.
    pub interpretation: String,
}

/// Aggregate counts of indicators at each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub high_count: u8,
    pub medium_count: u8,
    pub low_count: u8,
}

/// Per-indicator scoring computed by the backend.
///
/// The client never recomputes any of these values; the only rule it
/// applies is "render an interpretation only if the level is High", and
/// even that holds by construction of the backend payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringReport {
    /// Percentile (0-100) per indicator.
    pub percentiles: BTreeMap<IndicatorCode, u8>,
    /// Categorical level per indicator.
    pub levels: BTreeMap<IndicatorCode, IndicatorLevel>,
    /// Interpretation texts, present only for High-level indicators.
    pub interpretations: BTreeMap<IndicatorCode, Interpretation>,
    /// Counts of indicators at each level.
    pub summary: LevelSummary,
}

impl ScoringReport {
    /// Percentile for one indicator, if the backend reported it.
    pub fn percentile(&self, code: IndicatorCode) -> Option<u8> {
        self.percentiles.get(&code).copied()
    }

    /// Level for one indicator, if the backend reported it.
    pub fn level(&self, code: IndicatorCode) -> Option<IndicatorLevel> {
        self.levels.get(&code).copied()
    }

    /// Interpretation for one indicator, only when its level is High.
    pub fn interpretation(&self, code: IndicatorCode) -> Option<&Interpretation> {
        if self.level(code)?.is_high() {
            self.interpretations.get(&code)
        } else {
            None
        }
    }

    /// Indicators at High level, in report order.
    pub fn high_indicators(&self) -> Vec<IndicatorCode> {
        IndicatorCode::all()
            .into_iter()
            .filter(|code| self.level(*code).is_some_and(|level| level.is_high()))
            .collect()
    }
}

/// A completed test's full result, read-only to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDocument {
    /// Identifier of the scored test.
    pub test_id: TestId,
    /// The narrative the test was taken against.
    pub stressor_narrative: String,
    /// When the backend marked the test completed.
    pub completed_at: Timestamp,
    /// The supplementary capacity rating, if the user provided one.
    pub capacity: Option<ResponseRating>,
    /// The scoring block.
    pub report: ScoringReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(code: IndicatorCode, level: IndicatorLevel) -> ScoringReport {
        let mut levels = BTreeMap::new();
        levels.insert(code, level);
        let mut percentiles = BTreeMap::new();
        percentiles.insert(code, 80);
        let mut interpretations = BTreeMap::new();
        interpretations.insert(
            code,
            Interpretation {
                name: code.display_name().to_string(),
                interpretation: "texto".to_string(),
            },
        );
        ScoringReport {
            percentiles,
            levels,
            interpretations,
            summary: LevelSummary {
                high_count: 1,
                medium_count: 0,
                low_count: 0,
            },
        }
    }

    #[test]
    fn interpretation_is_rendered_only_if_high() {
        let high = report_with(IndicatorCode::AUC, IndicatorLevel::High);
        assert!(high.interpretation(IndicatorCode::AUC).is_some());

        let medium = report_with(IndicatorCode::AUC, IndicatorLevel::Medium);
        assert!(medium.interpretation(IndicatorCode::AUC).is_none());
    }

    #[test]
    fn interpretation_is_none_for_unreported_code() {
        let report = report_with(IndicatorCode::AUC, IndicatorLevel::High);
        assert!(report.interpretation(IndicatorCode::REP).is_none());
    }

    #[test]
    fn high_indicators_follow_report_order() {
        let mut levels = BTreeMap::new();
        for code in IndicatorCode::all() {
            levels.insert(code, IndicatorLevel::Medium);
        }
        levels.insert(IndicatorCode::RES, IndicatorLevel::High);
        levels.insert(IndicatorCode::REP, IndicatorLevel::High);
        let report = ScoringReport {
            percentiles: BTreeMap::new(),
            levels,
            interpretations: BTreeMap::new(),
            summary: LevelSummary {
                high_count: 2,
                medium_count: 6,
                low_count: 0,
            },
        };
        assert_eq!(
            report.high_indicators(),
            vec![IndicatorCode::REP, IndicatorCode::RES]
        );
    }

    #[test]
    fn scoring_report_deserializes_from_backend_shape() {
        let json = r#"{
            "percentiles": {"REP": 84, "AUC": 23},
            "levels": {"REP": "Alto", "AUC": "Bajo"},
            "interpretations": {
                "REP": {"name": "Resolución de Problemas", "interpretation": "Se presenta un puntaje alto"}
            },
            "summary": {"high_count": 1, "medium_count": 0, "low_count": 1}
        }"#;
        let report: ScoringReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.percentile(IndicatorCode::REP), Some(84));
        assert_eq!(report.level(IndicatorCode::AUC), Some(IndicatorLevel::Low));
        assert_eq!(report.summary.high_count, 1);
        assert!(report.interpretation(IndicatorCode::REP).is_some());
    }
}
