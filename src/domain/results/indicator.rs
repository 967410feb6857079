//! Coping-strategy indicator codes and levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight fixed coping-strategy dimensions of the CSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndicatorCode {
    /// Resolución de Problemas
    REP,
    /// Autocrítica
    AUC,
    /// Expresión Emocional
    EEM,
    /// Pensamiento Desiderativo
    PSD,
    /// Apoyo Social
    APS,
    /// Reestructuración Cognitiva
    REC,
    /// Evitación de Problemas
    EVP,
    /// Retirada Social
    RES,
}

impl IndicatorCode {
    /// All eight codes in the order the report renders them.
    pub fn all() -> [IndicatorCode; 8] {
        use IndicatorCode::*;
        [REP, AUC, EEM, PSD, APS, REC, EVP, RES]
    }

    /// Human-readable dimension name.
    pub fn display_name(&self) -> &'static str {
        match self {
            IndicatorCode::REP => "Resolución de Problemas",
            IndicatorCode::AUC => "Autocrítica",
            IndicatorCode::EEM => "Expresión Emocional",
            IndicatorCode::PSD => "Pensamiento Desiderativo",
            IndicatorCode::APS => "Apoyo Social",
            IndicatorCode::REC => "Reestructuración Cognitiva",
            IndicatorCode::EVP => "Evitación de Problemas",
            IndicatorCode::RES => "Retirada Social",
        }
    }
}

impl fmt::Display for IndicatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Categorical level assigned to an indicator by the normative tables.
///
/// Wire values are the backend's Spanish labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorLevel {
    #[serde(rename = "Bajo")]
    Low,
    #[serde(rename = "Medio")]
    Medium,
    #[serde(rename = "Alto")]
    High,
}

impl IndicatorLevel {
    /// True for the only level that carries an interpretation text.
    pub fn is_high(&self) -> bool {
        matches!(self, IndicatorLevel::High)
    }

    /// The Spanish label, as shown in the report.
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorLevel::Low => "Bajo",
            IndicatorLevel::Medium => "Medio",
            IndicatorLevel::High => "Alto",
        }
    }
}
