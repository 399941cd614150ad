//! Compliance of effluent values against agent-provided targets
//!
//! Targets and effluent values arrive keyed by parameter name, and the
//! names come from different worlds: lab reports ("DBO5"), field ids
//! ("bod_effluent"), regulation text ("Biochemical Oxygen Demand").
//! Known synonym families are folded onto one canonical key before
//! matching; anything unrecognized passes through as its uppercased
//! literal form and simply never matches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical key, synonyms (compared after `fold`)
const SYNONYM_FAMILIES: &[(&str, &[&str])] = &[
    (
        "BOD",
        &["bod", "bod5", "dbo", "dbo5", "biochemical oxygen demand", "demanda bioquimica de oxigeno"],
    ),
    (
        "COD",
        &["cod", "dqo", "chemical oxygen demand", "demanda quimica de oxigeno"],
    ),
    (
        "TSS",
        &["tss", "sst", "suspended solids", "total suspended solids", "solidos suspendidos totales"],
    ),
    ("TDS", &["tds", "sdt", "total dissolved solids"]),
    ("TN", &["tn", "nt", "nitrogen", "total nitrogen", "nitrogeno total"]),
    ("TP", &["tp", "pt", "phosphorus", "total phosphorus", "fosforo total"]),
    (
        "FOG",
        &["fog", "gya", "oil grease", "oil and grease", "fats oils grease", "grasas y aceites"],
    ),
    (
        "FECAL_COLIFORMS",
        &["fecal coliforms", "coliformes fecales", "fc", "fecal coliform"],
    ),
    ("TURBIDITY", &["turbidity", "turbiedad", "ntu"]),
    ("PH", &["ph", "potencial hidrogeno"]),
];

/// Tokens that qualify a parameter name without changing which family it
/// belongs to ("bod_effluent", "target BOD", ...).
const QUALIFIER_TOKENS: &[&str] = &["influent", "effluent", "target", "limit", "raw", "treated"];

fn fold(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| !QUALIFIER_TOKENS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fold a parameter name onto its canonical key. Unknown names come back
/// as their uppercased literal form.
pub fn normalize_parameter_name(name: &str) -> String {
    let folded = fold(name);
    for (canonical, synonyms) in SYNONYM_FAMILIES {
        if synonyms.contains(&folded.as_str()) {
            return (*canonical).to_string();
        }
    }
    name.trim().to_uppercase()
}

/// Outcome of a compliance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    /// No target parameter could be matched against the effluent data
    Indeterminate,
}

/// One parameter checked against its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterCompliance {
    /// Canonical parameter key
    pub parameter: String,
    pub target: f64,
    pub effluent: f64,
    /// `effluent <= target`
    pub passes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Checked parameters, ordered by canonical key
    pub parameters: Vec<ParameterCompliance>,
    pub overall: ComplianceStatus,
}

/// Check effluent values against targets. Both maps are keyed by raw
/// parameter names; keys are normalized before matching. Only parameters
/// present on both sides are checked; overall compliance is the AND of
/// those checks, or [`ComplianceStatus::Indeterminate`] when nothing
/// overlaps.
pub fn check_compliance(
    targets: &BTreeMap<String, f64>,
    effluent: &BTreeMap<String, f64>,
) -> ComplianceReport {
    let normalized_effluent: BTreeMap<String, f64> = effluent
        .iter()
        .map(|(name, value)| (normalize_parameter_name(name), *value))
        .collect();

    let mut parameters = Vec::new();
    for (name, target) in targets {
        let key = normalize_parameter_name(name);
        if let Some(measured) = normalized_effluent.get(&key) {
            parameters.push(ParameterCompliance {
                parameter: key,
                target: *target,
                effluent: *measured,
                passes: *measured <= *target,
            });
        }
    }
    parameters.sort_by(|a, b| a.parameter.cmp(&b.parameter));

    let overall = if parameters.is_empty() {
        ComplianceStatus::Indeterminate
    } else if parameters.iter().all(|p| p.passes) {
        ComplianceStatus::Compliant
    } else {
        ComplianceStatus::NonCompliant
    };

    ComplianceReport {
        parameters,
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_synonyms_fold_to_one_key() {
        for name in ["BOD", "bod5", "DBO", "dbo5", "bod_effluent", "Biochemical Oxygen Demand"] {
            assert_eq!(normalize_parameter_name(name), "BOD", "{name}");
        }
        assert_eq!(normalize_parameter_name("SST"), "TSS");
        assert_eq!(normalize_parameter_name("DQO"), "COD");
        assert_eq!(normalize_parameter_name("Grasas y Aceites"), "FOG");
    }

    #[test]
    fn test_unknown_name_uppercased_literal() {
        assert_eq!(normalize_parameter_name("Selenium"), "SELENIUM");
    }

    #[test]
    fn test_passing_effluent() {
        let report = check_compliance(&map(&[("BOD", 30.0)]), &map(&[("DBO5", 25.0)]));
        assert_eq!(report.overall, ComplianceStatus::Compliant);
        assert_eq!(report.parameters.len(), 1);
        assert!(report.parameters[0].passes);
        assert_eq!(report.parameters[0].parameter, "BOD");
    }

    #[test]
    fn test_failing_effluent() {
        let report = check_compliance(&map(&[("BOD", 30.0)]), &map(&[("BOD", 35.0)]));
        assert_eq!(report.overall, ComplianceStatus::NonCompliant);
        assert!(!report.parameters[0].passes);
    }

    #[test]
    fn test_equal_value_passes() {
        let report = check_compliance(&map(&[("TSS", 40.0)]), &map(&[("SST", 40.0)]));
        assert_eq!(report.overall, ComplianceStatus::Compliant);
    }

    #[test]
    fn test_no_overlap_is_indeterminate() {
        let report = check_compliance(&map(&[("BOD", 30.0)]), &map(&[("Selenium", 0.1)]));
        assert_eq!(report.overall, ComplianceStatus::Indeterminate);
        assert!(report.parameters.is_empty());
    }

    #[test]
    fn test_one_failure_fails_overall() {
        let report = check_compliance(
            &map(&[("BOD", 30.0), ("TSS", 40.0), ("COD", 100.0)]),
            &map(&[("bod_effluent", 12.0), ("tss_effluent", 55.0), ("cod_effluent", 80.0)]),
        );
        assert_eq!(report.overall, ComplianceStatus::NonCompliant);
        let tss = report.parameters.iter().find(|p| p.parameter == "TSS").unwrap();
        assert!(!tss.passes);
    }
}
