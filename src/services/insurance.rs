use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

/// Treatment simulator: the chosen treatment card and its cost by insurance type

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Insurer {
    Sgk,
    Private,
}

impl Insurer {
    /// Unknown or empty selections have no estimate
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "sgk" => Some(Insurer::Sgk),
            "private" => Some(Insurer::Private),
            _ => None,
        }
    }

    /// Share of the cost paid by the insurer, in percent
    pub fn covered_percent(&self) -> u32 {
        match self {
            Insurer::Sgk => 80,
            Insurer::Private => 90,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Insurer::Sgk => "SGK kapsamında",
            Insurer::Private => "Özel sigorta kapsamında",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageEstimate {
    pub insurer: Insurer,
    pub covered_percent: u32,
    pub patient_payment: f64,
    pub message: String,
}

/// Turkish lira with "." thousands grouping, e.g. ₺10.500, ₺1.234,5 or -₺500
pub fn format_lira(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let whole = cents.unsigned_abs() / 100;
    let fraction = cents.unsigned_abs() % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    match fraction {
        0 => format!("{}₺{}", sign, grouped),
        f if f % 10 == 0 => format!("{}₺{},{}", sign, grouped, f / 10),
        f => format!("{}₺{},{:02}", sign, grouped, f),
    }
}

/// Details panel opened under the selected treatment card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentDetails {
    pub treatment: String,
    pub total_cost: f64,
    pub total_cost_text: String,
}

pub fn treatment_details(key: &str, total_cost: f64) -> PortalResult<TreatmentDetails> {
    let key = key.trim();
    if key.is_empty() {
        return Err(PortalError::UnknownEntry(key.to_string()));
    }
    Ok(TreatmentDetails {
        treatment: key.to_string(),
        total_cost,
        total_cost_text: format_lira(total_cost),
    })
}

pub fn estimate(insurer: Insurer, total_cost: f64) -> CoverageEstimate {
    let covered_percent = insurer.covered_percent();
    let patient_payment = total_cost * f64::from(100 - covered_percent) / 100.0;
    let message = format!(
        "{} %{} karşılanır. Tahmini hasta payı: {}",
        insurer.label(),
        covered_percent,
        format_lira(patient_payment)
    );

    CoverageEstimate {
        insurer,
        covered_percent,
        patient_payment,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgk_covers_eighty_percent() {
        let est = estimate(Insurer::Sgk, 52_500.0);
        assert_eq!(est.patient_payment, 10_500.0);
        assert_eq!(est.message, "SGK kapsamında %80 karşılanır. Tahmini hasta payı: ₺10.500");
    }

    #[test]
    fn private_covers_ninety_percent() {
        let est = estimate(Insurer::Private, 52_500.0);
        assert_eq!(est.patient_payment, 5_250.0);
        assert!(est.message.ends_with("₺5.250"));
    }

    #[test]
    fn unknown_insurer_has_no_estimate() {
        assert_eq!(Insurer::parse(""), None);
        assert_eq!(Insurer::parse("none"), None);
        assert_eq!(Insurer::parse("sgk"), Some(Insurer::Sgk));
    }

    #[test]
    fn treatment_card_opens_details() {
        let details = treatment_details(" physiotherapy ", 52_500.0).unwrap();
        assert_eq!(details.treatment, "physiotherapy");
        assert_eq!(details.total_cost_text, "₺52.500");
        assert_eq!(treatment_details("  ", 52_500.0), Err(PortalError::UnknownEntry(String::new())));
    }

    #[test]
    fn lira_grouping() {
        assert_eq!(format_lira(950.0), "₺950");
        assert_eq!(format_lira(1_234_567.0), "₺1.234.567");
        assert_eq!(format_lira(1_234.5), "₺1.234,5");
        assert_eq!(format_lira(12.25), "₺12,25");
    }

    #[test]
    fn lira_rounding_carries_into_whole() {
        assert_eq!(format_lira(1.999), "₺2");
        assert_eq!(format_lira(999.996), "₺1.000");
        assert_eq!(format_lira(0.004), "₺0");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_lira(-500.0), "-₺500");
        assert_eq!(format_lira(-1_234.5), "-₺1.234,5");
    }

    #[test]
    fn tiny_cost_estimate_rounds_to_whole_lira() {
        // 20 % of 9.995 is 1.999
        let est = estimate(Insurer::Sgk, 9.995);
        assert!(est.message.ends_with("₺2"), "{}", est.message);
    }
}
