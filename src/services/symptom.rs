use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};
use crate::services::wizard::{Wizard, FIRST_STEP};

/// Symptom checker: body part → duration → pain level → suggested specialist

pub const DEFAULT_PAIN_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    Head,
    Chest,
    Abdomen,
    Limbs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialistReferral {
    pub doctor: &'static str,
    pub specialty: &'static str,
    pub condition: &'static str,
}

impl BodyPart {
    pub fn referral(&self) -> SpecialistReferral {
        let (doctor, specialty, condition) = match self {
            BodyPart::Head => ("Dr. Ayşe Kaya", "Nöroloji Uzmanı", "Baş Ağrısı"),
            BodyPart::Chest => ("Dr. Mehmet Özkan", "Kardiyoloji Uzmanı", "Göğüs Ağrısı"),
            BodyPart::Abdomen => ("Dr. Fatma Demir", "Gastroenteroloji Uzmanı", "Karın Ağrısı"),
            BodyPart::Limbs => ("Dr. Ali Yılmaz", "Ortopedi Uzmanı", "Kas-İskelet Ağrısı"),
        };
        SpecialistReferral { doctor, specialty, condition }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomSummary {
    pub body_part: BodyPart,
    pub duration: String,
    pub pain_level: u8,
    pub referral: SpecialistReferral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomWizard {
    step: u8,
    body_part: Option<BodyPart>,
    duration: Option<String>,
    pain_level: u8,
}

impl Default for SymptomWizard {
    fn default() -> Self {
        Self {
            step: FIRST_STEP,
            body_part: None,
            duration: None,
            pain_level: DEFAULT_PAIN_LEVEL,
        }
    }
}

impl SymptomWizard {
    pub fn select_body_part(&mut self, part: BodyPart) {
        self.body_part = Some(part);
    }

    /// Duration buttons carry free-form keys such as "1-3days"
    pub fn select_duration(&mut self, duration: &str) {
        let duration = duration.trim();
        self.duration = (!duration.is_empty()).then(|| duration.to_string());
    }

    pub fn set_pain_level(&mut self, level: u8) -> PortalResult<()> {
        if !(1..=10).contains(&level) {
            return Err(PortalError::PainLevelOutOfRange);
        }
        self.pain_level = level;
        Ok(())
    }

    pub fn pain_level(&self) -> u8 {
        self.pain_level
    }

    /// Referral shown on the last step. Head is the fallback when nothing was picked.
    pub fn referral(&self) -> SpecialistReferral {
        self.body_part.unwrap_or(BodyPart::Head).referral()
    }
}

impl Wizard for SymptomWizard {
    type Summary = SymptomSummary;

    fn step(&self) -> u8 {
        self.step
    }

    fn set_step(&mut self, step: u8) {
        self.step = step;
    }

    fn check_step(&self, step: u8) -> PortalResult<()> {
        match step {
            1 if self.body_part.is_none() => Err(PortalError::BodyPartRequired),
            2 if self.duration.is_none() => Err(PortalError::DurationRequired),
            // Pain level always has a value
            _ => Ok(()),
        }
    }

    fn summarize(&self) -> SymptomSummary {
        SymptomSummary {
            body_part: self.body_part.unwrap_or(BodyPart::Head),
            duration: self.duration.clone().unwrap_or_default(),
            pain_level: self.pain_level,
            referral: self.referral(),
        }
    }

    fn reset(&mut self) {
        log::info!("Symptom check finished, wizard reset");
        *self = SymptomWizard::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::wizard::StepOutcome;

    #[test]
    fn body_part_is_required() {
        let mut wizard = SymptomWizard::default();
        assert_eq!(wizard.next(), Err(PortalError::BodyPartRequired));
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn duration_is_required() {
        let mut wizard = SymptomWizard::default();
        wizard.select_body_part(BodyPart::Chest);
        wizard.next().unwrap();
        wizard.select_duration("   ");
        assert_eq!(wizard.next(), Err(PortalError::DurationRequired));
        assert_eq!(wizard.step(), 2);
    }

    #[test]
    fn full_flow_recommends_specialist() {
        let mut wizard = SymptomWizard::default();
        wizard.select_body_part(BodyPart::Abdomen);
        wizard.next().unwrap();
        wizard.select_duration("1-week");
        wizard.next().unwrap();
        assert_eq!(wizard.pain_level(), DEFAULT_PAIN_LEVEL);
        wizard.set_pain_level(8).unwrap();
        assert_eq!(wizard.next(), Ok(StepOutcome::Moved { step: 4 }));
        assert_eq!(wizard.referral().doctor, "Dr. Fatma Demir");

        let StepOutcome::Completed { summary } = wizard.next().unwrap() else {
            panic!("expected completion");
        };
        assert_eq!(summary.referral.specialty, "Gastroenteroloji Uzmanı");
        assert_eq!(summary.pain_level, 8);
        assert_eq!(summary.duration, "1-week");
        assert_eq!(wizard, SymptomWizard::default());
    }

    #[test]
    fn pain_level_bounds() {
        let mut wizard = SymptomWizard::default();
        assert_eq!(wizard.set_pain_level(0), Err(PortalError::PainLevelOutOfRange));
        assert_eq!(wizard.set_pain_level(11), Err(PortalError::PainLevelOutOfRange));
        assert_eq!(wizard.pain_level(), 5);
    }

    #[test]
    fn unknown_body_part_falls_back_to_neurology() {
        assert_eq!(SymptomWizard::default().referral().specialty, "Nöroloji Uzmanı");
    }
}
