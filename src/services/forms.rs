use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

/// Second-opinion requests, newsletter sign-up and medication reminders

pub const SECOND_OPINION_SENT: &str =
    "İkinci görüş talebiniz başarıyla gönderildi. En kısa sürede size dönüş yapılacaktır.";
pub const NEWSLETTER_JOINED: &str = "E-posta bültenine başarıyla abone oldunuz!";
pub const ADD_MEDICATION_NOTICE: &str = "Yeni ilaç ekleme formu açılacak.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondOpinionRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub complaint: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SecondOpinionRequest {
    /// Every required field must be non-blank; the error names the blank ones
    pub fn validate(&self) -> PortalResult<()> {
        let required = [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("specialty", &self.specialty),
            ("complaint", &self.complaint),
        ];
        let missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PortalError::RequiredFieldsMissing(missing))
        }
    }
}

/// Loose shape check: something@domain.tld, no spaces
pub fn validate_email(email: &str) -> PortalResult<()> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !email.contains(char::is_whitespace)
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(PortalError::InvalidEmail)
    }
}

/// Reminder on/off per medication name
#[derive(Debug, Clone, Default, Serialize)]
pub struct MedicationReminders {
    active: BTreeMap<String, bool>,
}

impl MedicationReminders {
    /// Flip the reminder and return the notice for the new state
    pub fn toggle(&mut self, medication: &str) -> PortalResult<(bool, String)> {
        let medication = medication.trim();
        if medication.is_empty() {
            return Err(PortalError::UnknownEntry(medication.to_string()));
        }

        let entry = self.active.entry(medication.to_string()).or_insert(false);
        *entry = !*entry;

        let notice = if *entry {
            format!("{} için hatırlatma aktif edildi.", medication)
        } else {
            format!("{} için hatırlatma deaktif edildi.", medication)
        };
        Ok((*entry, notice))
    }

    /// Medications whose reminder is on, alphabetical
    pub fn active(&self) -> Vec<String> {
        self.active
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
