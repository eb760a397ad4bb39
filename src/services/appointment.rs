use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PortalError, PortalResult};
use crate::services::wizard::{Wizard, FIRST_STEP};

/// Online appointment booking: department → doctor → date & time → confirmation

pub const TIME_SLOTS: [&str; 12] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30",
];

pub const CONFIRMATION_NOTICE: &str =
    "Randevunuz başarıyla oluşturuldu! SMS ile onay gönderilecektir.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Cardiology,
    Neurology,
    Orthopedics,
    Dermatology,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub name: &'static str,
    pub experience_years: u8,
    pub rating: f32,
}

const fn doctor(name: &'static str, experience_years: u8, rating: f32) -> Doctor {
    Doctor { name, experience_years, rating }
}

static CARDIOLOGY: [Doctor; 2] = [
    doctor("Dr. Mehmet Özkan", 15, 4.9),
    doctor("Dr. Zeynep Kaya", 12, 4.8),
];
static NEUROLOGY: [Doctor; 2] = [
    doctor("Dr. Ayşe Kaya", 18, 4.9),
    doctor("Dr. Can Demir", 10, 4.7),
];
static ORTHOPEDICS: [Doctor; 2] = [
    doctor("Dr. Ali Yılmaz", 20, 4.8),
    doctor("Dr. Selin Özkan", 8, 4.6),
];
static DERMATOLOGY: [Doctor; 2] = [
    doctor("Dr. Fatma Demir", 14, 4.9),
    doctor("Dr. Murat Kaya", 11, 4.7),
];

impl Department {
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Cardiology => "Kardiyoloji",
            Department::Neurology => "Nöroloji",
            Department::Orthopedics => "Ortopedi",
            Department::Dermatology => "Dermatoloji",
        }
    }

    pub fn doctors(&self) -> &'static [Doctor] {
        match self {
            Department::Cardiology => &CARDIOLOGY,
            Department::Neurology => &NEUROLOGY,
            Department::Orthopedics => &ORTHOPEDICS,
            Department::Dermatology => &DERMATOLOGY,
        }
    }
}

/// Earliest bookable day
pub fn min_booking_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(1)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentSummary {
    pub department: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub summary: AppointmentSummary,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppointmentWizard {
    step: u8,
    department: Option<Department>,
    doctor: Option<&'static str>,
    date: Option<NaiveDate>,
    time: Option<&'static str>,
}

impl AppointmentWizard {
    pub fn new() -> Self {
        Self { step: FIRST_STEP, ..Default::default() }
    }

    /// Picking another department drops the doctor chosen for the previous one
    /// and sends a wizard that is past the doctor step back to it.
    pub fn select_department(&mut self, department: Department) {
        if self.department != Some(department) {
            self.doctor = None;
            if self.step > 2 {
                self.step = 2;
            }
        }
        self.department = Some(department);
    }

    /// Doctors offered on step 2
    pub fn available_doctors(&self) -> &'static [Doctor] {
        self.department.map(|d| d.doctors()).unwrap_or(&[])
    }

    pub fn select_doctor(&mut self, name: &str) -> PortalResult<()> {
        let found = self
            .available_doctors()
            .iter()
            .find(|d| d.name == name)
            .ok_or(PortalError::UnknownDoctor)?;
        self.doctor = Some(found.name);
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> PortalResult<()> {
        if date < min_booking_date(today) {
            return Err(PortalError::DateTooEarly);
        }
        self.date = Some(date);
        Ok(())
    }

    pub fn select_time(&mut self, time: &str) -> PortalResult<()> {
        let slot = TIME_SLOTS
            .iter()
            .find(|slot| **slot == time)
            .ok_or(PortalError::UnknownTimeSlot)?;
        self.time = Some(*slot);
        Ok(())
    }

    /// Summary shown on step 4
    pub fn summary(&self) -> AppointmentSummary {
        AppointmentSummary {
            department: self.department.map(|d| d.display_name()).unwrap_or_default().to_string(),
            doctor: self.doctor.unwrap_or_default().to_string(),
            date: self.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            time: self.time.unwrap_or_default().to_string(),
        }
    }
}

impl Wizard for AppointmentWizard {
    type Summary = BookingConfirmation;

    fn step(&self) -> u8 {
        self.step.max(FIRST_STEP)
    }

    fn set_step(&mut self, step: u8) {
        self.step = step;
    }

    /// Every selection up to `step` must still be present
    fn check_step(&self, step: u8) -> PortalResult<()> {
        if self.department.is_none() {
            return Err(PortalError::DepartmentRequired);
        }
        if step >= 2 && self.doctor.is_none() {
            return Err(PortalError::DoctorRequired);
        }
        if step >= 3 && (self.date.is_none() || self.time.is_none()) {
            return Err(PortalError::DateTimeRequired);
        }
        Ok(())
    }

    fn summarize(&self) -> BookingConfirmation {
        BookingConfirmation {
            reference: Uuid::new_v4(),
            summary: self.summary(),
            message: CONFIRMATION_NOTICE.to_string(),
        }
    }

    fn reset(&mut self) {
        *self = AppointmentWizard::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::wizard::StepOutcome;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn each_step_blocks_without_selection() {
        let mut wizard = AppointmentWizard::new();
        assert_eq!(wizard.next(), Err(PortalError::DepartmentRequired));
        assert_eq!(wizard.step(), 1);

        wizard.select_department(Department::Neurology);
        wizard.next().unwrap();
        assert_eq!(wizard.next(), Err(PortalError::DoctorRequired));
        assert_eq!(wizard.step(), 2);

        wizard.select_doctor("Dr. Can Demir").unwrap();
        wizard.next().unwrap();
        wizard.select_time("10:30").unwrap();
        assert_eq!(wizard.next(), Err(PortalError::DateTimeRequired));
        assert_eq!(wizard.step(), 3);
    }

    #[test]
    fn doctors_follow_department() {
        let mut wizard = AppointmentWizard::new();
        assert!(wizard.available_doctors().is_empty());

        wizard.select_department(Department::Cardiology);
        let names: Vec<_> = wizard.available_doctors().iter().map(|d| d.name).collect();
        assert_eq!(names, ["Dr. Mehmet Özkan", "Dr. Zeynep Kaya"]);

        assert_eq!(wizard.select_doctor("Dr. Ali Yılmaz"), Err(PortalError::UnknownDoctor));
        wizard.select_doctor("Dr. Zeynep Kaya").unwrap();

        wizard.select_department(Department::Cardiology);
        assert_eq!(wizard.summary().doctor, "Dr. Zeynep Kaya");
        wizard.select_department(Department::Orthopedics);
        assert_eq!(wizard.summary().doctor, "");
    }

    #[test]
    fn department_change_on_last_step_blocks_booking() {
        let mut wizard = AppointmentWizard::new();
        wizard.select_department(Department::Cardiology);
        wizard.next().unwrap();
        wizard.select_doctor("Dr. Zeynep Kaya").unwrap();
        wizard.next().unwrap();
        wizard.select_date(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(), today()).unwrap();
        wizard.select_time("11:00").unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.step(), 4);

        wizard.select_department(Department::Neurology);
        assert_eq!(wizard.step(), 2);
        assert_eq!(wizard.next(), Err(PortalError::DoctorRequired));
        assert_eq!(wizard.step(), 2);
    }

    #[test]
    fn last_step_rechecks_every_selection() {
        let mut wizard = AppointmentWizard::new();
        wizard.select_department(Department::Dermatology);
        wizard.set_step(4);
        assert_eq!(wizard.check_step(4), Err(PortalError::DoctorRequired));
        assert_eq!(wizard.next(), Err(PortalError::DoctorRequired));
        assert_eq!(wizard.step(), 4);

        wizard.select_doctor("Dr. Fatma Demir").unwrap();
        assert_eq!(wizard.check_step(4), Err(PortalError::DateTimeRequired));
    }

    #[test]
    fn date_must_be_tomorrow_or_later() {
        let mut wizard = AppointmentWizard::new();
        assert_eq!(wizard.select_date(today(), today()), Err(PortalError::DateTooEarly));
        assert!(wizard.select_date(min_booking_date(today()), today()).is_ok());
    }

    #[test]
    fn only_listed_slots_are_bookable() {
        let mut wizard = AppointmentWizard::new();
        assert_eq!(wizard.select_time("12:00"), Err(PortalError::UnknownTimeSlot));
        assert!(wizard.select_time("16:30").is_ok());
    }

    #[test]
    fn completing_books_and_resets() {
        let mut wizard = AppointmentWizard::new();
        wizard.select_department(Department::Dermatology);
        wizard.next().unwrap();
        wizard.select_doctor("Dr. Murat Kaya").unwrap();
        wizard.next().unwrap();
        wizard.select_date(NaiveDate::from_ymd_opt(2026, 10, 22).unwrap(), today()).unwrap();
        wizard.select_time("14:00").unwrap();
        assert_eq!(wizard.next(), Ok(StepOutcome::Moved { step: 4 }));

        assert_eq!(
            wizard.summary(),
            AppointmentSummary {
                department: "Dermatoloji".into(),
                doctor: "Dr. Murat Kaya".into(),
                date: "2026-10-22".into(),
                time: "14:00".into(),
            }
        );

        let StepOutcome::Completed { summary: confirmation } = wizard.next().unwrap() else {
            panic!("expected completion");
        };
        assert_eq!(confirmation.message, CONFIRMATION_NOTICE);
        assert_eq!(confirmation.summary.department, "Dermatoloji");
        assert_eq!(wizard, AppointmentWizard::new());
        assert_eq!(wizard.step(), 1);
    }
}
