use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::PortalSettings;
use crate::error::{PortalError, PortalResult};
use crate::services::appointment::{AppointmentWizard, BookingConfirmation, Department, Doctor};
use crate::services::bmi::{self, BmiInput, BmiResult};
use crate::services::forms::{self, MedicationReminders, SecondOpinionRequest};
use crate::services::insurance::{self, CoverageEstimate, Insurer, TreatmentDetails};
use crate::services::notify::{Notification, NotificationCenter};
use crate::services::portal::{self, CalendarView, MonthStep, PortalTab};
use crate::services::symptom::{BodyPart, SymptomSummary, SymptomWizard};
use crate::services::wizard::{StepOutcome, StepView, Wizard};

/// Shared handle managed by the shell
pub struct PortalState(pub Mutex<Portal>);

impl PortalState {
    pub fn new(settings: PortalSettings) -> Self {
        Self(Mutex::new(Portal::new(settings)))
    }
}

/// Everything one page session remembers
pub struct Portal {
    pub settings: PortalSettings,
    last_bmi: Option<BmiResult>,
    symptom: SymptomWizard,
    appointment: AppointmentWizard,
    active_tab: PortalTab,
    calendar_view: CalendarView,
    month_offset: i32,
    selected_treatment: Option<String>,
    reminders: MedicationReminders,
    notifications: NotificationCenter,
}

impl Portal {
    pub fn new(settings: PortalSettings) -> Self {
        let mut notifications = NotificationCenter::new(settings.notification_ttl());
        notifications.push(Notification::success("Tüm modüller başarıyla yüklendi!"));

        Self {
            settings,
            last_bmi: None,
            symptom: SymptomWizard::default(),
            appointment: AppointmentWizard::new(),
            active_tab: PortalTab::default(),
            calendar_view: CalendarView::default(),
            month_offset: 0,
            selected_treatment: None,
            reminders: MedicationReminders::default(),
            notifications,
        }
    }

    /// Surface a validation failure as a warning notice
    fn check<T>(&mut self, result: PortalResult<T>) -> Result<T, String> {
        result.map_err(|e| {
            self.notifications.push(Notification::from(&e));
            e.to_string()
        })
    }

    /// Swap in new settings for the running session. Env overrides still win
    /// and queued notices follow the new lifetime.
    pub fn apply_settings(&mut self, mut settings: PortalSettings) {
        settings.apply_env();
        self.notifications.set_ttl(settings.notification_ttl());
        log::info!("Settings applied, notices last {} ms", settings.notification_ttl_ms);
        self.settings = settings;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn notifications(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        self.notifications.visible(now)
    }

    // ─── BMI ─────────────────────────────────────────────

    pub fn calculate_bmi(&mut self, input: &BmiInput) -> Result<BmiResult, String> {
        let result = self.check(bmi::evaluate(input))?;
        self.last_bmi = Some(result.clone());
        self.notify(Notification::success("BMI hesaplaması tamamlandı!"));
        Ok(result)
    }

    pub fn last_bmi(&self) -> Option<&BmiResult> {
        self.last_bmi.as_ref()
    }

    fn require_bmi(&mut self) -> Result<BmiResult, String> {
        let last = self.last_bmi.clone().ok_or(PortalError::NoBmiResult);
        self.check(last)
    }

    pub fn bmi_report(&mut self, today: NaiveDate) -> Result<String, String> {
        let result = self.require_bmi()?;
        Ok(bmi::render_report(&result, today, &self.settings.hospital_name))
    }

    pub fn export_bmi_report(&mut self, today: NaiveDate) -> Result<PathBuf, String> {
        let result = self.require_bmi()?;
        let dir = self.settings.resolved_report_dir();
        let path = bmi::export_report(&result, &dir, today, &self.settings.hospital_name)
            .map_err(|e| {
                log::warn!("BMI report export failed: {:#}", e);
                self.notify(Notification::error("BMI raporu kaydedilemedi."));
                e.to_string()
            })?;
        self.notify(Notification::success("BMI raporu indiriliyor..."));
        Ok(path)
    }

    pub fn share_bmi(&mut self) -> Result<String, String> {
        let result = self.require_bmi()?;
        self.notify(Notification::success("BMI sonucu panoya kopyalandı!"));
        Ok(bmi::share_text(&result))
    }

    pub fn book_nutritionist(&mut self) {
        self.notify(Notification::info("Diyetisyen randevusu için yönlendiriliyorsunuz..."));
    }

    // ─── Symptom checker ─────────────────────────────────

    pub fn symptom(&self) -> &SymptomWizard {
        &self.symptom
    }

    pub fn select_body_part(&mut self, part: BodyPart) {
        self.symptom.select_body_part(part);
    }

    pub fn select_symptom_duration(&mut self, duration: &str) {
        self.symptom.select_duration(duration);
    }

    pub fn set_pain_level(&mut self, level: u8) -> Result<u8, String> {
        let result = self.symptom.set_pain_level(level);
        self.check(result)?;
        Ok(level)
    }

    pub fn symptom_next(&mut self) -> Result<StepOutcome<SymptomSummary>, String> {
        let outcome = self.symptom.next();
        self.check(outcome)
    }

    pub fn symptom_previous(&mut self) -> u8 {
        self.symptom.previous()
    }

    pub fn symptom_view(&self) -> StepView {
        self.symptom.view()
    }

    // ─── Appointment booking ─────────────────────────────

    pub fn appointment(&self) -> &AppointmentWizard {
        &self.appointment
    }

    pub fn select_department(&mut self, department: Department) {
        self.appointment.select_department(department);
    }

    pub fn available_doctors(&self) -> &'static [Doctor] {
        self.appointment.available_doctors()
    }

    pub fn select_doctor(&mut self, name: &str) -> Result<(), String> {
        let result = self.appointment.select_doctor(name);
        self.check(result)
    }

    pub fn select_appointment_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), String> {
        let result = self.appointment.select_date(date, today);
        self.check(result)
    }

    pub fn select_appointment_time(&mut self, time: &str) -> Result<(), String> {
        let result = self.appointment.select_time(time);
        self.check(result)
    }

    pub fn appointment_next(&mut self) -> Result<StepOutcome<BookingConfirmation>, String> {
        let outcome = self.appointment.next();
        let outcome = self.check(outcome)?;
        if let StepOutcome::Completed { summary } = &outcome {
            log::info!("Appointment booked, reference {}", summary.reference);
            self.notify(Notification::success(summary.message.clone()));
        }
        Ok(outcome)
    }

    pub fn appointment_previous(&mut self) -> u8 {
        self.appointment.previous()
    }

    pub fn appointment_view(&self) -> StepView {
        self.appointment.view()
    }

    // ─── Portal, blog, calendar ──────────────────────────

    pub fn switch_tab(&mut self, key: &str) -> Result<Vec<(PortalTab, bool)>, String> {
        let tab = self.check(PortalTab::parse(key))?;
        self.active_tab = tab;
        Ok(portal::tab_states(tab))
    }

    pub fn active_tab(&self) -> PortalTab {
        self.active_tab
    }

    pub fn switch_calendar_view(&mut self, view: CalendarView) -> CalendarView {
        self.calendar_view = view;
        view
    }

    /// Returns the month offset from today's month
    pub fn step_calendar_month(&mut self, step: MonthStep) -> i32 {
        self.month_offset = step.apply(self.month_offset);
        self.notify(Notification::info(step.notice()));
        self.month_offset
    }

    pub fn add_timeline_event(&mut self) {
        self.notify(Notification::info(portal::ADD_TIMELINE_EVENT_NOTICE));
    }

    pub fn register_for_event(&mut self, title: Option<&str>) -> String {
        let notice = portal::event_registration_notice(title);
        self.notify(Notification::info(notice.clone()));
        notice
    }

    // ─── Treatment & insurance ───────────────────────────

    pub fn select_treatment(&mut self, key: &str) -> Result<TreatmentDetails, String> {
        let details = insurance::treatment_details(key, self.settings.treatment_cost);
        let details = self.check(details)?;
        self.selected_treatment = Some(details.treatment.clone());
        Ok(details)
    }

    pub fn selected_treatment(&self) -> Option<&str> {
        self.selected_treatment.as_deref()
    }

    pub fn insurance_coverage(&self, key: &str) -> Option<CoverageEstimate> {
        Insurer::parse(key).map(|insurer| insurance::estimate(insurer, self.settings.treatment_cost))
    }

    pub fn request_quote(&mut self) {
        self.notify(Notification::success(
            "Detaylı teklif talebiniz alındı. En kısa sürede size dönüş yapılacaktır.",
        ));
    }

    // ─── Forms & reminders ───────────────────────────────

    pub fn toggle_reminder(&mut self, medication: &str) -> Result<bool, String> {
        let toggled = self.reminders.toggle(medication);
        let (active, notice) = self.check(toggled)?;
        self.notify(if active {
            Notification::success(notice)
        } else {
            Notification::info(notice)
        });
        Ok(active)
    }

    pub fn active_reminders(&self) -> Vec<String> {
        self.reminders.active()
    }

    pub fn add_medication(&mut self) {
        self.notify(Notification::info(forms::ADD_MEDICATION_NOTICE));
    }

    pub fn submit_second_opinion(&mut self, request: &SecondOpinionRequest) -> Result<(), String> {
        self.check(request.validate())?;
        self.notify(Notification::success(forms::SECOND_OPINION_SENT));
        Ok(())
    }

    pub fn subscribe_newsletter(&mut self, email: &str) -> Result<(), String> {
        self.check(forms::validate_email(email))?;
        self.notify(Notification::success(forms::NEWSLETTER_JOINED));
        Ok(())
    }
}
