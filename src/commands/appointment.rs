use chrono::NaiveDate;
use tauri::State;

use crate::services::appointment::{
    self, AppointmentSummary, BookingConfirmation, Department, Doctor,
};
use crate::services::wizard::{StepOutcome, StepView};
use crate::state::PortalState;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[tauri::command]
pub async fn select_department(
    state: State<'_, PortalState>,
    department: Department,
) -> Result<String, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.select_department(department);
    Ok(department.display_name().to_string())
}

/// Doctor cards for step 2
#[tauri::command]
pub async fn list_doctors(state: State<'_, PortalState>) -> Result<Vec<Doctor>, String> {
    let portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.available_doctors().to_vec())
}

#[tauri::command]
pub async fn select_doctor(state: State<'_, PortalState>, name: String) -> Result<(), String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.select_doctor(&name)
}

/// Date picker value (YYYY-MM-DD). Returns the bookable time slots.
#[tauri::command]
pub async fn select_appointment_date(
    state: State<'_, PortalState>,
    date: String,
) -> Result<Vec<String>, String> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|e| format!("Geçersiz tarih {}: {}", date, e))?;
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.select_appointment_date(date, today())?;
    Ok(appointment::TIME_SLOTS.iter().map(|s| s.to_string()).collect())
}

#[tauri::command]
pub async fn select_appointment_time(
    state: State<'_, PortalState>,
    time: String,
) -> Result<(), String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.select_appointment_time(&time)
}

/// Min attribute for the date input
#[tauri::command]
pub async fn get_min_appointment_date() -> Result<String, String> {
    Ok(appointment::min_booking_date(today()).format("%Y-%m-%d").to_string())
}

#[tauri::command]
pub async fn appointment_next_step(
    state: State<'_, PortalState>,
) -> Result<StepOutcome<BookingConfirmation>, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.appointment_next()
}

#[tauri::command]
pub async fn appointment_previous_step(state: State<'_, PortalState>) -> Result<u8, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.appointment_previous())
}

#[tauri::command]
pub async fn get_appointment_summary(
    state: State<'_, PortalState>,
) -> Result<AppointmentSummary, String> {
    let portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.appointment().summary())
}

#[tauri::command]
pub async fn get_appointment_step(state: State<'_, PortalState>) -> Result<StepView, String> {
    let portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.appointment_view())
}
