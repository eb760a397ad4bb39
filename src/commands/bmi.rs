use tauri::State;

use crate::services::bmi::{BmiInput, BmiResult};
use crate::state::PortalState;

/// Validate the form and calculate BMI
#[tauri::command]
pub async fn calculate_bmi(
    state: State<'_, PortalState>,
    input: BmiInput,
) -> Result<BmiResult, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.calculate_bmi(&input)
}

/// Write the text report of the last calculation, returns its path
#[tauri::command]
pub async fn download_bmi_report(state: State<'_, PortalState>) -> Result<String, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    let today = chrono::Local::now().date_naive();
    let path = portal.export_bmi_report(today)?;
    Ok(path.to_string_lossy().to_string())
}

/// Text for the share sheet / clipboard
#[tauri::command]
pub async fn share_bmi_result(state: State<'_, PortalState>) -> Result<String, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.share_bmi()
}

#[tauri::command]
pub async fn book_nutritionist_appointment(state: State<'_, PortalState>) -> Result<(), String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.book_nutritionist();
    Ok(())
}
