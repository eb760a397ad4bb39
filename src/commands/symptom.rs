use tauri::State;

use crate::services::symptom::{BodyPart, SpecialistReferral, SymptomSummary};
use crate::services::wizard::{StepOutcome, StepView};
use crate::state::PortalState;

#[tauri::command]
pub async fn select_body_part(
    state: State<'_, PortalState>,
    part: BodyPart,
) -> Result<SpecialistReferral, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.select_body_part(part);
    Ok(portal.symptom().referral())
}

#[tauri::command]
pub async fn select_symptom_duration(
    state: State<'_, PortalState>,
    duration: String,
) -> Result<(), String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.select_symptom_duration(&duration);
    Ok(())
}

/// Pain slider moved
#[tauri::command]
pub async fn set_pain_level(state: State<'_, PortalState>, level: u8) -> Result<u8, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.set_pain_level(level)
}

#[tauri::command]
pub async fn symptom_next_step(
    state: State<'_, PortalState>,
) -> Result<StepOutcome<SymptomSummary>, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.symptom_next()
}

#[tauri::command]
pub async fn symptom_previous_step(state: State<'_, PortalState>) -> Result<u8, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.symptom_previous())
}

#[tauri::command]
pub async fn get_symptom_step(state: State<'_, PortalState>) -> Result<StepView, String> {
    let portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.symptom_view())
}
