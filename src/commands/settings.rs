use std::path::PathBuf;

use tauri::{Manager, State};

use crate::config::{self, PortalSettings};
use crate::state::PortalState;

pub fn settings_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, String> {
    let config_dir = app_handle
        .path()
        .app_config_dir()
        .map_err(|e| e.to_string())?;
    Ok(config_dir.join(config::SETTINGS_FILE))
}

#[tauri::command]
pub async fn get_settings(state: State<'_, PortalState>) -> Result<PortalSettings, String> {
    let portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.settings.clone())
}

/// Persist settings and apply them to the running session
#[tauri::command]
pub async fn save_settings(
    settings: PortalSettings,
    state: State<'_, PortalState>,
    app_handle: tauri::AppHandle,
) -> Result<(), String> {
    let path = settings_path(&app_handle)?;
    config::save(&path, &settings).map_err(|e| format!("{:#}", e))?;

    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.apply_settings(settings);
    Ok(())
}
