use tauri::State;

use crate::services::forms::SecondOpinionRequest;
use crate::services::insurance::{CoverageEstimate, TreatmentDetails};
use crate::services::notify::Notification;
use crate::services::portal::{self, BlogPost, CalendarView, EventCard, MonthStep, PortalTab};
use crate::state::PortalState;

#[tauri::command]
pub async fn switch_tab(
    state: State<'_, PortalState>,
    tab: String,
) -> Result<Vec<(PortalTab, bool)>, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.switch_tab(&tab)
}

#[tauri::command]
pub async fn switch_calendar_view(
    state: State<'_, PortalState>,
    view: CalendarView,
) -> Result<CalendarView, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.switch_calendar_view(view))
}

/// Category buttons and the search box combined
#[tauri::command]
pub async fn filter_blog_posts(
    posts: Vec<BlogPost>,
    category: Option<String>,
    search: Option<String>,
) -> Result<Vec<BlogPost>, String> {
    Ok(portal::filter_posts(
        &posts,
        category.as_deref().unwrap_or(portal::ALL_CATEGORIES),
        search.as_deref().unwrap_or(""),
    ))
}

/// Month arrows; returns the offset from the current month
#[tauri::command]
pub async fn change_calendar_month(
    state: State<'_, PortalState>,
    step: MonthStep,
) -> Result<i32, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.step_calendar_month(step))
}

#[tauri::command]
pub async fn add_timeline_event(state: State<'_, PortalState>) -> Result<(), String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.add_timeline_event();
    Ok(())
}

#[tauri::command]
pub async fn filter_events(
    events: Vec<EventCard>,
    category: String,
) -> Result<Vec<EventCard>, String> {
    Ok(portal::filter_events_by_category(&events, &category)
        .into_iter()
        .cloned()
        .collect())
}

#[tauri::command]
pub async fn register_for_event(
    state: State<'_, PortalState>,
    title: Option<String>,
) -> Result<String, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.register_for_event(title.as_deref()))
}

/// Treatment card clicked
#[tauri::command]
pub async fn select_treatment(
    state: State<'_, PortalState>,
    treatment: String,
) -> Result<TreatmentDetails, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.select_treatment(&treatment)
}

#[tauri::command]
pub async fn calculate_insurance_coverage(
    state: State<'_, PortalState>,
    insurance_type: String,
) -> Result<Option<CoverageEstimate>, String> {
    let portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.insurance_coverage(&insurance_type))
}

#[tauri::command]
pub async fn request_quote(state: State<'_, PortalState>) -> Result<(), String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.request_quote();
    Ok(())
}

#[tauri::command]
pub async fn toggle_medication_reminder(
    state: State<'_, PortalState>,
    medication: String,
) -> Result<bool, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.toggle_reminder(&medication)
}

#[tauri::command]
pub async fn get_active_reminders(state: State<'_, PortalState>) -> Result<Vec<String>, String> {
    let portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.active_reminders())
}

#[tauri::command]
pub async fn add_medication(state: State<'_, PortalState>) -> Result<(), String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.add_medication();
    Ok(())
}

#[tauri::command]
pub async fn submit_second_opinion(
    state: State<'_, PortalState>,
    request: SecondOpinionRequest,
) -> Result<(), String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.submit_second_opinion(&request)
}

#[tauri::command]
pub async fn subscribe_newsletter(
    state: State<'_, PortalState>,
    email: String,
) -> Result<(), String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    portal.subscribe_newsletter(&email)
}

/// Notices still on screen; the page polls this
#[tauri::command]
pub async fn get_notifications(state: State<'_, PortalState>) -> Result<Vec<Notification>, String> {
    let mut portal = state.0.lock().map_err(|e| e.to_string())?;
    Ok(portal.notifications(chrono::Utc::now()))
}
