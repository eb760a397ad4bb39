// Hisar Portal — Core Library
// Interactive health modules for the hospital website: BMI calculator,
// symptom checker, appointment booking, health coach chat and portal widgets

pub mod config;
pub mod error;
pub mod services;
pub mod state;

#[cfg(feature = "desktop")]
mod commands;

pub use error::{PortalError, PortalResult};
pub use state::{Portal, PortalState};

/// Initialize the Hisar Portal desktop shell
#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    env_logger::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            let settings_path = commands::settings::settings_path(app.handle())?;
            let settings = config::load(&settings_path).unwrap_or_else(|e| {
                log::warn!("Falling back to default settings: {:#}", e);
                let mut settings = config::PortalSettings::default();
                settings.apply_env();
                settings
            });

            log::info!(
                "Hisar Portal started, reports go to {:?}",
                settings.resolved_report_dir()
            );
            app.manage(PortalState::new(settings));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // BMI calculator
            commands::bmi::calculate_bmi,
            commands::bmi::download_bmi_report,
            commands::bmi::share_bmi_result,
            commands::bmi::book_nutritionist_appointment,
            // Symptom checker
            commands::symptom::select_body_part,
            commands::symptom::select_symptom_duration,
            commands::symptom::set_pain_level,
            commands::symptom::symptom_next_step,
            commands::symptom::symptom_previous_step,
            commands::symptom::get_symptom_step,
            // Appointment booking
            commands::appointment::select_department,
            commands::appointment::list_doctors,
            commands::appointment::select_doctor,
            commands::appointment::select_appointment_date,
            commands::appointment::select_appointment_time,
            commands::appointment::get_min_appointment_date,
            commands::appointment::appointment_next_step,
            commands::appointment::appointment_previous_step,
            commands::appointment::get_appointment_summary,
            commands::appointment::get_appointment_step,
            // Health coach
            commands::chat::send_chat_message,
            commands::chat::get_quick_questions,
            // Portal, blog, calendar, forms
            commands::portal::switch_tab,
            commands::portal::switch_calendar_view,
            commands::portal::change_calendar_month,
            commands::portal::add_timeline_event,
            commands::portal::filter_blog_posts,
            commands::portal::filter_events,
            commands::portal::register_for_event,
            commands::portal::select_treatment,
            commands::portal::calculate_insurance_coverage,
            commands::portal::request_quote,
            commands::portal::toggle_medication_reminder,
            commands::portal::get_active_reminders,
            commands::portal::add_medication,
            commands::portal::submit_second_opinion,
            commands::portal::subscribe_newsletter,
            commands::portal::get_notifications,
            // Settings
            commands::settings::get_settings,
            commands::settings::save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("Error running Hisar Portal");
}
