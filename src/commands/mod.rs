// Tauri commands: thin wrappers over `Portal` and the services
pub mod appointment;
pub mod bmi;
pub mod chat;
pub mod portal;
pub mod settings;
pub mod symptom;
