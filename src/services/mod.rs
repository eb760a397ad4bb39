// Services module: page logic separated from Tauri commands
pub mod appointment;
pub mod bmi;
pub mod chatbot;
pub mod forms;
pub mod insurance;
pub mod notify;
pub mod portal;
pub mod symptom;
pub mod wizard;
