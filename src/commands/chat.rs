use tauri::State;

use crate::services::chatbot::{self, ChatMessage};
use crate::state::PortalState;

/// Answer a chat message after the configured delay.
/// The lock is released before waiting.
#[tauri::command]
pub async fn send_chat_message(
    state: State<'_, PortalState>,
    message: String,
) -> Result<Option<ChatMessage>, String> {
    let delay = {
        let portal = state.0.lock().map_err(|e| e.to_string())?;
        portal.settings.chat_delay()
    };
    Ok(chatbot::respond(&message, delay).await)
}

#[tauri::command]
pub async fn get_quick_questions() -> Result<Vec<String>, String> {
    Ok(chatbot::QUICK_QUESTIONS.iter().map(|q| q.to_string()).collect())
}
