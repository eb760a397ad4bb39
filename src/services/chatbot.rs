use std::time::Duration;

use serde::Serialize;

/// Health coach chatbot, scripted replies matched on keywords

/// Checked in order; the first key found in the lowercased message wins.
const REPLIES: [(&str, &str); 5] = [
    (
        "baş ağrısı",
        "Baş ağrısı için öncelikle dinlenmenizi ve bol su içmenizi öneririm. Eğer ağrı devam ederse Nöroloji uzmanımızla randevu alabilirsiniz.",
    ),
    (
        "randevu",
        "Randevu almak için Online Randevu modülümüzü kullanabilir veya 0212 XXX XX XX numaralı telefonumuzu arayabilirsiniz.",
    ),
    (
        "doktor",
        "Hangi konuda uzman arıyorsunuz? Size en uygun doktorumuzu önerebilirim.",
    ),
    (
        "bmi",
        "BMI hesaplamak için BMI Hesaplayıcı modülümüzü kullanabilirsiniz. Boy, kilo, yaş ve cinsiyet bilgilerinizi girerek detaylı analiz alabilirsiniz.",
    ),
    (
        "kilo",
        "Kilo kontrolü için BMI hesaplayıcımızı kullanabilir, beslenme önerilerimizi inceleyebilir ve diyetisyen randevusu alabilirsiniz.",
    ),
];

pub const DEFAULT_REPLY: &str =
    "Sorunuzla ilgili size yardımcı olmaya çalışacağım. Daha detaylı bilgi için uzmanlarımızla iletişime geçebilirsiniz.";

/// Prompts offered as one-click buttons under the chat box
pub const QUICK_QUESTIONS: [&str; 4] = [
    "Baş ağrısı için ne yapmalıyım?",
    "Randevu nasıl alırım?",
    "BMI nedir?",
    "Kilo vermek istiyorum",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Pick the canned reply for a message
pub fn reply_for(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    REPLIES
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

/// Answer after `delay`. Blank input gets no answer.
pub async fn respond(message: &str, delay: Duration) -> Option<ChatMessage> {
    let message = message.trim();
    if message.is_empty() {
        return None;
    }

    let reply = reply_for(message);
    tokio::time::sleep(delay).await;

    Some(ChatMessage {
        sender: Sender::Bot,
        text: reply.to_string(),
    })
}
