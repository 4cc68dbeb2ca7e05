// src/services/fallback.rs
use rand::Rng;

use crate::message::Language;

/// Marker placed in `ChatResponse.error` when the reply is an offline
/// fallback rather than model output.
pub const UPSTREAM_UNAVAILABLE: &str = "API temporarily unavailable";

const OFFLINE_EN: [&str; 4] = [
    "I apologize, but I'm currently offline. Your feelings matter, and I'll be back to support you soon.",
    "I understand this might be a difficult time. Please be patient - I'll be available to help you shortly.",
    "Your wellbeing is important to me. For now, please take deep breaths and remember that you're not alone.",
    "I'm temporarily unavailable, but please know that what you're going through is valid. I'll be here to listen soon.",
];

const OFFLINE_UR: [&str; 3] = [
    "معذرت، میں اس وقت آن لائن نہیں ہوں۔ آپ کے جذبات اہم ہیں اور میں جلد ہی واپس آؤں گا۔",
    "میں سمجھ سکتا ہوں کہ یہ مشکل وقت ہو سکتا ہے۔ براہ کرم صبر کریں، میں جلد دستیاب ہوں گا۔",
    "آپ کی بات سننا میرے لیے اہم ہے۔ فی الوقت، گہری سانس لیں اور یاد رکھیں کہ آپ اکیلے نہیں ہیں۔",
];

/// The full offline set for a language. Exposed so tests can assert membership.
pub fn offline_replies(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &OFFLINE_EN,
        Language::Ur => &OFFLINE_UR,
    }
}

/// Pick one offline reply at random from the language's fixed set.
pub fn offline_reply(language: Language) -> &'static str {
    let pool = offline_replies(language);
    let mut rng = rand::rng();
    pool[rng.random_range(0..pool.len())]
}
