//! System-prompt composition.
//!
//! Pure string templating over the classifier's output: persona, standing
//! rules, an optional crisis directive, the detected emotion with its
//! behavioral hint, and the response-style coda. Deterministic given its two
//! inputs.

mod persona;

pub use persona::{COMPANION_PROMPT, CRISIS_DIRECTIVE, RESPONSE_STYLE};

use crate::classifier::EmotionLabel;

/// Behavioral hint for the detected emotion. The mapping is fixed; every
/// label has exactly one hint.
pub fn emotion_guidance(emotion: EmotionLabel) -> &'static str {
    match emotion {
        EmotionLabel::Anxious => {
            "The user seems anxious. Offer grounding: slow breathing, naming what they can control, one small next step."
        }
        EmotionLabel::Sad => {
            "The user seems sad. Offer comfort and sit with the feeling; validate grief and loss without rushing past them."
        }
        EmotionLabel::Angry => {
            "The user seems angry. Validate the frustration as understandable before exploring what is underneath it."
        }
        EmotionLabel::Stressed => {
            "The user seems stressed. Acknowledge the pressure they are under and suggest small, permissible breaks."
        }
        EmotionLabel::Lonely => {
            "The user seems lonely. Show genuine warmth and presence; gently affirm that connection is possible."
        }
        EmotionLabel::Hopeful => {
            "The user sounds hopeful. Celebrate the shift and reinforce what is helping."
        }
        EmotionLabel::Happy => {
            "The user sounds happy. Share in the joy and reflect it back warmly."
        }
        EmotionLabel::Calm => {
            "The user sounds calm. Reinforce the calm and what brought it about."
        }
        EmotionLabel::Neutral => {
            "No strong emotion detected. Listen openly and let the user set the direction."
        }
    }
}

/// Build the full system instruction for one turn.
pub fn compose_system_prompt(emotion: EmotionLabel, crisis: bool) -> String {
    let mut prompt = String::new();

    // 1. Persona and standing rules
    prompt.push_str(persona::COMPANION_PROMPT);
    prompt.push_str("\n\n");

    // 2. Crisis directive, only when flagged
    if crisis {
        prompt.push_str(persona::CRISIS_DIRECTIVE);
        prompt.push_str("\n\n");
    }

    // 3. Detected emotion and its hint
    prompt.push_str(&format!("Current detected emotion: {emotion}\n"));
    prompt.push_str(emotion_guidance(emotion));
    prompt.push_str("\n\n");

    // 4. Style coda
    prompt.push_str(persona::RESPONSE_STYLE);

    prompt
}
