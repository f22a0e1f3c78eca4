//! Emotion and crisis detection over raw user text.
//!
//! Pure keyword matching: lowercase the input once, scan the category lists
//! in a fixed priority order, first match wins. Crisis detection runs against
//! a single flat phrase list and is independent of the emotion result. Total
//! over any input; nothing here can fail.

mod keywords;

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Labels and locales
// ============================================================================

/// Supported interface locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Es,
    Fr,
    De,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse emotion category assigned to a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionLabel {
    Anxious,
    Sad,
    Angry,
    Stressed,
    Lonely,
    Hopeful,
    Happy,
    Calm,
    Neutral,
}

impl EmotionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Anxious => "anxious",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Stressed => "stressed",
            EmotionLabel::Lonely => "lonely",
            EmotionLabel::Hopeful => "hopeful",
            EmotionLabel::Happy => "happy",
            EmotionLabel::Calm => "calm",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Parse a label name, yielding `Neutral` for anything unrecognized so
    /// header or wire garbage degrades instead of erroring.
    pub fn from_name(name: &str) -> Self {
        match name {
            "anxious" => EmotionLabel::Anxious,
            "sad" => EmotionLabel::Sad,
            "angry" => EmotionLabel::Angry,
            "stressed" => EmotionLabel::Stressed,
            "lonely" => EmotionLabel::Lonely,
            "hopeful" => EmotionLabel::Hopeful,
            "happy" => EmotionLabel::Happy,
            "calm" => EmotionLabel::Calm,
            _ => EmotionLabel::Neutral,
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Result of one classification pass over one user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub emotion: EmotionLabel,
    pub crisis: bool,
}

/// Immutable keyword tables driving classification. Built once at startup and
/// passed by reference into each call; the data itself is compiled in.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    emotions: &'static [keywords::EmotionKeywords],
    crisis: &'static [&'static str],
}

impl KeywordTable {
    /// The table compiled into the crate.
    pub const fn builtin() -> Self {
        Self {
            emotions: keywords::EMOTIONS,
            crisis: keywords::CRISIS,
        }
    }

    /// Classify one utterance. Empty or unmatched text comes back
    /// `(Neutral, false)`.
    pub fn classify(&self, text: &str, locale: Locale) -> Classification {
        let lower = text.to_lowercase();

        let crisis = self.crisis.iter().any(|kw| lower.contains(kw));
        let emotion = self
            .emotions
            .iter()
            .find(|category| category.matches(&lower, locale))
            .map(|category| category.emotion)
            .unwrap_or(EmotionLabel::Neutral);

        Classification { emotion, crisis }
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCALES: [Locale; 5] = [Locale::En, Locale::Hi, Locale::Es, Locale::Fr, Locale::De];

    fn classify(text: &str, locale: Locale) -> Classification {
        KeywordTable::builtin().classify(text, locale)
    }

    #[test]
    fn every_keyword_in_every_table_is_detectable() {
        let table = KeywordTable::builtin();
        for category in keywords::EMOTIONS {
            // English keywords are reachable from every locale through the
            // fallback; which category claims them depends on priority order.
            for kw in category.en {
                for locale in LOCALES {
                    let got = table.classify(kw, locale);
                    assert_ne!(
                        got.emotion,
                        EmotionLabel::Neutral,
                        "keyword {kw:?} unmatched under locale {locale}"
                    );
                }
            }
            // Localized keywords are reachable from their own locale.
            for (locale, list) in [
                (Locale::Hi, category.hi),
                (Locale::Es, category.es),
                (Locale::Fr, category.fr),
                (Locale::De, category.de),
            ] {
                for kw in list {
                    let got = table.classify(kw, locale);
                    assert_ne!(
                        got.emotion,
                        EmotionLabel::Neutral,
                        "keyword {kw:?} unmatched under locale {locale}"
                    );
                }
            }
        }
    }

    #[test]
    fn every_crisis_phrase_raises_the_flag() {
        for phrase in keywords::CRISIS {
            let got = classify(&format!("well, {phrase} today"), Locale::En);
            assert!(got.crisis, "crisis phrase {phrase:?} not flagged");
        }
    }

    #[test]
    fn each_category_detected_by_a_distinctive_keyword() {
        let cases = [
            ("I might panic during the meeting", EmotionLabel::Anxious),
            ("the grief comes in waves", EmotionLabel::Sad),
            ("I am absolutely furious with him", EmotionLabel::Angry),
            ("heading straight for burnout", EmotionLabel::Stressed),
            ("I feel isolated since the move", EmotionLabel::Lonely),
            ("honestly grateful for the small wins", EmotionLabel::Hopeful),
            ("pure joy watching them play", EmotionLabel::Happy),
            ("everything feels serene tonight", EmotionLabel::Calm),
        ];
        for (text, expected) in cases {
            assert_eq!(classify(text, Locale::En).emotion, expected, "input {text:?}");
        }
    }

    #[test]
    fn locale_lists_match_in_their_own_locale() {
        let cases = [
            ("मुझे घबराहट हो रही है", Locale::Hi, EmotionLabel::Anxious),
            ("estoy llorando otra vez", Locale::Es, EmotionLabel::Sad),
            ("complètement débordé cette semaine", Locale::Fr, EmotionLabel::Stressed),
            ("das war wunderbar heute", Locale::De, EmotionLabel::Happy),
        ];
        for (text, locale, expected) in cases {
            assert_eq!(classify(text, locale).emotion, expected, "input {text:?}");
        }
    }

    #[test]
    fn english_fallback_applies_in_other_locales() {
        // "furious" only exists in the English angry list; a German session
        // still detects it.
        assert_eq!(classify("I am furious", Locale::De).emotion, EmotionLabel::Angry);
        // Same for a category that does have a Hindi list but no Hindi hit.
        assert_eq!(classify("I might panic", Locale::Hi).emotion, EmotionLabel::Anxious);
    }

    #[test]
    fn priority_order_breaks_ties() {
        // Contains both an anxious and a happy keyword; anxious is checked
        // first and short-circuits.
        let got = classify("I'm scared but also happy about the news", Locale::En);
        assert_eq!(got.emotion, EmotionLabel::Anxious);

        // "stressed" sits in the anxious list as well as the stressed list;
        // the anxious category wins on order alone.
        assert_eq!(classify("so stressed out lately", Locale::En).emotion, EmotionLabel::Anxious);

        // Sad is checked before angry.
        let got = classify("I'm depressed and frustrated", Locale::En);
        assert_eq!(got.emotion, EmotionLabel::Sad);
    }

    #[test]
    fn unmatched_and_empty_text_is_neutral() {
        for locale in LOCALES {
            let got = classify("Tell me about the weather in Paris", locale);
            assert_eq!(got.emotion, EmotionLabel::Neutral);
            assert!(!got.crisis);

            let got = classify("", locale);
            assert_eq!(got.emotion, EmotionLabel::Neutral);
            assert!(!got.crisis);
        }
    }

    #[test]
    fn crisis_is_independent_of_emotion() {
        let got = classify("I feel happy but I want to end my life", Locale::En);
        assert!(got.crisis);
        assert_eq!(got.emotion, EmotionLabel::Happy);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("I AM FURIOUS", Locale::En).emotion, EmotionLabel::Angry);
        assert!(classify("I WANT TO END MY LIFE", Locale::En).crisis);
    }

    #[test]
    fn substring_matching_is_intentionally_loose() {
        // "nomads" contains "mad"; substring containment accepts this kind
        // of false positive.
        assert_eq!(classify("we lived as nomads", Locale::En).emotion, EmotionLabel::Angry);
    }

    #[test]
    fn worrying_and_panic_scenario() {
        let got = classify("I can't stop worrying and I feel like I might panic", Locale::En);
        assert_eq!(got.emotion, EmotionLabel::Anxious);
        assert!(!got.crisis);
    }

    #[test]
    fn end_my_life_scenario() {
        // Emotion may legitimately vary with keyword overlap; the flag must
        // not.
        assert!(classify("I want to end my life", Locale::En).crisis);
    }

    #[test]
    fn label_names_round_trip() {
        for label in [
            EmotionLabel::Anxious,
            EmotionLabel::Sad,
            EmotionLabel::Angry,
            EmotionLabel::Stressed,
            EmotionLabel::Lonely,
            EmotionLabel::Hopeful,
            EmotionLabel::Happy,
            EmotionLabel::Calm,
            EmotionLabel::Neutral,
        ] {
            assert_eq!(EmotionLabel::from_name(label.as_str()), label);
        }
        assert_eq!(EmotionLabel::from_name("confused"), EmotionLabel::Neutral);
        assert_eq!(EmotionLabel::from_name(""), EmotionLabel::Neutral);
    }
}
