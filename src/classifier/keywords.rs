//! Keyword data backing emotion and crisis detection.
//!
//! Matching is plain substring containment over lowercased input, so short
//! entries can fire inside unrelated words; that looseness is accepted in
//! favor of recall. All entries must be lowercase.

use super::{EmotionLabel, Locale};

/// Keyword lists for one emotion category, one list per supported locale.
/// An empty slice means the category has no localized list and matching for
/// that locale falls back to the English list.
#[derive(Debug)]
pub struct EmotionKeywords {
    pub emotion: EmotionLabel,
    pub en: &'static [&'static str],
    pub hi: &'static [&'static str],
    pub es: &'static [&'static str],
    pub fr: &'static [&'static str],
    pub de: &'static [&'static str],
}

impl EmotionKeywords {
    fn for_locale(&self, locale: Locale) -> &'static [&'static str] {
        match locale {
            Locale::En => self.en,
            Locale::Hi => self.hi,
            Locale::Es => self.es,
            Locale::Fr => self.fr,
            Locale::De => self.de,
        }
    }

    /// Locale list first; the English list catches anything the locale list
    /// misses. A hit that exists only in the English list still counts.
    pub fn matches(&self, lower: &str, locale: Locale) -> bool {
        let localized = self.for_locale(locale);
        localized.iter().any(|kw| lower.contains(kw))
            || (locale != Locale::En && self.en.iter().any(|kw| lower.contains(kw)))
    }
}

const NONE: &[&str] = &[];

/// Emotion categories in detection priority order. The order is behavioral
/// contract: detection walks this table front to back and the first matching
/// category wins, so a message with both an anxious and a happy keyword is
/// classified anxious. Reordering changes results.
pub const EMOTIONS: &[EmotionKeywords] = &[
    EmotionKeywords {
        emotion: EmotionLabel::Anxious,
        en: &[
            "anxious", "anxiety", "worried", "nervous", "panic", "scared", "fear",
            "overwhelmed", "stressed",
        ],
        hi: &["चिंतित", "परेशान", "डर", "घबराहट", "भय", "तनाव"],
        es: &["ansioso", "preocupado", "nervioso", "pánico", "miedo", "temor"],
        fr: &["anxieux", "inquiet", "nerveux", "panique", "peur", "angoisse"],
        de: &["ängstlich", "besorgt", "nervös", "panik", "angst", "furcht"],
    },
    EmotionKeywords {
        emotion: EmotionLabel::Sad,
        en: &[
            "sad", "depressed", "down", "crying", "tears", "miserable", "unhappy",
            "grief", "loss", "lonely",
        ],
        hi: &["उदास", "दुखी", "रो रहा", "अकेला", "निराश", "दर्द"],
        es: &["triste", "deprimido", "llorando", "infeliz", "solo", "dolor"],
        fr: &["triste", "déprimé", "pleure", "malheureux", "seul", "chagrin"],
        de: &["traurig", "deprimiert", "weinen", "unglücklich", "einsam", "schmerz"],
    },
    EmotionKeywords {
        emotion: EmotionLabel::Angry,
        en: &["angry", "mad", "furious", "frustrated", "annoyed", "irritated", "rage"],
        hi: NONE,
        es: NONE,
        fr: NONE,
        de: NONE,
    },
    EmotionKeywords {
        emotion: EmotionLabel::Stressed,
        en: &["stressed", "pressure", "exhausted", "burnout", "tired", "overwhelmed", "busy"],
        hi: &["तनाव", "थका", "दबाव", "व्यस्त", "परेशान"],
        es: &["estresado", "presión", "agotado", "cansado", "ocupado"],
        fr: &["stressé", "pression", "épuisé", "fatigué", "débordé"],
        de: &["gestresst", "druck", "erschöpft", "müde", "überfordert"],
    },
    EmotionKeywords {
        emotion: EmotionLabel::Lonely,
        en: &["lonely", "alone", "isolated", "no friends", "nobody cares", "abandoned"],
        hi: NONE,
        es: NONE,
        fr: NONE,
        de: NONE,
    },
    EmotionKeywords {
        emotion: EmotionLabel::Hopeful,
        en: &["hopeful", "better", "improving", "positive", "grateful", "thankful"],
        hi: NONE,
        es: NONE,
        fr: NONE,
        de: NONE,
    },
    EmotionKeywords {
        emotion: EmotionLabel::Happy,
        en: &["happy", "joy", "excited", "great", "wonderful", "amazing", "good"],
        hi: &["खुश", "खुशी", "अच्छा", "बेहतर", "मज़ा"],
        es: &["feliz", "alegría", "emocionado", "genial", "maravilloso"],
        fr: &["heureux", "joie", "excité", "super", "merveilleux"],
        de: &["glücklich", "freude", "aufgeregt", "toll", "wunderbar"],
    },
    EmotionKeywords {
        emotion: EmotionLabel::Calm,
        en: &["calm", "peaceful", "relaxed", "content", "serene"],
        hi: NONE,
        es: NONE,
        fr: NONE,
        de: NONE,
    },
];

/// Crisis phrases. A single flat list shared by every locale so safety
/// coverage is never fragmented per language; entries from all supported
/// languages live side by side.
pub const CRISIS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "no reason to live",
    "self-harm",
    "hurt myself",
    "cutting",
    "overdose",
    "hopeless",
    "give up",
    "can't go on",
    "better off dead",
    "end it all",
    "no point living",
    "आत्महत्या",
    "मरना चाहता",
    "जीना नहीं चाहता",
    "suicidio",
    "quiero morir",
    "matarme",
    "envie de mourir",
    "en finir avec la vie",
    "selbstmord",
    "mich umbringen",
    "nicht mehr leben",
];
