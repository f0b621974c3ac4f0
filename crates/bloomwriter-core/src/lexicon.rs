//! Static keyword tables used by the analyzers
//!
//! These are fixed lexicons, loaded once into the binary. There is no
//! dynamic reconfiguration; the analytics are deliberately a keyword
//! classifier, not a trained model.

use regex::Regex;

/// Words that count toward a positive sentiment score.
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "joy",
    "excited",
    "grateful",
    "amazing",
    "wonderful",
    "great",
    "fantastic",
    "love",
    "peaceful",
    "calm",
    "content",
    "accomplished",
    "proud",
    "successful",
    "blessed",
    "beautiful",
    "perfect",
    "excellent",
    "awesome",
    "brilliant",
    "incredible",
    "outstanding",
];

/// Words that count toward a negative sentiment score.
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "frustrated",
    "worried",
    "anxious",
    "stressed",
    "tired",
    "exhausted",
    "disappointed",
    "hurt",
    "lonely",
    "overwhelmed",
    "difficult",
    "challenging",
    "hard",
    "terrible",
    "awful",
    "horrible",
    "upset",
    "depressed",
    "broken",
    "devastated",
];

/// Theme categories and the keywords that map into them.
///
/// Order is fixed; themes are reported in this order when multiple match.
pub const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "work",
        &[
            "work", "job", "career", "office", "meeting", "project", "deadline", "boss",
            "colleague",
        ],
    ),
    (
        "relationships",
        &[
            "friend",
            "family",
            "partner",
            "relationship",
            "love",
            "together",
            "conversation",
        ],
    ),
    (
        "health",
        &[
            "exercise", "gym", "run", "walk", "healthy", "doctor", "sleep", "tired", "energy",
        ],
    ),
    (
        "creativity",
        &[
            "create", "art", "music", "write", "design", "paint", "draw", "inspire", "idea",
        ],
    ),
    (
        "travel",
        &[
            "trip",
            "travel",
            "vacation",
            "journey",
            "explore",
            "adventure",
            "visit",
            "destination",
        ],
    ),
    (
        "growth",
        &[
            "learn", "grow", "develop", "improve", "progress", "goal", "achieve", "challenge",
        ],
    ),
    (
        "gratitude",
        &[
            "grateful", "thankful", "blessed", "appreciate", "fortunate", "lucky", "gift",
        ],
    ),
    (
        "nature",
        &[
            "outside", "nature", "garden", "tree", "sky", "sun", "rain", "weather", "fresh",
        ],
    ),
];

/// Activity categories used by the mood-activity detector.
///
/// Matching is exact per token. Note that "walk" appears under both
/// exercise and nature; the double-count is intentional and affects which
/// activity wins ties. "fresh air" is a two-token phrase and never matches
/// a single token; it is kept for parity with the theme lexicon.
pub const ACTIVITY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "exercise",
        &["walk", "run", "gym", "workout", "exercise", "bike", "yoga", "swim"],
    ),
    (
        "social",
        &["friend", "family", "dinner", "coffee", "meet", "visit", "call", "chat"],
    ),
    (
        "creative",
        &["write", "draw", "paint", "music", "create", "design", "art", "photo"],
    ),
    (
        "nature",
        &["park", "garden", "outside", "nature", "tree", "sun", "walk", "fresh air"],
    ),
    (
        "rest",
        &["sleep", "nap", "rest", "relax", "bath", "read", "meditate", "quiet"],
    ),
];

/// Keywords that mark an entry as growth-oriented (substring match,
/// case-insensitive). Used by the growth-trend detector.
pub const GROWTH_KEYWORDS: &[&str] = &[
    "learn", "grow", "improve", "better", "progress", "achieve", "goal", "challenge", "overcome",
];

/// Sentence patterns that qualify a sentence as a "growth moment":
/// first-person realization, strength, overcoming, gratitude, insight.
pub fn growth_moment_patterns() -> Vec<Regex> {
    [
        r"(?i)i (learned|realized|discovered|understood)",
        r"(?i)i feel (stronger|better|more confident|proud)",
        r"(?i)i (overcame|handled|managed|dealt with)",
        r"(?i)i'm (grateful|thankful|appreciative)",
        r"(?i)it made me (realize|think|feel)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
}
