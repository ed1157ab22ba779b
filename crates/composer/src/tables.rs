//! Static phrase tables keyed by tone and occasion.
//!
//! The two tables are orthogonal: tone only ever selects opener/closer pools,
//! occasion only ever selects the lead-in sentence.

use crate::types::{Occasion, Tone};

/// Placeholder replaced by the normalized recipient name in opener templates.
pub const RECIPIENT_PLACEHOLDER: &str = "{recipient}";

/// Opener templates and closer lines for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonePool {
    pub openers: &'static [&'static str],
    pub closers: &'static [&'static str],
}

impl TonePool {
    pub fn opener(&self, index: usize, recipient: &str) -> String {
        self.openers[index].replace(RECIPIENT_PLACEHOLDER, recipient)
    }

    pub fn closer(&self, index: usize) -> &'static str {
        self.closers[index]
    }
}

const WARM: TonePool = TonePool {
    openers: &["Dear {recipient},", "Hey {recipient},", "{recipient},"],
    closers: &[
        "I’m grateful for you—more than I say.",
        "You matter to me, in real ways.",
        "Thank you for being you.",
    ],
};

const UPLIFTING: TonePool = TonePool {
    openers: &["{recipient},", "Dear {recipient},", "Hey {recipient},"],
    closers: &[
        "Keep going—your light is real.",
        "I believe in you, fully.",
        "You’re built for better days.",
    ],
};

const COMFORTING: TonePool = TonePool {
    openers: &["Dear {recipient},", "{recipient},", "Hey {recipient},"],
    closers: &[
        "You don’t have to carry it alone.",
        "I’m here—steady, present, and real.",
        "May peace meet you, little by little.",
    ],
};

const GRATEFUL: TonePool = TonePool {
    openers: &["{recipient},", "Dear {recipient},", "Hey {recipient},"],
    closers: &[
        "Thank you for all you are and all you do.",
        "I don’t take you for granted—ever.",
        "You’ve made my life better.",
    ],
};

const CELEBRATORY: TonePool = TonePool {
    openers: &["Hey {recipient}!", "{recipient}!", "Dear {recipient},"],
    closers: &[
        "Today is yours—enjoy every moment.",
        "You deserve the celebration.",
        "Here’s to you—now and next.",
    ],
};

pub fn tone_pool(tone: Tone) -> &'static TonePool {
    match tone {
        Tone::Warm => &WARM,
        Tone::Uplifting => &UPLIFTING,
        Tone::Comforting => &COMFORTING,
        Tone::Grateful => &GRATEFUL,
        Tone::Celebratory => &CELEBRATORY,
    }
}

pub fn occasion_lead_in(occasion: Occasion) -> &'static str {
    match occasion {
        Occasion::Birthday => "On your birthday, I just want to say this clearly:",
        Occasion::ThinkingOfYou => "Just a note to remind you:",
        Occasion::JustBecause => "No special reason—just truth:",
        Occasion::Sympathy => "In this moment, I want you to know:",
        Occasion::Congratulations => "This is worth celebrating, and so are you:",
        Occasion::GetWell => "As you rest and recover, remember:",
        Occasion::Anniversary => "On your anniversary, I’m celebrating you both:",
    }
}

/// Transitional couplet shared by every poem.
pub const HEAVY_LINE: &str = "If the day feels heavy, I’ll hold hope for you—";
pub const BRIGHT_LINE: &str = "if it feels bright, I’ll celebrate right beside you.";

/// Second line of the meaning stanza when no meaning text was supplied.
pub const MEANING_FALLBACK_LINE: &str = "and I don’t say that lightly.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pool_is_non_empty_and_templated() {
        for tone in Tone::ALL {
            let pool = tone_pool(tone);
            assert!(!pool.openers.is_empty());
            assert!(!pool.closers.is_empty());
            for opener in pool.openers {
                assert!(opener.contains(RECIPIENT_PLACEHOLDER), "{tone}: {opener}");
            }
        }
    }

    #[test]
    fn opener_interpolates_recipient() {
        let pool = tone_pool(Tone::Celebratory);
        assert_eq!(pool.opener(0, "Ava"), "Hey Ava!");
        assert_eq!(pool.opener(2, "Ava"), "Dear Ava,");
    }

    #[test]
    fn closers_never_look_like_signatures() {
        for tone in Tone::ALL {
            for closer in tone_pool(tone).closers {
                assert!(!closer.starts_with("— "));
            }
        }
    }

    #[test]
    fn lead_ins_are_distinct() {
        let mut seen: Vec<&str> = Occasion::ALL.iter().map(|o| occasion_lead_in(*o)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), Occasion::ALL.len());
    }
}
