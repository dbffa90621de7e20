//! Tone tags.
//!
//! A tone tag is a short code appended to a message (`/j`, `/pos`, `/srs`, ...)
//! that tells the reader how the message is meant. The vocabulary is closed:
//! anything outside it is ordinary message text.
//!
//! Each tag carries a display label and an emphasis mask with one digit per
//! label character. A `1` marks a character that spells out the code, e.g.
//! `hj` → `half-joking` → `10000100000`.
//!
//! # Example
//!
//! ```rust
//! use tonalchat::tone::Tone;
//!
//! let tone: Tone = "hj".parse().unwrap();
//! assert_eq!(tone.label(), "half-joking");
//!
//! let emphasized: String = tone
//!     .emphasized()
//!     .filter(|(_, on)| *on)
//!     .map(|(c, _)| c)
//!     .collect();
//! assert_eq!(emphasized, "hj");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Message;

macro_rules! define_tones {
    ($($variant:ident => $code:literal, $label:literal, $mask:literal;)+) => {
        /// A tone tag from the closed vocabulary.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Tone {
            $(
                #[doc = $label]
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl Tone {
            /// Every tone in vocabulary order.
            pub const ALL: &'static [Tone] = &[$(Tone::$variant),+];

            /// The short code written after the slash, e.g. `"pos"`.
            pub fn code(self) -> &'static str {
                match self {
                    $(Tone::$variant => $code,)+
                }
            }

            /// Human-readable label, e.g. `"positive"`.
            pub fn label(self) -> &'static str {
                match self {
                    $(Tone::$variant => $label,)+
                }
            }

            /// Emphasis mask over the label characters, as a string of `0`/`1`.
            pub fn emphasis_mask(self) -> &'static str {
                match self {
                    $(Tone::$variant => $mask,)+
                }
            }

            /// Looks up a tone by its exact (case-sensitive) code.
            pub fn from_code(code: &str) -> Option<Tone> {
                match code {
                    $($code => Some(Tone::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

define_tones! {
    Joking => "j", "joking", "100000";
    HalfJoking => "hj", "half-joking", "10000100000";
    Sarcastic => "s", "sarcastic", "100000000";
    Genuine => "gen", "genuine", "1110000";
    Serious => "srs", "serious", "1010001";
    NonSerious => "nsrs", "non-serious", "10001010001";
    Positive => "pos", "positive", "11100000";
    Neutral => "neu", "neutral", "1110000";
    Negative => "neg", "negative", "11100000";
    Platonic => "p", "platonic", "10000000";
    Romantic => "r", "romantic", "10000000";
    Copypasta => "c", "copypasta", "100000000";
    Lyrics => "l", "lyrics", "100000";
    LightHearted => "lh", "light-hearted", "1000001000000";
    NotMad => "nm", "not mad", "1000100";
    LittleUpset => "lu", "a little upset", "00100000010000";
    NobodyHere => "nbh", "directed at nobody here", "00000000000010100001000";
    NotSubtweeting => "nsb", "not subtweeting", "100010100000000";
    SexualIntent => "sx", "sexual intent", "1010000000000";
    NonSexualIntent => "nsx", "non-sexual intent", "10001010000000000";
    Rhetorical => "rh", "rhetorical question", "1100000000000000000";
    Teasing => "t", "teasing", "1000000";
    InsideJoke => "ij", "inside joke", "10000001000";
    Metaphorically => "m", "metaphorically", "10000000000000";
    Literally => "li", "literally", "110000000";
    Hyperbole => "hyp", "hyperbole", "111000000";
    Fake => "f", "fake", "1000";
    Threat => "th", "threat", "110000";
    Clickbait => "cb", "clickbait", "100001000";
}

impl Tone {
    /// Shown in place of a tone for messages that carry none.
    pub const PLACEHOLDER: &'static str = "...";

    /// Pairs each label character with its emphasis bit.
    pub fn emphasized(self) -> impl Iterator<Item = (char, bool)> {
        self.label()
            .chars()
            .zip(self.emphasis_mask().bytes().map(|b| b == b'1'))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.code())
    }
}

impl FromStr for Tone {
    type Err = String;

    /// Accepts a bare code (`pos`) or a slash-prefixed one (`/pos`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.strip_prefix('/').unwrap_or(s);
        Tone::from_code(code).ok_or_else(|| format!("Unknown tone tag: '{}'", s))
    }
}

/// Overlays tones predicted by an external classifier onto parsed messages.
///
/// The i-th prediction is assigned to the i-th message. A `None` prediction
/// clears the message's tone; messages past the end of `predictions` keep
/// whatever tone they already had.
///
/// # Example
///
/// ```rust
/// use tonalchat::tone::{Tone, blend_predictions};
/// use tonalchat::parser::parse_str;
///
/// let messages = parse_str("[20.06.19, 15:58:53] John: Hey", &Default::default())?;
/// let blended = blend_predictions(messages, &[Some(Tone::Genuine)]);
/// assert_eq!(blended[0].tone, Some(Tone::Genuine));
/// # Ok::<(), tonalchat::TonalchatError>(())
/// ```
pub fn blend_predictions(messages: Vec<Message>, predictions: &[Option<Tone>]) -> Vec<Message> {
    messages
        .into_iter()
        .enumerate()
        .map(|(idx, mut msg)| {
            if let Some(prediction) = predictions.get(idx) {
                msg.tone = *prediction;
            }
            msg
        })
        .collect()
}
