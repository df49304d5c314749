//! Rewrite tone selection.

use serde::{Deserialize, Serialize};

/// Emotional tone the source text is rewritten in.
///
/// # Examples
///
/// ```
/// use echoverse_core::Tone;
///
/// let tone: Tone = "suspenseful".parse().unwrap();
/// assert_eq!(tone, Tone::Suspenseful);
/// assert_eq!(format!("{}", Tone::Humorous), "Humorous");
/// assert_eq!(Tone::default(), Tone::Neutral);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Tone {
    /// Clear, objective, unembellished
    #[default]
    Neutral,
    /// Tense pacing and foreshadowing
    Suspenseful,
    /// Uplifting and motivational
    Inspiring,
    /// Heightened emotion and conflict
    Dramatic,
    /// Witty, exaggerated, ironic
    Humorous,
}
