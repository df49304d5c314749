//! Synthesis voice selection.

use serde::{Deserialize, Serialize};

/// Narrator persona used for speech synthesis.
///
/// Each voice is backed by a fixed synthesis model; see
/// `echoverse_models::HuggingFaceSynthesizer::model_for`.
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
pub enum Voice {
    /// Female narrator
    #[default]
    Female,
    /// Male narrator
    Male,
}
