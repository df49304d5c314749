//! Tone-specific prompt assembly.

use echoverse_core::Tone;

/// Sampling temperature for every rewrite.
pub const REWRITE_TEMPERATURE: f32 = 0.7;

/// System instruction shared by all tones.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert editor specializing in rewriting text to fit a specific tone. Your task is to rewrite the user-provided text to match the requested emotional tone while meticulously preserving the original meaning, characters, and plot points. Do not add new information or deviate from the source material's core narrative. Respond only with the rewritten text.";

/// Technique guidance and a worked example for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneGuidance {
    /// What the rewrite should focus on
    pub instruction: &'static str,
    /// A before/after pair illustrating the tone
    pub example: &'static str,
}

/// Guidance for `tone`.
///
/// Adding a tone to [`Tone`] fails to compile until it gets an entry here.
pub fn guidance_for(tone: Tone) -> ToneGuidance {
    match tone {
        Tone::Neutral => ToneGuidance {
            instruction: "Your task is to rewrite the following text with a **Neutral** tone. Focus on these techniques:\n\n*   **Clarity and Objectivity:** Present information directly and without bias.\n*   **Simple Language:** Avoid emotional, figurative, or overly descriptive words.\n*   **Formal Structure:** Use clear and straightforward sentence structures.",
            example: "*   **Original:** The terrifying storm crashed against the shore, its angry waves clawing at the sand!\n*   **Rewritten:** The storm reached the coast, and the waves moved up the beach.",
        },
        Tone::Suspenseful => ToneGuidance {
            instruction: "Your task is to rewrite the following text with a **Suspenseful** tone. Focus on these techniques:\n\n*   **Pacing:** Use a mix of short, punchy sentences for action and longer sentences to build atmosphere.\n*   **Foreshadowing:** Introduce subtle hints of danger or mystery.\n*   **Sensory Details:** Emphasize unsettling sounds, sights, and feelings (e.g., a cold draft, a floorboard creaking).",
            example: "*   **Original:** He walked into the dark room.\n*   **Rewritten:** Each footstep echoed as he pushed the door open, revealing a darkness so complete it felt like a physical presence.",
        },
        Tone::Inspiring => ToneGuidance {
            instruction: "Your task is to rewrite the following text with an **Inspiring** tone. Focus on these techniques:\n\n*   **Positive Vocabulary:** Use powerful, uplifting words that evoke hope and determination.\n*   **Empowering Language:** Focus on themes of overcoming challenges, resilience, and success.\n*   **Rhythmic Flow:** Create a motivational cadence with varied sentence lengths.",
            example: "*   **Original:** She worked hard and finished the project.\n*   **Rewritten:** With unwavering determination, she conquered every obstacle, ultimately achieving a triumphant conclusion to her project.",
        },
        Tone::Dramatic => ToneGuidance {
            instruction: "Your task is to rewrite the following text with a **Dramatic** tone. Focus on these techniques:\n\n*   **Emotional Intensity:** Amplify the emotions of the characters and the scene. Use strong, emotive adjectives and adverbs.\n*   **Heightened Conflict:** Emphasize the stakes and the tension between opposing forces.\n*   **Figurative Language:** Use metaphors and similes to create powerful imagery.",
            example: "*   **Original:** They argued about the decision.\n*   **Rewritten:** A chasm of bitterness opened between them, every word a stone thrown across the divide, threatening to shatter their fragile peace.",
        },
        Tone::Humorous => ToneGuidance {
            instruction: "Your task is to rewrite the following text with a **Humorous** tone. Focus on these techniques:\n\n*   **Wit and Wordplay:** Use puns, irony, and clever phrasing.\n*   **Exaggeration (Hyperbole):** Overstate situations for comedic effect.\n*   **Understatement:** Describe absurd situations with a straight face for ironic effect.",
            example: "*   **Original:** The cat was slightly overweight.\n*   **Rewritten:** The cat wasn't just fluffy; it was a feline planet, possessing its own gravitational pull that attracted nearby snacks.",
        },
    }
}

/// Build the user prompt for rewriting `text` in `tone`.
///
/// # Examples
///
/// ```
/// use echoverse_core::Tone;
/// use echoverse_models::compose_prompt;
///
/// let prompt = compose_prompt("The cat sat.", Tone::Humorous);
/// assert!(prompt.contains("**Humorous**"));
/// assert!(prompt.ends_with("---\n\nThe cat sat."));
/// ```
pub fn compose_prompt(text: &str, tone: Tone) -> String {
    let guidance = guidance_for(tone);
    format!(
        "{}\n\n**Example:**\n{}\n\nNow, rewrite this text:\n\n---\n\n{}",
        guidance.instruction, guidance.example, text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_only_selected_tone() {
        let prompt = compose_prompt("Some text", Tone::Inspiring);
        assert!(prompt.contains("**Inspiring**"));
        assert!(!prompt.contains("**Neutral**"));
        assert!(!prompt.contains("**Dramatic**"));
    }
}
