//! Speech request shaping and voice ranking.

use serde::{Deserialize, Serialize};

/// Language tag every request is spoken in.
pub const SPEECH_LANG: &str = "en-US";

/// Pitch applied to every request.
pub const SPEECH_PITCH: f32 = 1.05;

/// Name fragments of preferred voices, best first.
const PREFERRED_VOICE_NAMES: [&str; 3] = ["Natural", "Neural", "Google US English"];

/// A voice installed on the platform speech engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    pub name: String,
    pub lang: String,
}

impl VoiceDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }

    #[must_use]
    pub fn is_us_english(&self) -> bool {
        self.lang.contains(SPEECH_LANG)
    }
}

/// Pick the best US-English voice.
///
/// Ranks by the first preferred name fragment the voice name contains, falling
/// back to the first US-English voice. Returns `None` when no US-English voice
/// is installed, leaving the choice to the platform default.
#[must_use]
pub fn select_voice(voices: &[VoiceDescriptor]) -> Option<&VoiceDescriptor> {
    let us_voices: Vec<&VoiceDescriptor> = voices.iter().filter(|v| v.is_us_english()).collect();

    PREFERRED_VOICE_NAMES
        .iter()
        .find_map(|fragment| us_voices.iter().find(|v| v.name.contains(fragment)))
        .or_else(|| us_voices.first())
        .copied()
}

/// Everything the platform engine needs to speak one utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: &'static str,
    /// Voice name, or `None` for the platform default.
    pub voice: Option<String>,
    pub rate: f32,
    pub pitch: f32,
}

impl SpeechRequest {
    #[must_use]
    pub fn new(text: impl Into<String>, rate: f32, voice: Option<&VoiceDescriptor>) -> Self {
        Self {
            text: text.into(),
            lang: SPEECH_LANG,
            voice: voice.map(|v| v.name.clone()),
            rate,
            pitch: SPEECH_PITCH,
        }
    }
}
