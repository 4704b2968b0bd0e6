use async_trait::async_trait;
use lesson_core::speech::{SpeechRequest, VoiceDescriptor, select_voice};

/// Platform speech engine.
///
/// Engines usually live on the UI thread, so futures are not `Send`.
#[async_trait(?Send)]
pub trait SpeechEngine {
    /// Voices currently installed. Engines that cannot enumerate voices return
    /// an empty list.
    async fn voices(&self) -> Vec<VoiceDescriptor>;

    /// Start speaking. Completion is not reported back.
    fn speak(&self, request: SpeechRequest);
}

/// Speaks text with the best available US-English voice.
pub struct PlaybackService<E> {
    engine: E,
}

impl<E: SpeechEngine> PlaybackService<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Hand `text` to the engine at `rate`. Fire-and-forget.
    pub async fn speak(&self, text: &str, rate: f32) {
        let voices = self.engine.voices().await;
        let voice = select_voice(&voices);
        if voice.is_none() {
            log::debug!("no en-US voice among {} installed; using platform default", voices.len());
        }
        self.engine.speak(SpeechRequest::new(text, rate, voice));
    }
}
