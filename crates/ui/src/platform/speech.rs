use async_trait::async_trait;
use dioxus::document;
use dioxus::prelude::spawn;
use lesson_core::speech::{SpeechRequest, VoiceDescriptor};
use services::{PlaybackService, SpeechEngine};

use super::scripts::{LIST_VOICES_SCRIPT, speak_script};

/// Speech through the webview's `speechSynthesis` API.
///
/// Must be used from inside the Dioxus runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewSpeechEngine;

#[async_trait(?Send)]
impl SpeechEngine for WebviewSpeechEngine {
    async fn voices(&self) -> Vec<VoiceDescriptor> {
        match document::eval(LIST_VOICES_SCRIPT)
            .join::<Vec<VoiceDescriptor>>()
            .await
        {
            Ok(voices) => voices,
            Err(err) => {
                log::warn!("could not list speech voices: {err:?}");
                Vec::new()
            }
        }
    }

    fn speak(&self, request: SpeechRequest) {
        match speak_script(&request) {
            Ok(script) => {
                let _ = document::eval(&script);
            }
            Err(err) => log::warn!("could not encode speech request: {err}"),
        }
    }
}

/// Speak `text` without waiting for the engine.
pub fn speak_in_background(text: String, rate: f32) {
    spawn(async move {
        PlaybackService::new(WebviewSpeechEngine)
            .speak(&text, rate)
            .await;
    });
}
