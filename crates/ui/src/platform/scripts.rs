use lesson_core::speech::SpeechRequest;

/// Lists installed voices as `[{ name, lang }]`, waiting briefly for the
/// engine to populate them on first use.
pub(super) const LIST_VOICES_SCRIPT: &str = r#"
    const synth = window.speechSynthesis;
    if (!synth) {
        return [];
    }
    let voices = synth.getVoices();
    if (voices.length === 0) {
        voices = await new Promise((resolve) => {
            const done = () => resolve(synth.getVoices());
            synth.addEventListener("voiceschanged", done, { once: true });
            setTimeout(done, 500);
        });
    }
    return voices.map((voice) => ({ name: voice.name, lang: voice.lang }));
"#;

pub(super) fn speak_script(request: &SpeechRequest) -> Result<String, serde_json::Error> {
    let payload = serde_json::to_string(request)?;
    Ok(format!(
        r#"
    const request = {payload};
    const synth = window.speechSynthesis;
    if (!synth) {{
        return;
    }}
    const utterance = new SpeechSynthesisUtterance(request.text);
    if (request.voice) {{
        const voice = synth.getVoices().find((v) => v.name === request.voice);
        if (voice) {{
            utterance.voice = voice;
        }}
    }}
    utterance.lang = request.lang;
    utterance.rate = request.rate;
    utterance.pitch = request.pitch;
    synth.speak(utterance);
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::speech::VoiceDescriptor;

    #[test]
    fn speak_script_embeds_escaped_request() {
        let voice = VoiceDescriptor::new("Jenny (Natural)", "en-US");
        let request = SpeechRequest::new("It's called a \"hustle\".", 0.9, Some(&voice));
        let script = speak_script(&request).unwrap();

        assert!(script.contains(r#""text":"It's called a \"hustle\".""#), "{script}");
        assert!(script.contains(r#""voice":"Jenny (Natural)""#), "{script}");
        assert!(script.contains(r#""lang":"en-US""#), "{script}");
        assert!(script.contains("synth.speak(utterance)"));
    }

    #[test]
    fn speak_script_without_voice_uses_null() {
        let request = SpeechRequest::new("Try everything.", 1.0, None);
        let script = speak_script(&request).unwrap();
        assert!(script.contains(r#""voice":null"#), "{script}");
    }
}
