use dioxus::prelude::*;
use lesson_core::model::Settings;

use crate::context::AppContext;
use crate::views::UiState;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Clear every finished flag and refresh the rendered progress.
pub(crate) fn use_reset_progress() -> Callback<()> {
    let ctx = use_context::<AppContext>();
    let mut state = use_context::<UiState>();
    use_callback(move |()| {
        ctx.progress().reset();
        state.refresh_progress(&ctx);
    })
}

#[component]
pub fn SettingsView() -> Element {
    let mut controller = use_context::<UiState>().controller;
    let reset_progress = use_reset_progress();
    let mut reset_done = use_signal(|| false);

    let settings = controller.read().settings();
    let font_size = settings.font_size();
    let speech_rate = settings.speech_rate();
    let (font_min, font_max) = (Settings::FONT_SIZE_MIN, Settings::FONT_SIZE_MAX);
    let (rate_min, rate_max) = (Settings::SPEECH_RATE_MIN, Settings::SPEECH_RATE_MAX);
    let step = Settings::STEP;

    rsx! {
        div { class: "content-area",
            h2 { class: "section-title", "설정" }

            div { class: "settings-item",
                p { class: "settings-label", "글자 크기 조정" }
                div { class: "settings-slider",
                    span { "작게" }
                    input {
                        id: "settings-font-size",
                        r#type: "range",
                        min: "{font_min}",
                        max: "{font_max}",
                        step: "{step}",
                        value: "{font_size}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(value) = evt.value().parse::<f32>() {
                                controller.write().set_font_size(value);
                            }
                        },
                    }
                    span { "크게" }
                }
            }

            div { class: "settings-item",
                p { class: "settings-label", "말하기 속도" }
                div { class: "settings-slider",
                    span { "느리게" }
                    input {
                        id: "settings-speech-rate",
                        r#type: "range",
                        min: "{rate_min}",
                        max: "{rate_max}",
                        step: "{step}",
                        value: "{speech_rate}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(value) = evt.value().parse::<f32>() {
                                controller.write().set_speech_rate(value);
                            }
                        },
                    }
                    span { "빠르게" }
                }
            }

            div { class: "settings-item",
                p { class: "settings-label", "학습 기록 초기화" }
                button {
                    class: "reset-btn",
                    r#type: "button",
                    onclick: move |_| {
                        reset_progress.call(());
                        reset_done.set(true);
                    },
                    "초기화하기"
                }
                if reset_done() {
                    p { class: "reset-notice", "학습 데이터가 초기화되었습니다." }
                }
            }

            div { class: "app-version", "Movie English v{APP_VERSION}" }
        }
    }
}
