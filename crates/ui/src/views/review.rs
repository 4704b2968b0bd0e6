use dioxus::prelude::*;
use lesson_core::vocabulary::derive_vocabulary;

use crate::context::AppContext;
use crate::platform::speak_in_background;
use crate::views::UiState;
use crate::vm::{VocabularyCardVm, map_vocabulary_cards};

#[component]
pub fn ReviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let UiState {
        controller,
        progress,
    } = use_context::<UiState>();
    let content = ctx.content();

    let vocabulary = derive_vocabulary(&progress.read(), &content);
    let cards = map_vocabulary_cards(&vocabulary);
    let speech_rate = controller.read().settings().speech_rate();

    rsx! {
        div { class: "content-area",
            h2 { class: "section-title", "내 단어장" }
            for card in cards {
                VocabularyCard { key: "{card.key}", card, speech_rate }
            }
            div { class: "review-hint", "학습 중 체크한 단어가 여기에 저장됩니다." }
        }
    }
}

#[component]
fn VocabularyCard(card: VocabularyCardVm, speech_rate: f32) -> Element {
    let word = card.word.clone();
    rsx! {
        div { class: "dialogue-card vocabulary-card",
            div { class: "vocabulary-head",
                strong { class: "vocabulary-word", "{card.word}" }
                button {
                    class: "action-btn action-btn--small",
                    r#type: "button",
                    onclick: move |_| speak_in_background(word.clone(), speech_rate),
                    "🔊"
                }
            }
            div { class: "vocabulary-mean", "{card.mean}" }
            div { class: "vocabulary-sentence", "{card.sentence}" }
        }
    }
}
