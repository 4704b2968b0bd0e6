use dioxus::prelude::*;
use lesson_core::model::LessonId;

use crate::context::AppContext;
use crate::platform::speak_in_background;
use crate::views::UiState;
use crate::vm::{DialogueCardVm, FontStyleVm, map_study};

#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let UiState {
        mut controller,
        progress,
    } = use_context::<UiState>();
    let content = ctx.content();

    let study = map_study(&controller.read(), &content, &progress.read());
    let speech_rate = controller.read().settings().speech_rate();

    let Some(study) = study else {
        return rsx! {
            div { class: "content-area",
                p { class: "empty-state", "No lessons for this movie yet." }
            }
        };
    };
    let progress_label = study.progress_label();

    rsx! {
        div { class: "content-area",
            div { class: "lesson-selector",
                for chip in study.chips {
                    button {
                        key: "{chip.id}",
                        class: if chip.active { "lesson-chip active" } else { "lesson-chip" },
                        r#type: "button",
                        onclick: move |_| {
                            controller.write().select_lesson(chip.id);
                            let _ = document::eval("window.scrollTo(0, 0);");
                        },
                        "{chip.label}"
                    }
                }
            }
            p { class: "lesson-progress", "{progress_label}" }

            for card in study.cards {
                DialogueCard {
                    key: "{study.lesson_id}-{card.index}",
                    card,
                    lesson_id: study.lesson_id,
                    fonts: study.fonts.clone(),
                    speech_rate,
                }
            }
            div { class: "bottom-spacer" }
        }
    }
}

/// Toggle a line of the current movie and refresh the rendered progress.
pub(crate) fn use_toggle_line() -> Callback<(LessonId, usize)> {
    let ctx = use_context::<AppContext>();
    let mut state = use_context::<UiState>();
    use_callback(move |(lesson_id, index): (LessonId, usize)| {
        let finished = state
            .controller
            .read()
            .toggle(&ctx.progress(), lesson_id, index);
        log::debug!("dialogue {lesson_id}-{index} finished={finished}");
        state.refresh_progress(&ctx);
    })
}

#[component]
fn DialogueCard(
    card: DialogueCardVm,
    lesson_id: LessonId,
    fonts: FontStyleVm,
    speech_rate: f32,
) -> Element {
    let toggle_line = use_toggle_line();
    let english = card.english.clone();
    let index = card.index;

    rsx! {
        div { class: "dialogue-card",
            span { class: "character-tag", "{card.character}" }
            div { class: "english-text", style: "{fonts.english}", "{card.english}" }
            div { class: "korean-text", style: "{fonts.korean}", "{card.korean}" }
            div { class: "explanation-box",
                span { class: "key-expression", "💡 주요 표현" }
                p { "{card.explanation}" }
            }
            div { class: "dialogue-actions",
                button {
                    class: "action-btn",
                    r#type: "button",
                    onclick: move |_| speak_in_background(english.clone(), speech_rate),
                    "🔊 생동감 있는 발음"
                }
                label { class: "finished-toggle",
                    input {
                        r#type: "checkbox",
                        checked: card.finished,
                        onchange: move |_| toggle_line.call((lesson_id, index)),
                    }
                    " 낭독 완료"
                }
            }
        }
    }
}
