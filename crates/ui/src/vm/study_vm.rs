use lesson_core::model::{ContentStore, LessonId, ProgressMap, Settings};

use crate::vm::ViewController;

/// Inline font styles derived from the font-size setting.
#[derive(Clone, Debug, PartialEq)]
pub struct FontStyleVm {
    pub english: String,
    pub korean: String,
}

impl FontStyleVm {
    /// The Korean line is rendered at 80% of the English size.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let size = settings.font_size();
        Self {
            english: format!("font-size: {size:.1}rem"),
            korean: format!("font-size: {:.2}rem", size * 0.8),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonChipVm {
    pub id: LessonId,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueCardVm {
    pub index: usize,
    pub character: String,
    pub english: String,
    pub korean: String,
    pub explanation: String,
    pub finished: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudyVm {
    pub lesson_id: LessonId,
    pub chips: Vec<LessonChipVm>,
    pub cards: Vec<DialogueCardVm>,
    pub finished_count: usize,
    pub fonts: FontStyleVm,
}

impl StudyVm {
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{}/{} 낭독 완료", self.finished_count, self.cards.len())
    }
}

/// Map the selected lesson into study cards. `None` if the movie has no lessons.
#[must_use]
pub fn map_study(
    controller: &ViewController,
    content: &ContentStore,
    progress: &ProgressMap,
) -> Option<StudyVm> {
    let lesson = controller.current_lesson(content)?;
    let movie_id = controller.movie_id();

    let chips = content
        .lessons(movie_id)
        .iter()
        .map(|item| LessonChipVm {
            id: item.id,
            label: format!("Day {}", item.id),
            active: item.id == lesson.id,
        })
        .collect();

    let cards: Vec<DialogueCardVm> = lesson
        .dialogues
        .iter()
        .enumerate()
        .map(|(index, dialogue)| DialogueCardVm {
            index,
            character: dialogue.character.clone(),
            english: dialogue.english.clone(),
            korean: dialogue.korean.clone(),
            explanation: dialogue.explanation.clone(),
            finished: progress.is_finished(movie_id, lesson.id, index),
        })
        .collect();
    let finished_count = cards.iter().filter(|card| card.finished).count();

    Some(StudyVm {
        lesson_id: lesson.id,
        chips,
        cards,
        finished_count,
        fonts: FontStyleVm::from_settings(&controller.settings()),
    })
}
