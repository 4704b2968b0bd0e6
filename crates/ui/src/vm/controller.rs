use lesson_core::model::{ContentStore, Lesson, LessonId, MovieId, ProgressKey, Settings};
use services::ProgressStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Study,
    Review,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Study, Tab::Review, Tab::Settings];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Study => "오늘의 공부",
            Tab::Review => "단어장",
            Tab::Settings => "설정",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Tab::Study => "중년 여성을 위한 매일 10분 영어",
            Tab::Review => "내 손안의 영단어",
            Tab::Settings => "학습 환경 설정",
        }
    }
}

/// Transient selection state for the whole window.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewController {
    tab: Tab,
    movie_id: MovieId,
    lesson_id: LessonId,
    settings: Settings,
}

impl ViewController {
    /// Start on the study tab with the first movie and its first lesson.
    #[must_use]
    pub fn new(content: &ContentStore) -> Self {
        let movie_id = content
            .movies()
            .first()
            .map_or_else(|| MovieId::new(""), |movie| movie.id.clone());
        let lesson_id = first_lesson_id(content, &movie_id);
        Self {
            tab: Tab::Study,
            movie_id,
            lesson_id,
            settings: Settings::default(),
        }
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn movie_id(&self) -> &MovieId {
        &self.movie_id
    }

    #[must_use]
    pub fn lesson_id(&self) -> LessonId {
        self.lesson_id
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Switch movie, rewinding to its first lesson on the study tab.
    pub fn select_movie(&mut self, movie_id: MovieId, content: &ContentStore) {
        self.lesson_id = first_lesson_id(content, &movie_id);
        self.movie_id = movie_id;
        self.tab = Tab::Study;
    }

    pub fn select_lesson(&mut self, lesson_id: LessonId) {
        self.lesson_id = lesson_id;
    }

    /// The selected lesson, or the movie's first lesson if the id is unknown.
    #[must_use]
    pub fn current_lesson<'a>(&self, content: &'a ContentStore) -> Option<&'a Lesson> {
        content
            .lesson(&self.movie_id, self.lesson_id)
            .or_else(|| content.first_lesson(&self.movie_id))
    }

    #[must_use]
    pub fn progress_key(&self, lesson_id: LessonId, dialogue_index: usize) -> ProgressKey {
        ProgressKey::new(self.movie_id.clone(), lesson_id, dialogue_index)
    }

    /// Flip a line of the current movie; returns the new finished flag.
    pub fn toggle(
        &self,
        store: &ProgressStore,
        lesson_id: LessonId,
        dialogue_index: usize,
    ) -> bool {
        store.toggle(self.progress_key(lesson_id, dialogue_index))
    }

    pub fn set_font_size(&mut self, value: f32) {
        self.settings.set_font_size(value);
    }

    pub fn set_speech_rate(&mut self, value: f32) {
        self.settings.set_speech_rate(value);
    }
}

fn first_lesson_id(content: &ContentStore, movie_id: &MovieId) -> LessonId {
    content
        .first_lesson(movie_id)
        .map_or_else(|| LessonId::new(1), |lesson| lesson.id)
}
