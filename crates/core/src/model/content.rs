use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{LessonId, MovieId, ProgressKey};

/// A movie offered in the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
}

/// A vocabulary word declared by a dialogue line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub mean: String,
}

/// A vocabulary word decorated with the sentence it was learned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub word: String,
    pub mean: String,
    pub sentence: String,
}

impl VocabularyItem {
    #[must_use]
    pub fn from_entry(entry: &VocabEntry, sentence: impl Into<String>) -> Self {
        Self {
            word: entry.word.clone(),
            mean: entry.mean.clone(),
            sentence: sentence.into(),
        }
    }
}

/// One line of movie dialogue with translation and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    pub character: String,
    pub english: String,
    pub korean: String,
    pub explanation: String,
    #[serde(default)]
    pub words: Vec<VocabEntry>,
}

/// One day's set of dialogue lines for a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub dialogues: Vec<Dialogue>,
}

/// Read-only lesson content for every movie.
///
/// Movies keep the order of the movie list; lessons keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    movies: Vec<Movie>,
    lessons: HashMap<MovieId, Vec<Lesson>>,
}

impl ContentStore {
    #[must_use]
    pub fn new(movies: Vec<Movie>, lessons: HashMap<MovieId, Vec<Lesson>>) -> Self {
        Self { movies, lessons }
    }

    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Lessons for a movie, empty if the movie has no lesson document.
    #[must_use]
    pub fn lessons(&self, movie_id: &MovieId) -> &[Lesson] {
        self.lessons.get(movie_id).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn lesson(&self, movie_id: &MovieId, lesson_id: LessonId) -> Option<&Lesson> {
        self.lessons(movie_id)
            .iter()
            .find(|lesson| lesson.id == lesson_id)
    }

    #[must_use]
    pub fn first_lesson(&self, movie_id: &MovieId) -> Option<&Lesson> {
        self.lessons(movie_id).first()
    }

    /// Resolve a progress key to its dialogue line, if the content still has it.
    #[must_use]
    pub fn dialogue(&self, key: &ProgressKey) -> Option<&Dialogue> {
        self.lesson(key.movie_id(), key.lesson_id())?
            .dialogues
            .get(key.dialogue_index())
    }
}
