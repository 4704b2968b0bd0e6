mod content;
mod ids;
mod progress;
mod settings;

pub use content::{ContentStore, Dialogue, Lesson, Movie, VocabEntry, VocabularyItem};
pub use ids::{LessonId, MovieId, ProgressKey, ProgressKeyError};
pub use progress::ProgressMap;
pub use settings::Settings;
