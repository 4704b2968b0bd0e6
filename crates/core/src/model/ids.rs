use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a movie in the content store (e.g. `toy-story`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Creates a new `MovieId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a lesson ("Day N") within a movie.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(u32);

impl LessonId {
    /// Creates a new `LessonId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovieId({})", self.0)
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite identifier of one dialogue line: `(movie, lesson, dialogue index)`.
///
/// Serialized as `"{movie}-{lesson}-{index}"`. Movie ids may themselves contain
/// `-`, so parsing splits the two numeric parts off the right.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgressKey {
    movie_id: MovieId,
    lesson_id: LessonId,
    dialogue_index: usize,
}

impl ProgressKey {
    #[must_use]
    pub fn new(movie_id: MovieId, lesson_id: LessonId, dialogue_index: usize) -> Self {
        Self {
            movie_id,
            lesson_id,
            dialogue_index,
        }
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
    pub fn dialogue_index(&self) -> usize {
        self.dialogue_index
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressKeyError {
    #[error("progress key is missing a part: {raw:?}")]
    MissingPart { raw: String },
    #[error("invalid lesson id in progress key: {raw:?}")]
    InvalidLessonId { raw: String },
    #[error("invalid dialogue index in progress key: {raw:?}")]
    InvalidDialogueIndex { raw: String },
}

impl fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.movie_id, self.lesson_id, self.dialogue_index
        )
    }
}

impl FromStr for ProgressKey {
    type Err = ProgressKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let missing = || ProgressKeyError::MissingPart {
            raw: raw.to_owned(),
        };
        let mut parts = raw.rsplitn(3, '-');
        let index = parts.next().ok_or_else(missing)?;
        let lesson = parts.next().ok_or_else(missing)?;
        let movie = parts.next().filter(|m| !m.is_empty()).ok_or_else(missing)?;

        let dialogue_index =
            parse_canonical::<usize>(index).ok_or_else(|| ProgressKeyError::InvalidDialogueIndex {
                raw: raw.to_owned(),
            })?;
        let lesson_id =
            parse_canonical::<u32>(lesson).ok_or_else(|| ProgressKeyError::InvalidLessonId {
                raw: raw.to_owned(),
            })?;

        Ok(Self::new(
            MovieId::new(movie),
            LessonId::new(lesson_id),
            dialogue_index,
        ))
    }
}

/// Parse a number only in the form `Display` writes it back (no `+`, no leading zeros).
fn parse_canonical<T: FromStr + ToString>(part: &str) -> Option<T> {
    part.parse::<T>()
        .ok()
        .filter(|value| value.to_string() == part)
}
