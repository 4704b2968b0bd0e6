//! Loading of the read-only lesson documents.
//!
//! Content is a `movies.json` list plus one `<movie-id>.json` lesson array per
//! movie. A copy of the bundled documents is compiled into the crate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lesson_core::model::{ContentStore, Lesson, Movie, MovieId};
use thiserror::Error;

pub const MOVIES_DOCUMENT: &str = "movies.json";

const BUNDLED_MOVIES: &str = include_str!("../data/movies.json");
const BUNDLED_LESSONS: &[(&str, &str)] = &[
    ("toy-story", include_str!("../data/toy-story.json")),
    ("zootopia", include_str!("../data/zootopia.json")),
];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed content document {document}: {source}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no lesson document for movie {0}")]
    MissingLessons(MovieId),
    #[error("movie {0} has no lessons")]
    EmptyMovie(MovieId),
    #[error("movie id '{0}' is not a plain document name")]
    InvalidMovieId(MovieId),
}

/// Content shipped with the application.
///
/// # Errors
///
/// Returns `ContentError` if a bundled document is malformed.
pub fn bundled_content() -> Result<ContentStore, ContentError> {
    build_store(BUNDLED_MOVIES, |movie_id| {
        Ok(BUNDLED_LESSONS
            .iter()
            .find(|(id, _)| *id == movie_id.as_str())
            .map(|(_, json)| (*json).to_owned()))
    })
}

/// Load content documents from a directory.
///
/// # Errors
///
/// Returns `ContentError` if a document is missing, unreadable or malformed.
pub fn load_content_dir(dir: &Path) -> Result<ContentStore, ContentError> {
    let movies_path = dir.join(MOVIES_DOCUMENT);
    let movies_json = read_document(&movies_path)?;
    let store = build_store(&movies_json, |movie_id| {
        let path = dir.join(format!("{movie_id}.json"));
        if !path.exists() {
            return Ok(None);
        }
        read_document(&path).map(Some)
    })?;
    log::info!(
        "loaded {} movies from {}",
        store.movies().len(),
        dir.display()
    );
    Ok(store)
}

fn read_document(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn build_store(
    movies_json: &str,
    mut lessons_for: impl FnMut(&MovieId) -> Result<Option<String>, ContentError>,
) -> Result<ContentStore, ContentError> {
    let movies: Vec<Movie> =
        serde_json::from_str(movies_json).map_err(|source| ContentError::Parse {
            document: MOVIES_DOCUMENT.to_owned(),
            source,
        })?;

    let mut lessons = HashMap::with_capacity(movies.len());
    for movie in &movies {
        check_movie_id(&movie.id)?;
        let json = lessons_for(&movie.id)?
            .ok_or_else(|| ContentError::MissingLessons(movie.id.clone()))?;
        let parsed: Vec<Lesson> =
            serde_json::from_str(&json).map_err(|source| ContentError::Parse {
                document: format!("{}.json", movie.id),
                source,
            })?;
        if parsed.is_empty() {
            return Err(ContentError::EmptyMovie(movie.id.clone()));
        }
        lessons.insert(movie.id.clone(), parsed);
    }

    Ok(ContentStore::new(movies, lessons))
}

/// Movie ids name `<id>.json` next to `movies.json`, so they may not escape it.
fn check_movie_id(id: &MovieId) -> Result<(), ContentError> {
    let raw = id.as_str();
    if raw.is_empty() || raw.contains(['/', '\\']) || raw.contains("..") {
        return Err(ContentError::InvalidMovieId(id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::model::{LessonId, ProgressKey};

    #[test]
    fn bundled_content_parses() {
        let store = bundled_content().unwrap();
        let ids: Vec<&str> = store.movies().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["toy-story", "zootopia"]);

        let key = ProgressKey::new(MovieId::new("zootopia"), LessonId::new(1), 0);
        let dialogue = store.dialogue(&key).unwrap();
        assert_eq!(dialogue.english, "You are my favorite deputy.");
        assert_eq!(dialogue.words[0].word, "Deputy");
        assert_eq!(dialogue.words[0].mean, "대리인, 부관");
    }

    #[test]
    fn directory_content_loads_and_reports_gaps() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MOVIES_DOCUMENT),
            r#"[{"id":"up","title":"Up"}]"#,
        )
        .unwrap();

        let err = load_content_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::MissingLessons(ref id) if id.as_str() == "up"));

        std::fs::write(dir.path().join("up.json"), "[]").unwrap();
        let err = load_content_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyMovie(_)));

        std::fs::write(
            dir.path().join("up.json"),
            r#"[{"id":1,"dialogues":[{"character":"Carl","english":"Adventure is out there!","korean":"모험은 저 밖에 있어!","explanation":"out there: 저 바깥에"}]}]"#,
        )
        .unwrap();
        let store = load_content_dir(dir.path()).unwrap();
        assert_eq!(store.lessons(&MovieId::new("up")).len(), 1);
    }

    #[test]
    fn malformed_documents_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MOVIES_DOCUMENT), r#"[{"id":"up","title":"Up"}]"#)
            .unwrap();
        std::fs::write(dir.path().join("up.json"), r#"{"id":1}"#).unwrap();

        let err = load_content_dir(dir.path()).unwrap_err();
        match err {
            ContentError::Parse { document, .. } => assert_eq!(document, "up.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn path_like_movie_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let outside = dir.path().join("outside.json");
        std::fs::write(&outside, "[]").unwrap();
        let content = dir.path().join("content");
        std::fs::create_dir(&content).unwrap();

        for id in ["../outside", "nested/up", r"nested\up", ""] {
            let movies = serde_json::json!([{ "id": id, "title": "Up" }]);
            std::fs::write(content.join(MOVIES_DOCUMENT), movies.to_string()).unwrap();

            let err = load_content_dir(&content).unwrap_err();
            assert!(
                matches!(err, ContentError::InvalidMovieId(ref bad) if bad.as_str() == id),
                "{id:?} gave {err}"
            );
        }
    }

    #[test]
    fn missing_directory_is_io_error() {
        let err = load_content_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
