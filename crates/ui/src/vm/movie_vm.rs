use lesson_core::model::{ContentStore, MovieId};

/// UI-ready representation of a movie for the selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieOptionVm {
    pub id: MovieId,
    pub label: String,
    pub selected: bool,
}

/// Convert the movie list into selector options.
#[must_use]
pub fn map_movie_options(content: &ContentStore, selected: &MovieId) -> Vec<MovieOptionVm> {
    content
        .movies()
        .iter()
        .map(|movie| MovieOptionVm {
            id: movie.id.clone(),
            label: movie.title.clone(),
            selected: &movie.id == selected,
        })
        .collect()
}
