use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{LessonId, MovieId, ProgressKey};

/// Finished flags keyed by dialogue, in first-toggle order.
///
/// Serializes as a JSON object `{"movie-lesson-index": bool}`. Entries whose
/// key does not parse are skipped on load; the rest are kept. Toggling a key
/// that is already present flips it in place, so iteration order stays the
/// order in which each key was first touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressMap {
    entries: Vec<(ProgressKey, bool)>,
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flag for a key; absent keys are not finished.
    #[must_use]
    pub fn get(&self, key: &ProgressKey) -> bool {
        self.position(key).is_some_and(|idx| self.entries[idx].1)
    }

    #[must_use]
    pub fn is_finished(
        &self,
        movie_id: &MovieId,
        lesson_id: LessonId,
        dialogue_index: usize,
    ) -> bool {
        self.entries.iter().any(|(key, finished)| {
            *finished
                && key.movie_id() == movie_id
                && key.lesson_id() == lesson_id
                && key.dialogue_index() == dialogue_index
        })
    }

    /// Set a flag, keeping the key's original position if it exists.
    pub fn set(&mut self, key: ProgressKey, finished: bool) {
        match self.position(&key) {
            Some(idx) => self.entries[idx].1 = finished,
            None => self.entries.push((key, finished)),
        }
    }

    /// Flip a flag and return the new value.
    pub fn toggle(&mut self, key: ProgressKey) -> bool {
        let next = !self.get(&key);
        self.set(key, next);
        next
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProgressKey, bool)> {
        self.entries.iter().map(|(key, finished)| (key, *finished))
    }

    /// Keys whose flag is set, in map order.
    pub fn finished_keys(&self) -> impl Iterator<Item = &ProgressKey> {
        self.iter()
            .filter_map(|(key, finished)| finished.then_some(key))
    }

    fn position(&self, key: &ProgressKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl Serialize for ProgressMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, finished) in &self.entries {
            map.serialize_entry(&key.to_string(), finished)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProgressMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProgressMapVisitor;

        impl<'de> Visitor<'de> for ProgressMapVisitor {
            type Value = ProgressMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of progress keys to booleans")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = ProgressMap::new();
                while let Some((raw, finished)) = access.next_entry::<String, bool>()? {
                    match raw.parse::<ProgressKey>() {
                        Ok(key) => map.set(key, finished),
                        Err(err) => log::warn!("skipping saved progress entry: {err}"),
                    }
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ProgressMapVisitor)
    }
}
