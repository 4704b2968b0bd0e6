//! Cumulative word list derived from finished dialogue lines.

use std::collections::HashSet;

use crate::model::{ContentStore, ProgressMap, VocabularyItem};

/// Derive the deduplicated vocabulary for every finished dialogue line.
///
/// Entries follow progress-map order (first-finished order), and within a line
/// the order its words are declared in. A word is identified by `word + mean`;
/// the first finished line that declares it supplies the example sentence.
/// Keys that no longer resolve to content are skipped.
#[must_use]
pub fn derive_vocabulary(progress: &ProgressMap, content: &ContentStore) -> Vec<VocabularyItem> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();

    for key in progress.finished_keys() {
        let Some(dialogue) = content.dialogue(key) else {
            continue;
        };
        for entry in &dialogue.words {
            let signature = format!("{}{}", entry.word, entry.mean);
            if seen.insert(signature) {
                vocabulary.push(VocabularyItem::from_entry(entry, dialogue.english.as_str()));
            }
        }
    }

    vocabulary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dialogue, Lesson, LessonId, Movie, MovieId, ProgressKey, VocabEntry};
    use std::collections::HashMap;

    fn word(word: &str, mean: &str) -> VocabEntry {
        VocabEntry {
            word: word.into(),
            mean: mean.into(),
        }
    }

    fn line(english: &str, words: Vec<VocabEntry>) -> Dialogue {
        Dialogue {
            character: "Judy".into(),
            english: english.into(),
            korean: String::new(),
            explanation: String::new(),
            words,
        }
    }

    fn zootopia() -> ContentStore {
        let movie = MovieId::new("zootopia");
        let lessons = vec![
            Lesson {
                id: LessonId::new(1),
                dialogues: vec![
                    line(
                        "You are my favorite deputy.",
                        vec![word("Deputy", "대리인, 부관")],
                    ),
                    line(
                        "My deputy is on it.",
                        vec![word("Deputy", "대리인, 부관"), word("On it", "처리 중인")],
                    ),
                    line("Nothing to learn here.", Vec::new()),
                ],
            },
            Lesson {
                id: LessonId::new(2),
                dialogues: vec![line(
                    "Try everything.",
                    vec![word("Try", "시도하다"), word("Deputy", "보안관 대리")],
                )],
            },
        ];
        ContentStore::new(
            vec![Movie {
                id: movie.clone(),
                title: "Zootopia".into(),
            }],
            HashMap::from([(movie, lessons)]),
        )
    }

    fn key(lesson: u32, index: usize) -> ProgressKey {
        ProgressKey::new(MovieId::new("zootopia"), LessonId::new(lesson), index)
    }

    #[test]
    fn finished_line_yields_decorated_word() {
        let mut progress = ProgressMap::new();
        progress.toggle(key(1, 0));

        let vocabulary = derive_vocabulary(&progress, &zootopia());
        assert_eq!(
            vocabulary,
            vec![VocabularyItem {
                word: "Deputy".into(),
                mean: "대리인, 부관".into(),
                sentence: "You are my favorite deputy.".into(),
            }]
        );
    }

    #[test]
    fn toggled_back_line_is_excluded() {
        let mut progress = ProgressMap::new();
        progress.toggle(key(1, 0));
        progress.toggle(key(1, 0));

        assert!(derive_vocabulary(&progress, &zootopia()).is_empty());
    }

    #[test]
    fn shared_word_and_meaning_appears_once() {
        let mut progress = ProgressMap::new();
        progress.toggle(key(1, 0));
        progress.toggle(key(1, 1));

        let vocabulary = derive_vocabulary(&progress, &zootopia());
        let words: Vec<&str> = vocabulary.iter().map(|item| item.word.as_str()).collect();
        assert_eq!(words, vec!["Deputy", "On it"]);
        assert_eq!(vocabulary[0].sentence, "You are my favorite deputy.");
    }

    #[test]
    fn same_word_with_different_meaning_is_kept() {
        let mut progress = ProgressMap::new();
        progress.toggle(key(1, 0));
        progress.toggle(key(2, 0));

        let vocabulary = derive_vocabulary(&progress, &zootopia());
        let pairs: Vec<(&str, &str)> = vocabulary
            .iter()
            .map(|item| (item.word.as_str(), item.mean.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Deputy", "대리인, 부관"),
                ("Try", "시도하다"),
                ("Deputy", "보안관 대리"),
            ]
        );
    }

    #[test]
    fn order_follows_first_finished_not_content() {
        let mut progress = ProgressMap::new();
        progress.toggle(key(2, 0));
        progress.toggle(key(1, 0));

        let vocabulary = derive_vocabulary(&progress, &zootopia());
        assert_eq!(vocabulary[0].word, "Try");
        assert_eq!(vocabulary.last().unwrap().mean, "대리인, 부관");
    }

    #[test]
    fn stale_keys_are_skipped() {
        let mut progress = ProgressMap::new();
        progress.toggle(key(9, 0));
        progress.toggle(key(1, 42));
        progress.toggle(ProgressKey::new(MovieId::new("frozen"), LessonId::new(1), 0));
        progress.toggle(key(1, 2));
        progress.toggle(key(1, 0));

        let vocabulary = derive_vocabulary(&progress, &zootopia());
        assert_eq!(vocabulary.len(), 1);
    }

    #[test]
    fn derivation_is_deterministic() {
        let mut progress = ProgressMap::new();
        progress.toggle(key(1, 1));
        progress.toggle(key(2, 0));
        progress.toggle(key(1, 0));
        let content = zootopia();

        let first = derive_vocabulary(&progress, &content);
        for _ in 0..8 {
            assert_eq!(derive_vocabulary(&progress, &content), first);
        }
    }
}
