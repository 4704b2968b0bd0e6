use lesson_core::model::VocabularyItem;

/// UI-ready representation of one learned word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyCardVm {
    pub key: String,
    pub word: String,
    pub mean: String,
    pub sentence: String,
}

#[must_use]
pub fn map_vocabulary_cards(items: &[VocabularyItem]) -> Vec<VocabularyCardVm> {
    items
        .iter()
        .map(|item| VocabularyCardVm {
            key: format!("{}{}", item.word, item.mean),
            word: item.word.clone(),
            mean: item.mean.clone(),
            sentence: format!("\"{}\"", item.sentence),
        })
        .collect()
}
