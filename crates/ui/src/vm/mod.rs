mod controller;
mod movie_vm;
mod review_vm;
mod study_vm;

pub use controller::{Tab, ViewController};
pub use movie_vm::{MovieOptionVm, map_movie_options};
pub use review_vm::{VocabularyCardVm, map_vocabulary_cards};
pub use study_vm::{DialogueCardVm, FontStyleVm, LessonChipVm, StudyVm, map_study};
