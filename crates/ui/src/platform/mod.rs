mod scripts;
mod speech;

pub use speech::{WebviewSpeechEngine, speak_in_background};
