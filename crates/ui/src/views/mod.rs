mod review;
mod settings;
mod shell;
mod state;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use review::ReviewView;
pub use settings::SettingsView;
pub use shell::Shell;
pub use state::{UiState, use_ui_state, use_ui_state_with};
pub use study::StudyView;
