/// Reading preferences for the current session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    font_size: f32,
    speech_rate: f32,
}

impl Settings {
    pub const FONT_SIZE_MIN: f32 = 1.0;
    pub const FONT_SIZE_MAX: f32 = 2.0;
    pub const FONT_SIZE_DEFAULT: f32 = 1.4;
    pub const SPEECH_RATE_MIN: f32 = 0.5;
    pub const SPEECH_RATE_MAX: f32 = 1.5;
    pub const SPEECH_RATE_DEFAULT: f32 = 0.95;
    /// Slider granularity for both settings.
    pub const STEP: f32 = 0.1;

    /// Font size in `rem` for the English line.
    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    #[must_use]
    pub fn speech_rate(&self) -> f32 {
        self.speech_rate
    }

    /// Set the font size, clamping into the supported range.
    pub fn set_font_size(&mut self, value: f32) {
        if value.is_finite() {
            self.font_size = value.clamp(Self::FONT_SIZE_MIN, Self::FONT_SIZE_MAX);
        }
    }

    /// Set the speech rate, clamping into the supported range.
    pub fn set_speech_rate(&mut self, value: f32) {
        if value.is_finite() {
            self.speech_rate = value.clamp(Self::SPEECH_RATE_MIN, Self::SPEECH_RATE_MAX);
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: Self::FONT_SIZE_DEFAULT,
            speech_rate: Self::SPEECH_RATE_DEFAULT,
        }
    }
}
