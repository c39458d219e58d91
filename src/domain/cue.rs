//! Named UI sound cues.
//!
//! There is no audio playback; cues are emitted as tracing events so that a
//! front-end (or a curious operator) can follow along.

/// A UI sound cue and the asset that backs it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cue {
    /// Wallet connect click.
    Click,
    /// Looped while an eligibility check is in flight.
    Pending,
    /// Menu item confirmed.
    Enter,
    /// Menu selection moved.
    OptionSelection,
    /// Conjure submit pressed.
    ConjurePress,
}

impl Cue {
    pub fn asset(self) -> &'static str {
        match self {
            Self::Click => "MENACES_UI_SOUNDS_CLICK.wav",
            Self::Pending => "MENACES_UI_SOUNDS_pending.wav",
            Self::Enter => "MENACES_UI_SOUNDS_ENTER.wav",
            Self::OptionSelection => "MENACES_UI_SOUNDS_option selection.wav",
            Self::ConjurePress => "MENACES_UI_SOUNDS_CONJURE PRESS.wav",
        }
    }

    /// Whether the cue repeats until explicitly stopped.
    pub fn looped(self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn play(self) {
        tracing::debug!(cue = ?self, asset = self.asset(), looped = self.looped(), "play cue");
    }

    pub fn stop(self) {
        tracing::debug!(cue = ?self, asset = self.asset(), "stop cue");
    }
}
