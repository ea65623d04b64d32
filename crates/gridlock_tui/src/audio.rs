//! Sound feedback cues.
//!
//! Each engine event maps to a small tone plan (frequency, waveform,
//! duration). A terminal cannot synthesize tones, so emission is
//! best-effort: one BEL per cue, with the full plan traced for anyone
//! tailing the log. Muting suppresses output here, on the consumer side -
//! the engine keeps emitting events regardless.

use std::io::Write;
use std::time::Duration;
use tracing::debug;

/// Waveform of a tone in a cue's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Smooth click.
    Sine,
    /// Bright celebratory voice.
    Triangle,
    /// Flat buzz for draws.
    Sawtooth,
}

/// A single tone in a cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in hertz.
    pub freq_hz: f32,
    /// Waveform.
    pub wave: Waveform,
    /// How long the tone rings.
    pub duration: Duration,
}

const fn tone(freq_hz: f32, wave: Waveform, millis: u64) -> Tone {
    Tone {
        freq_hz,
        wave,
        duration: Duration::from_millis(millis),
    }
}

/// A sound cue triggered by a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark was placed.
    Click,
    /// A player won.
    Win,
    /// The game was drawn.
    Draw,
}

impl Cue {
    /// The tone plan for this cue.
    pub fn tones(&self) -> &'static [Tone] {
        const CLICK: [Tone; 1] = [tone(600.0, Waveform::Sine, 100)];
        const WIN: [Tone; 3] = [
            tone(400.0, Waveform::Triangle, 200),
            tone(600.0, Waveform::Triangle, 200),
            tone(800.0, Waveform::Triangle, 400),
        ];
        const DRAW: [Tone; 1] = [tone(200.0, Waveform::Sawtooth, 300)];

        match self {
            Cue::Click => &CLICK,
            Cue::Win => &WIN,
            Cue::Draw => &DRAW,
        }
    }
}

/// Plays cues through the terminal bell.
#[derive(Debug)]
pub struct Chime {
    enabled: bool,
}

impl Chime {
    /// Creates a chime, enabled or muted.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether cues are currently audible.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flips the mute state.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        debug!(enabled = self.enabled, "sound toggled");
    }

    /// Plays a cue, best-effort. Does nothing while muted.
    pub fn play(&self, cue: Cue) {
        if !self.enabled {
            return;
        }
        debug!(?cue, plan = ?cue.tones(), "playing cue");
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "\x07");
        let _ = stdout.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_cue_is_a_rising_arpeggio() {
        let plan = Cue::Win.tones();
        assert_eq!(plan.len(), 3);
        assert!(plan.windows(2).all(|w| w[0].freq_hz < w[1].freq_hz));
        assert!(plan.iter().all(|t| t.wave == Waveform::Triangle));
    }

    #[test]
    fn test_muted_chime_stays_muted_until_toggled() {
        let mut chime = Chime::new(false);
        assert!(!chime.enabled());
        chime.toggle();
        assert!(chime.enabled());
    }
}
