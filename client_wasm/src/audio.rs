//! Web Audio cue playback
//!
//! Short oscillator blips, one per simulation event. Playback is
//! fire-and-forget: when the audio context is unavailable the player stays
//! silent and the frame loop is unaffected.

use game_core::AudioCue;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

pub struct AudioPlayer {
    ctx: Option<AudioContext>,
}

impl AudioPlayer {
    pub fn new() -> Self {
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("audio context unavailable, cues disabled");
        }
        Self { ctx }
    }

    /// Pitch per cue, Hz
    fn frequency(cue: AudioCue) -> f32 {
        match cue {
            AudioCue::WallHit => 220.0,
            AudioCue::PaddleHit => 440.0,
            AudioCue::ScoreAgainstPlayer => 150.0,
            AudioCue::ScoreAgainstAi => 660.0,
        }
    }

    pub fn play(&self, cue: AudioCue) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        // Autoplay policies leave the context suspended until a gesture;
        // resuming here means the first post-gesture cue is audible.
        let _ = ctx.resume();
        let _ = beep(ctx, Self::frequency(cue));
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn beep(ctx: &AudioContext, freq: f32) -> Result<(), JsValue> {
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    osc.set_type(OscillatorType::Square);
    osc.frequency().set_value(freq);

    let now = ctx.current_time();
    gain.gain().set_value(0.05);
    gain.gain()
        .exponential_ramp_to_value_at_time(0.0001, now + 0.1)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    osc.start()?;
    osc.stop_with_when(now + 0.1)?;
    Ok(())
}
