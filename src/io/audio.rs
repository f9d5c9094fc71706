//! Audio collaborator. Fire-and-forget; playback failures are the host's
//! problem and never surface to the game.

/// Plays the two game sounds.
pub trait AudioSink {
    /// The countdown finished and play begins.
    fn play_start(&mut self);

    /// A target was hit.
    fn play_success(&mut self);
}

/// Sink that drops every sound.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_start(&mut self) {}
    fn play_success(&mut self) {}
}

/// Sink that counts plays, for tests.
#[derive(Debug, Default)]
pub struct CountingAudio {
    pub starts: u32,
    pub successes: u32,
}

impl AudioSink for CountingAudio {
    fn play_start(&mut self) {
        self.starts += 1;
    }

    fn play_success(&mut self) {
        self.successes += 1;
    }
}
