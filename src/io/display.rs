//! Status display collaborator.
//!
//! The game pushes status strings to designated regions; no input ever
//! comes back through this seam.

/// Push-only status regions.
pub trait StatusDisplay {
    /// Score line: round count, reaction time, game-over text.
    fn set_score(&mut self, text: &str);

    /// Countdown line ("Starting in 2..."); cleared with an empty string.
    fn set_countdown(&mut self, text: &str);

    /// Level info line (level name plus the targets to click).
    fn set_level_info(&mut self, text: &str);

    /// Show or hide the restart affordance.
    fn set_restart_visible(&mut self, visible: bool);

    /// Re-render the full leaderboard, best (lowest) first.
    fn show_leaderboard(&mut self, scores: &[f64]);
}

/// In-memory display holding the last value pushed to each region.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    pub score: String,
    pub countdown: String,
    pub level_info: String,
    pub restart_visible: bool,
    pub leaderboard: Vec<f64>,
    /// Every score-line update, oldest first. Tests assert on sequences.
    pub score_history: Vec<String>,
}

impl MemoryDisplay {
    /// Create an empty display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusDisplay for MemoryDisplay {
    fn set_score(&mut self, text: &str) {
        self.score = text.to_string();
        self.score_history.push(text.to_string());
    }

    fn set_countdown(&mut self, text: &str) {
        self.countdown = text.to_string();
    }

    fn set_level_info(&mut self, text: &str) {
        self.level_info = text.to_string();
    }

    fn set_restart_visible(&mut self, visible: bool) {
        self.restart_visible = visible;
    }

    fn show_leaderboard(&mut self, scores: &[f64]) {
        self.leaderboard = scores.to_vec();
    }
}
