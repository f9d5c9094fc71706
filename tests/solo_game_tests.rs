//! End-to-end tests for the single-box timed-delay game.

use reflex_arena::{
    BoxTarget, CountingAudio, Difficulty, Event, GameConfig, MemoryDisplay, MemoryRenderer,
    MemoryStore, RoundEngine, Session, SessionIo, SessionPhase, SoloConfig, SoloRounds,
};

struct Collab {
    renderer: MemoryRenderer,
    audio: CountingAudio,
    display: MemoryDisplay,
    store: MemoryStore,
}

impl Collab {
    fn new() -> Self {
        Self {
            renderer: MemoryRenderer::new(),
            audio: CountingAudio::default(),
            display: MemoryDisplay::new(),
            store: MemoryStore::new(),
        }
    }

    fn io(&mut self) -> SessionIo<'_> {
        SessionIo {
            renderer: &mut self.renderer,
            audio: &mut self.audio,
            display: &mut self.display,
            store: &mut self.store,
        }
    }
}

fn new_session(solo: SoloConfig, seed: u64) -> Session<SoloRounds> {
    Session::new(SoloRounds::new(solo), GameConfig::default(), seed)
}

#[test]
fn test_full_solo_game_with_fixed_delay() {
    let mut session = new_session(SoloConfig::default(), 42);
    let mut collab = Collab::new();

    session.start(&mut collab.io());
    session.advance(2000, &mut collab.io());
    assert_eq!(session.phase(), SessionPhase::Playing);

    // Fixed tier reveals exactly 1500ms after each hit; click 90ms in
    for round in 1..=10 {
        session.advance(1500, &mut collab.io());
        assert!(session.engine().is_visible());
        assert_eq!(collab.renderer.visible.len(), 1);

        session.advance(90, &mut collab.io());
        session.handle(Event::Interact(BoxTarget), &mut collab.io());
        assert_eq!(session.engine().round_index(), round);
        assert!(collab.renderer.visible.is_empty());
    }

    // 10 x 90ms total, divided by the historical 5
    assert_eq!(
        session.phase(),
        SessionPhase::Over {
            average_ms: Some(180.0)
        }
    );
    assert_eq!(collab.display.score, "Game Over! Avg Time: 180.00 ms");
    assert_eq!(collab.display.leaderboard, vec![180.0]);
    assert_eq!(collab.audio.successes, 10);
}

#[test]
fn test_clicks_while_hidden_never_penalize() {
    let mut session = new_session(SoloConfig::default(), 42);
    let mut collab = Collab::new();
    session.start(&mut collab.io());
    session.advance(2000, &mut collab.io());

    // Box not visible yet: hammer the arena, nothing moves
    for _ in 0..5 {
        session.handle(Event::Interact(BoxTarget), &mut collab.io());
    }
    assert_eq!(session.engine().round_index(), 0);
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(collab.audio.successes, 0);
}

#[test]
fn test_hard_tier_delays_stay_in_range() {
    // Hard tier: every reveal lands inside [300, 1300) after the previous
    // round ended
    let solo = SoloConfig {
        difficulty: Difficulty::Hard,
        ..SoloConfig::default()
    };
    let mut session = new_session(solo, 9);
    let mut collab = Collab::new();
    session.start(&mut collab.io());
    session.advance(2000, &mut collab.io());

    for _ in 0..10 {
        let scheduled_at = session.now_ms();
        // Nothing can be visible before the minimum delay
        session.advance(299, &mut collab.io());
        assert!(!session.engine().is_visible());

        // The reveal must land before the maximum
        session.advance(1000, &mut collab.io());
        assert!(session.engine().is_visible());
        assert!(session.now_ms() - scheduled_at < 1300);

        session.handle(Event::Interact(BoxTarget), &mut collab.io());
    }

    assert!(matches!(
        session.phase(),
        SessionPhase::Over {
            average_ms: Some(_)
        }
    ));
}

#[test]
fn test_difficulty_switch_applies_to_next_delay() {
    let mut session = new_session(SoloConfig::default(), 7);
    let mut collab = Collab::new();
    session.start(&mut collab.io());
    session.advance(2000, &mut collab.io());

    // Round one still runs on the fixed 1500ms delay
    session.advance(1500, &mut collab.io());
    assert!(session.engine().is_visible());
    session.handle(Event::Interact(BoxTarget), &mut collab.io());

    // Hard tier takes effect for the delay scheduled after the next hit
    session.engine_mut().set_difficulty(Difficulty::Hard);
    session.advance(1500, &mut collab.io());
    assert!(session.engine().is_visible());
    let hit_at = session.now_ms();
    session.handle(Event::Interact(BoxTarget), &mut collab.io());

    session.advance(299, &mut collab.io());
    assert!(!session.engine().is_visible());
    session.advance(1000, &mut collab.io());
    assert!(session.engine().is_visible());
    assert!(session.now_ms() - hit_at < 1300);
}

#[test]
fn test_restart_mid_wait_discards_pending_reveal() {
    let mut session = new_session(SoloConfig::default(), 42);
    let mut collab = Collab::new();
    session.start(&mut collab.io());
    session.advance(2000, &mut collab.io());

    // Reveal pending at +1500; restart at +1000
    session.advance(1000, &mut collab.io());
    session.restart(&mut collab.io());
    assert_eq!(session.phase(), SessionPhase::Countdown);

    // The old reveal would have fired at +500 from here; instead the
    // countdown runs and a fresh wait begins
    session.advance(2000, &mut collab.io());
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert!(!session.engine().is_visible());
    assert_eq!(session.engine().round_index(), 0);
}
