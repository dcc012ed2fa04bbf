//! Splendid Screens demo driver
//!
//! Walks through every phase with a scripted clock and prints each composed
//! frame as JSON. An optional first argument names a settings file.

use std::time::Duration;

use glam::Vec2;

use splendid_screens::draw::colors;
use splendid_screens::{
    BoardView, Clock, DrawList, FrameInput, GamePhase, ManualClock, PlayerId, RecordingSurface, Rect,
    RenderSurface, ScoreEntry, ScreenComposer, ScreenSettings, SharedLeaderboard,
};

/// Grid of face-down cards standing in for the real board
struct DemoBoard {
    columns: u32,
    rows: u32,
    card: Vec2,
    padding: f32,
}

impl BoardView for DemoBoard {
    fn height(&self) -> f32 {
        self.rows as f32 * (self.card.y + self.padding)
    }

    fn draw(&self, list: &mut DrawList) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let min = Vec2::new(col as f32, row as f32) * (self.card + self.padding);
                list.fill_rect(Rect::from_bounds(min, min + self.card), colors::LIGHT_GRAY);
            }
        }
    }
}

/// Prints every submitted frame as one JSON line
struct JsonSurface {
    recorder: RecordingSurface,
}

impl RenderSurface for JsonSurface {
    fn submit(&mut self, frame: &DrawList) {
        self.recorder.submit(frame);
        match serde_json::to_string(frame) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not encode frame {}: {}", self.recorder.frames(), e),
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Splendid Screens (demo) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match ScreenSettings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => ScreenSettings::default(),
    };

    let composer = match ScreenComposer::new(settings) {
        Ok(composer) => composer,
        Err(e) => {
            log::error!("Invalid screen settings: {}", e);
            std::process::exit(1);
        }
    };

    let clock = ManualClock::new();
    let board = DemoBoard {
        columns: 3,
        rows: 4,
        card: Vec2::new(140.0, 90.0),
        padding: 10.0,
    };
    let me = PlayerId::new("local-player");
    let leaderboard = SharedLeaderboard::new();
    let mut surface = JsonSurface {
        recorder: RecordingSurface::new(),
    };

    // (phase, frames, frame step)
    let script = [
        (GamePhase::Playing, 3, Duration::from_millis(400)),
        (GamePhase::Paused, 2, Duration::from_millis(400)),
        (GamePhase::Finished, 6, Duration::from_millis(500)),
        (GamePhase::ShowingHighscore, 8, Duration::from_millis(400)),
    ];

    let game_time = Duration::from_secs(60);
    let mut score = 0;
    let mut last_phase = None;

    for (phase, frames, step) in script {
        let phase_started = clock.now();
        if last_phase != Some(phase) {
            log::debug!("Phase {:?} -> {}", last_phase, phase);
            last_phase = Some(phase);
        }

        for frame_no in 0..frames {
            // The fetch lands partway through the highscore screen
            if phase == GamePhase::ShowingHighscore && frame_no == 3 {
                let fetcher = leaderboard.clone();
                let me = me.clone();
                let handle = std::thread::spawn(move || {
                    fetcher.publish(vec![
                        ScoreEntry::new("alice", 2400.0),
                        ScoreEntry { player_id: me, score: 1800.0 },
                        ScoreEntry::new("bob", 950.0),
                    ]);
                });
                if handle.join().is_err() {
                    log::warn!("Leaderboard fetch thread panicked");
                }
            }

            let snapshot = leaderboard.snapshot();
            let frame = FrameInput {
                phase,
                score,
                time_remaining: game_time.saturating_sub(clock.since(phase_started)),
                phase_started,
                local_player: &me,
                leaderboard: &snapshot,
                board: &board,
            };
            composer.render(&frame, &clock, &mut surface);

            clock.advance(step);
            if phase == GamePhase::Playing {
                score += 150;
            }
        }
    }

    log::info!("Rendered {} frames", surface.recorder.frames());
}
