//! Leaderboard data and row composition
//!
//! Scores arrive from an external fetch, already ranked. Until the fetch
//! completes the snapshot is `Absent` and the highscore screen shows a
//! blinking "loading" line; once loaded, the first six entries become rows.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::blink;
use crate::draw::{Color, DrawList, TextSize, colors};
use crate::error::LeaderboardError;
use crate::geom::Rect;
use crate::layout::{Layout, RegionKind, RowIndex};

/// Opaque player identity as issued by the score service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single ranked score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player_id: PlayerId,
    pub score: f64,
}

impl ScoreEntry {
    pub fn new(player_id: impl Into<String>, score: f64) -> Self {
        Self {
            player_id: PlayerId::new(player_id),
            score,
        }
    }
}

/// Entry shape returned by the score service
#[derive(Deserialize)]
struct WireEntry {
    user: WireUser,
    score: f64,
}

#[derive(Deserialize)]
struct WireUser {
    id: String,
}

/// Leaderboard as seen by one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LeaderboardSnapshot {
    /// Not fetched yet
    #[default]
    Absent,
    /// Ranked entries, best first
    Loaded(Arc<[ScoreEntry]>),
}

impl LeaderboardSnapshot {
    pub fn loaded(entries: impl Into<Arc<[ScoreEntry]>>) -> Self {
        Self::Loaded(entries.into())
    }

    /// Decode the score service payload: `[{"user": {"id": ..}, "score": ..}, ..]`
    ///
    /// Order is preserved; the service ranks entries.
    pub fn from_json(json: &str) -> Result<Self, LeaderboardError> {
        let wire: Vec<WireEntry> = serde_json::from_str(json)?;
        let entries = wire
            .into_iter()
            .enumerate()
            .map(|(index, e)| {
                if e.user.id.is_empty() {
                    return Err(LeaderboardError::EmptyPlayerId { index });
                }
                Ok(ScoreEntry::new(e.user.id, e.score))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::loaded(entries))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Leaderboard slot shared between the fetch task and the render thread
///
/// The fetch may complete at any point between frames. Each frame takes a
/// fresh snapshot; nothing about earlier frames is remembered.
#[derive(Debug, Clone, Default)]
pub struct SharedLeaderboard {
    inner: Arc<RwLock<LeaderboardSnapshot>>,
}

impl SharedLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current snapshot with fetched entries
    pub fn publish(&self, entries: Vec<ScoreEntry>) {
        log::info!("Leaderboard loaded ({} entries)", entries.len());
        self.replace(LeaderboardSnapshot::loaded(entries));
    }

    /// Forget the current entries (a refetch is in flight)
    pub fn invalidate(&self) {
        log::debug!("Leaderboard invalidated");
        self.replace(LeaderboardSnapshot::Absent);
    }

    /// Current value; cheap, entries are shared
    pub fn snapshot(&self) -> LeaderboardSnapshot {
        // A panicking writer cannot leave a half-written enum behind
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn replace(&self, snapshot: LeaderboardSnapshot) {
        match self.inner.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }
}

/// One leaderboard rendering directive
#[derive(Debug, Clone, PartialEq)]
pub enum RowInstruction {
    /// Placeholder while scores are absent
    Loading { rect: Rect, visible: bool },
    Row {
        rank: usize,
        rect: Rect,
        text: String,
        text_color: Color,
        /// Fill drawn behind the text for the local player's row
        highlight: Option<Rect>,
    },
}

impl RowInstruction {
    pub fn is_highlighted(&self) -> bool {
        matches!(self, RowInstruction::Row { highlight: Some(_), .. })
    }

    /// Emit draw instructions, highlight before text
    pub fn append_to(&self, list: &mut DrawList) {
        match self {
            RowInstruction::Loading { rect, visible } => {
                if *visible {
                    list.text(*rect, "loading", colors::TEXT_DIM, TextSize::Normal);
                }
            }
            RowInstruction::Row {
                rect,
                text,
                text_color,
                highlight,
                ..
            } => {
                if let Some(fill) = highlight {
                    list.fill_rect(*fill, colors::HIGHLIGHT);
                }
                list.text(*rect, text.as_str(), *text_color, TextSize::Normal);
            }
        }
    }
}

/// Rank and score, e.g. `"1.       1234"`
pub fn format_row(rank: usize, score: f64) -> String {
    format!("{}. {:>10.0}", rank, score)
}

/// Turn a snapshot into row directives
///
/// Absent yields a single loading line blinking with `blink_period` from
/// `elapsed` zero. Loaded yields at most six rows in input order; only rows
/// owned by `local_player` are highlighted.
pub fn compose_rows(
    snapshot: &LeaderboardSnapshot,
    local_player: &PlayerId,
    layout: &Layout,
    elapsed: Duration,
    blink_period: Duration,
) -> Vec<RowInstruction> {
    let entries = match snapshot {
        LeaderboardSnapshot::Absent => {
            return vec![RowInstruction::Loading {
                rect: layout.region(RegionKind::Loading),
                visible: blink::is_visible(elapsed, blink_period),
            }];
        }
        LeaderboardSnapshot::Loaded(entries) => entries,
    };

    entries
        .iter()
        .enumerate()
        .map_while(|(i, entry)| RowIndex::new(i).map(|row| (row, entry)))
        .map(|(row, entry)| {
            let is_local = entry.player_id == *local_player;
            RowInstruction::Row {
                rank: row.rank(),
                rect: layout.region(RegionKind::LeaderboardRow(row)),
                text: format_row(row.rank(), entry.score),
                text_color: if is_local {
                    colors::TEXT_ON_HIGHLIGHT
                } else {
                    colors::TEXT
                },
                highlight: is_local.then(|| layout.region(RegionKind::RowHighlight(row))),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ScreenSettings;
    use proptest::prelude::*;

    const PERIOD: Duration = Duration::from_millis(1000);

    fn layout() -> Layout {
        Layout::from_settings(&ScreenSettings::default())
    }

    fn entries(n: usize) -> Vec<ScoreEntry> {
        (0..n)
            .map(|i| ScoreEntry::new(format!("player-{}", i), (1000 - i * 10) as f64))
            .collect()
    }

    #[test]
    fn test_row_text_format() {
        assert_eq!(format_row(1, 1234.0), "1.       1234");
        assert_eq!(format_row(6, 0.0), "6.          0");
        assert_eq!(format_row(2, 99.6), "2.        100");
    }

    #[test]
    fn test_absent_yields_blinking_loading() {
        let me = PlayerId::new("me");
        let shown = compose_rows(&LeaderboardSnapshot::Absent, &me, &layout(), Duration::ZERO, PERIOD);
        assert_eq!(shown.len(), 1);
        assert!(matches!(shown[0], RowInstruction::Loading { visible: true, .. }));

        let hidden = compose_rows(
            &LeaderboardSnapshot::Absent,
            &me,
            &layout(),
            Duration::from_millis(700),
            PERIOD,
        );
        assert!(matches!(hidden[0], RowInstruction::Loading { visible: false, .. }));

        let mut list = DrawList::new();
        hidden[0].append_to(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_empty_leaderboard_draws_nothing() {
        let rows = compose_rows(
            &LeaderboardSnapshot::loaded(Vec::new()),
            &PlayerId::new("me"),
            &layout(),
            Duration::ZERO,
            PERIOD,
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn test_no_resort_of_input() {
        let snapshot = LeaderboardSnapshot::loaded(vec![
            ScoreEntry::new("a", 10.0),
            ScoreEntry::new("b", 500.0),
        ]);
        let rows = compose_rows(&snapshot, &PlayerId::new("x"), &layout(), Duration::ZERO, PERIOD);
        let texts: Vec<_> = rows
            .iter()
            .filter_map(|r| match r {
                RowInstruction::Row { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["1.         10", "2.        500"]);
    }

    #[test]
    fn test_local_row_highlight_drawn_first() {
        let snapshot = LeaderboardSnapshot::loaded(entries(3));
        let rows = compose_rows(&snapshot, &PlayerId::new("player-1"), &layout(), Duration::ZERO, PERIOD);
        assert!(!rows[0].is_highlighted());
        assert!(rows[1].is_highlighted());

        let mut list = DrawList::new();
        rows[1].append_to(&mut list);
        let instrs = list.instructions();
        assert_eq!(instrs.len(), 2);
        assert!(matches!(
            instrs[0],
            crate::draw::DrawInstruction::FilledRect { color, .. } if color == colors::HIGHLIGHT
        ));
        assert!(matches!(
            &instrs[1],
            crate::draw::DrawInstruction::Text { color, .. } if *color == colors::TEXT_ON_HIGHLIGHT
        ));
    }

    #[test]
    fn test_snapshot_from_service_json() {
        let json = r#"[
            {"user": {"id": "abc", "name": "ignored"}, "score": 1200},
            {"user": {"id": "def"}, "score": 800.5}
        ]"#;
        let snapshot = LeaderboardSnapshot::from_json(json).unwrap();
        let LeaderboardSnapshot::Loaded(entries) = snapshot else {
            panic!("expected loaded snapshot");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].player_id.as_str(), "abc");
        assert_eq!(entries[1].score, 800.5);
    }

    #[test]
    fn test_snapshot_rejects_bad_payloads() {
        assert!(matches!(
            LeaderboardSnapshot::from_json(r#"[{"user": {"id": ""}, "score": 1}]"#),
            Err(LeaderboardError::EmptyPlayerId { index: 0 })
        ));
        assert!(matches!(
            LeaderboardSnapshot::from_json(r#"{"scores": []}"#),
            Err(LeaderboardError::Json(_))
        ));
    }

    #[test]
    fn test_shared_leaderboard_publish_and_invalidate() {
        let shared = SharedLeaderboard::new();
        assert!(shared.snapshot().is_absent());

        let fetcher = shared.clone();
        std::thread::spawn(move || fetcher.publish(entries(2)))
            .join()
            .unwrap();
        assert_eq!(shared.snapshot(), LeaderboardSnapshot::loaded(entries(2)));

        shared.invalidate();
        assert!(shared.snapshot().is_absent());
    }

    proptest! {
        #[test]
        fn prop_rows_capped_in_input_order(n in 0usize..40) {
            let input = entries(n);
            let rows = compose_rows(
                &LeaderboardSnapshot::loaded(input.clone()),
                &PlayerId::new("nobody"),
                &layout(),
                Duration::ZERO,
                PERIOD,
            );
            prop_assert_eq!(rows.len(), n.min(6));
            for (i, row) in rows.iter().enumerate() {
                match row {
                    RowInstruction::Row { rank, text, .. } => {
                        prop_assert_eq!(*rank, i + 1);
                        prop_assert_eq!(text, &format_row(i + 1, input[i].score));
                    }
                    RowInstruction::Loading { .. } => prop_assert!(false, "loading row in loaded board"),
                }
            }
        }

        #[test]
        fn prop_absent_is_single_loading(elapsed in 0u64..100_000, id in "[a-z]{0,12}") {
            let rows = compose_rows(
                &LeaderboardSnapshot::Absent,
                &PlayerId::new(id),
                &layout(),
                Duration::from_millis(elapsed),
                PERIOD,
            );
            prop_assert_eq!(rows.len(), 1);
            let is_loading = matches!(rows[0], RowInstruction::Loading { .. });
            prop_assert!(is_loading);
        }

        #[test]
        fn prop_only_local_row_highlighted(n in 1usize..6, local in 0usize..6) {
            prop_assume!(local < n);
            let rows = compose_rows(
                &LeaderboardSnapshot::loaded(entries(n)),
                &PlayerId::new(format!("player-{}", local)),
                &layout(),
                Duration::ZERO,
                PERIOD,
            );
            for (i, row) in rows.iter().enumerate() {
                prop_assert_eq!(row.is_highlighted(), i == local);
            }
        }
    }
}
