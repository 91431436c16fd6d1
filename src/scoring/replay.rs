use crate::domain::{Shot, ShotKind};

use super::types::{HistoryEntry, Seat};

/// Replay a frame's shot log into its shot-by-shot history.
///
/// One entry per shot, in log order. This is a pure function of the log:
/// replaying a truncated log (after an undo) reproduces a prefix of the
/// previous output. `player2_id` is None for solo/guest play; the guest
/// seat renders as an empty identifier and its points are tracked but not
/// attributed to any registered player.
pub fn replay_frame(
    shots: &[Shot],
    player1_id: &str,
    player2_id: Option<&str>,
) -> Vec<HistoryEntry> {
    let mut history = Vec::with_capacity(shots.len());
    let mut player1_score = 0u32;
    let mut player2_score = 0u32;
    let mut current_break = 0u32;
    let mut at_table = Seat::First;

    for shot in shots {
        apply_shot(
            shot,
            at_table,
            &mut player1_score,
            &mut player2_score,
            &mut current_break,
        );

        // Record before the turn change so the entry reflects the table
        // as of the shot just played.
        history.push(HistoryEntry {
            shot: shot.clone(),
            player1_score,
            player2_score,
            break_size: current_break,
            at_table: seat_id(at_table, player1_id, player2_id).to_string(),
        });

        if shot.kind.ends_break() {
            current_break = 0;
        }
        if shot.kind.changes_turn() {
            at_table = at_table.other();
        }
    }

    history
}

/// Recompute a frame's point totals from the shot log alone. This is the
/// authority the cached frame totals are checked against.
pub fn frame_totals(shots: &[Shot]) -> (u32, u32) {
    let mut player1_score = 0u32;
    let mut player2_score = 0u32;
    let mut current_break = 0u32;
    let mut at_table = Seat::First;

    for shot in shots {
        apply_shot(
            shot,
            at_table,
            &mut player1_score,
            &mut player2_score,
            &mut current_break,
        );
        if shot.kind.changes_turn() {
            at_table = at_table.other();
        }
    }

    (player1_score, player2_score)
}

fn apply_shot(
    shot: &Shot,
    at_table: Seat,
    player1_score: &mut u32,
    player2_score: &mut u32,
    current_break: &mut u32,
) {
    if shot.kind.is_pot() {
        credit(at_table, shot.points, player1_score, player2_score);
        *current_break += shot.points;
    } else if shot.kind == ShotKind::Foul {
        // The penalty goes to the opponent of the player who fouled.
        credit(at_table.other(), shot.points, player1_score, player2_score);
    }
}

fn credit(seat: Seat, points: u32, player1_score: &mut u32, player2_score: &mut u32) {
    match seat {
        Seat::First => *player1_score += points,
        Seat::Second => *player2_score += points,
    }
}

fn seat_id<'a>(seat: Seat, player1_id: &'a str, player2_id: Option<&'a str>) -> &'a str {
    match seat {
        Seat::First => player1_id,
        Seat::Second => player2_id.unwrap_or(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShotKind;

    fn shot(player_id: &str, points: u32, kind: ShotKind, timestamp_ms: i64) -> Shot {
        Shot {
            player_id: player_id.to_string(),
            points,
            kind,
            timestamp_ms,
        }
    }

    #[test]
    fn test_empty_log_yields_empty_history() {
        let history = replay_frame(&[], "alice", Some("bob"));
        assert!(history.is_empty());
        assert_eq!(frame_totals(&[]), (0, 0));
    }

    #[test]
    fn test_pots_accumulate_for_the_player_at_the_table() {
        let shots = vec![
            shot("alice", 1, ShotKind::Potted, 0),
            shot("alice", 7, ShotKind::Potted, 1_000),
            shot("alice", 0, ShotKind::Miss, 2_000),
            shot("bob", 1, ShotKind::Potted, 3_000),
        ];

        let history = replay_frame(&shots, "alice", Some("bob"));
        assert_eq!(history.len(), 4);

        assert_eq!(history[0].player1_score, 1);
        assert_eq!(history[0].break_size, 1);
        assert_eq!(history[0].at_table, "alice");

        assert_eq!(history[1].player1_score, 8);
        assert_eq!(history[1].break_size, 8);

        // The miss entry still belongs to alice; the turn changes after.
        assert_eq!(history[2].at_table, "alice");
        assert_eq!(history[3].at_table, "bob");
        assert_eq!(history[3].player2_score, 1);
        assert_eq!(history[3].break_size, 1);
    }

    #[test]
    fn test_foul_credits_opponent_and_records_break_before_reset() {
        let shots = vec![
            shot("alice", 5, ShotKind::Potted, 0),
            shot("alice", 4, ShotKind::Foul, 1_000),
            shot("bob", 1, ShotKind::Potted, 2_000),
        ];

        let history = replay_frame(&shots, "alice", Some("bob"));

        // The foul entry keeps alice's break of 5; the reset only takes
        // effect from the next shot.
        assert_eq!(history[1].player1_score, 5);
        assert_eq!(history[1].player2_score, 4);
        assert_eq!(history[1].break_size, 5);
        assert_eq!(history[1].at_table, "alice");

        assert_eq!(history[2].at_table, "bob");
        assert_eq!(history[2].player2_score, 5);
        assert_eq!(history[2].break_size, 1);
    }

    #[test]
    fn test_safety_changes_turn_without_scoring() {
        let shots = vec![
            shot("alice", 0, ShotKind::Safety, 0),
            shot("bob", 1, ShotKind::Potted, 1_000),
        ];

        let history = replay_frame(&shots, "alice", Some("bob"));
        assert_eq!(history[0].player1_score, 0);
        assert_eq!(history[0].player2_score, 0);
        assert_eq!(history[1].at_table, "bob");
    }

    #[test]
    fn test_end_break_marker_keeps_the_table() {
        let shots = vec![
            shot("alice", 1, ShotKind::Potted, 0),
            shot("alice", 0, ShotKind::EndBreak, 1_000),
            shot("alice", 7, ShotKind::Potted, 2_000),
        ];

        let history = replay_frame(&shots, "alice", Some("bob"));

        // The marker carries the break it closes, changes no score and
        // keeps alice at the table; the following pot starts a new break.
        assert_eq!(history[1].break_size, 1);
        assert_eq!(history[1].player1_score, 1);
        assert_eq!(history[2].at_table, "alice");
        assert_eq!(history[2].player1_score, 8);
        assert_eq!(history[2].break_size, 7);
    }

    #[test]
    fn test_free_ball_variants_score_to_the_striker() {
        let shots = vec![
            shot("alice", 1, ShotKind::FreeBallPottedAsRed, 0),
            shot("alice", 7, ShotKind::Potted, 1_000),
            shot("alice", 7, ShotKind::FreeBallPottedAsColor, 2_000),
        ];

        let history = replay_frame(&shots, "alice", Some("bob"));
        assert_eq!(history[2].player1_score, 15);
        assert_eq!(history[2].break_size, 15);
    }

    #[test]
    fn test_replaying_a_prefix_reproduces_a_prefix_of_the_history() {
        let shots = vec![
            shot("alice", 1, ShotKind::Potted, 0),
            shot("alice", 5, ShotKind::Potted, 1_000),
            shot("alice", 4, ShotKind::Foul, 2_000),
            shot("bob", 1, ShotKind::Potted, 3_000),
            shot("bob", 0, ShotKind::Miss, 4_000),
            shot("alice", 1, ShotKind::Potted, 5_000),
        ];

        let full = replay_frame(&shots, "alice", Some("bob"));
        for cut in 0..=shots.len() {
            let partial = replay_frame(&shots[..cut], "alice", Some("bob"));
            assert_eq!(partial.len(), cut);
            for (a, b) in partial.iter().zip(full.iter()) {
                assert_eq!(a.player1_score, b.player1_score);
                assert_eq!(a.player2_score, b.player2_score);
                assert_eq!(a.break_size, b.break_size);
                assert_eq!(a.at_table, b.at_table);
            }
        }
    }

    #[test]
    fn test_guest_seat_scores_without_an_identifier() {
        let shots = vec![
            shot("alice", 0, ShotKind::Miss, 0),
            shot("", 5, ShotKind::Potted, 1_000),
        ];

        let history = replay_frame(&shots, "alice", None);
        assert_eq!(history[1].at_table, "");
        assert_eq!(history[1].player2_score, 5);
        assert_eq!(frame_totals(&shots), (0, 5));
    }

    #[test]
    fn test_frame_totals_match_the_last_history_entry() {
        let shots = vec![
            shot("alice", 1, ShotKind::Potted, 0),
            shot("alice", 4, ShotKind::Foul, 1_000),
            shot("bob", 7, ShotKind::Potted, 2_000),
            shot("bob", 0, ShotKind::Safety, 3_000),
            shot("alice", 1, ShotKind::Potted, 4_000),
        ];

        let history = replay_frame(&shots, "alice", Some("bob"));
        let last = history.last().unwrap();
        assert_eq!(
            frame_totals(&shots),
            (last.player1_score, last.player2_score)
        );
    }
}
