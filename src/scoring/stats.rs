use crate::domain::Shot;

use super::types::{FrameStats, Seat};

/// Derive a frame's summary statistics in one forward pass.
///
/// Highest breaks are banked whenever a break ends; the player still at
/// the table when the log runs out keeps credit for the unfinished break.
/// An empty log yields all zeros.
pub fn aggregate_frame(shots: &[Shot]) -> FrameStats {
    let mut current_break = 0u32;
    let mut highest = [0u32; 2];
    let mut at_table = Seat::First;

    for shot in shots {
        if shot.kind.is_pot() {
            current_break += shot.points;
        }
        if shot.kind.ends_break() {
            bank_break(at_table, current_break, &mut highest);
            current_break = 0;
        }
        if shot.kind.changes_turn() {
            at_table = at_table.other();
        }
    }
    bank_break(at_table, current_break, &mut highest);

    FrameStats {
        player1_highest_break: highest[0],
        player2_highest_break: highest[1],
        duration_ms: duration_ms(shots),
    }
}

fn bank_break(seat: Seat, value: u32, highest: &mut [u32; 2]) {
    let slot = match seat {
        Seat::First => 0,
        Seat::Second => 1,
    };
    highest[slot] = highest[slot].max(value);
}

fn duration_ms(shots: &[Shot]) -> i64 {
    match (shots.first(), shots.last()) {
        (Some(first), Some(last)) => (last.timestamp_ms - first.timestamp_ms).max(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Shot, ShotKind};
    use crate::scoring::{frame_totals, replay_frame};

    fn shot(player_id: &str, points: u32, kind: ShotKind, timestamp_ms: i64) -> Shot {
        Shot {
            player_id: player_id.to_string(),
            points,
            kind,
            timestamp_ms,
        }
    }

    #[test]
    fn test_empty_log_yields_all_zero_stats() {
        let stats = aggregate_frame(&[]);
        assert_eq!(
            stats,
            FrameStats {
                player1_highest_break: 0,
                player2_highest_break: 0,
                duration_ms: 0,
            }
        );
    }

    #[test]
    fn test_foul_ends_the_break_without_inflating_it() {
        // Pot of 5 by player 1, foul conceding 4, pot of 6 by player 2:
        // the foul closes player 1's break at 5 and the conceded points
        // never count toward a break.
        let shots = vec![
            shot("alice", 5, ShotKind::Potted, 0),
            shot("alice", 4, ShotKind::Foul, 30_000),
            shot("bob", 6, ShotKind::Potted, 60_000),
        ];

        let stats = aggregate_frame(&shots);
        assert_eq!(stats.player1_highest_break, 5);
        assert_eq!(stats.player2_highest_break, 6);
        assert_eq!(stats.duration_ms, 60_000);
    }

    #[test]
    fn test_unfinished_break_is_credited() {
        let shots = vec![
            shot("alice", 0, ShotKind::Miss, 0),
            shot("bob", 1, ShotKind::Potted, 1_000),
            shot("bob", 7, ShotKind::Potted, 2_000),
        ];

        let stats = aggregate_frame(&shots);
        assert_eq!(stats.player1_highest_break, 0);
        assert_eq!(stats.player2_highest_break, 8);
    }

    #[test]
    fn test_highest_break_keeps_the_maximum_of_several_runs() {
        let shots = vec![
            shot("alice", 8, ShotKind::Potted, 0),
            shot("alice", 0, ShotKind::Miss, 1_000),
            shot("bob", 0, ShotKind::Safety, 2_000),
            shot("alice", 3, ShotKind::Potted, 3_000),
            shot("alice", 0, ShotKind::Miss, 4_000),
        ];

        let stats = aggregate_frame(&shots);
        assert_eq!(stats.player1_highest_break, 8);
    }

    #[test]
    fn test_end_break_marker_banks_the_break_in_place() {
        let shots = vec![
            shot("alice", 6, ShotKind::Potted, 0),
            shot("alice", 0, ShotKind::EndBreak, 1_000),
            shot("alice", 2, ShotKind::Potted, 2_000),
        ];

        let stats = aggregate_frame(&shots);
        // Both runs belong to player 1; the marker separated them.
        assert_eq!(stats.player1_highest_break, 6);
        assert_eq!(stats.player2_highest_break, 0);
    }

    #[test]
    fn test_replay_score_deltas_agree_with_frame_totals() {
        let shots = vec![
            shot("alice", 1, ShotKind::Potted, 0),
            shot("alice", 7, ShotKind::Potted, 1_000),
            shot("alice", 4, ShotKind::Foul, 2_000),
            shot("bob", 1, ShotKind::Potted, 3_000),
            shot("bob", 0, ShotKind::Safety, 4_000),
            shot("alice", 5, ShotKind::Potted, 5_000),
        ];

        let history = replay_frame(&shots, "alice", Some("bob"));
        let mut delta_sum = (0u32, 0u32);
        let mut previous = (0u32, 0u32);
        for entry in &history {
            delta_sum.0 += entry.player1_score - previous.0;
            delta_sum.1 += entry.player2_score - previous.1;
            previous = (entry.player1_score, entry.player2_score);
        }

        assert_eq!(delta_sum, frame_totals(&shots));
    }

    #[test]
    fn test_duration_never_goes_negative() {
        let shots = vec![
            shot("alice", 1, ShotKind::Potted, 5_000),
            shot("alice", 0, ShotKind::Miss, 4_000),
        ];

        assert_eq!(aggregate_frame(&shots).duration_ms, 0);
    }
}
