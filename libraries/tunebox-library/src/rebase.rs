//! Current-index bookkeeping across track mutations
//!
//! The playback position is an index into the active playlist, so every
//! removal or move has to shift it to keep pointing at the same track.

/// Rebase `current` after the track at `removed` was taken out
///
/// `new_len` is the playlist length after the removal. When the current
/// track itself is removed, the index stays put (now naming the following
/// track) and wraps to 0 past the end; an emptied playlist has no current
/// track.
pub fn after_remove(current: Option<usize>, removed: usize, new_len: usize) -> Option<usize> {
    let current = current?;

    if removed == current {
        if new_len == 0 {
            None
        } else {
            Some(current % new_len)
        }
    } else if removed < current {
        Some(current - 1)
    } else {
        Some(current)
    }
}

/// Rebase `current` after a stable move from `from` to `to`
pub fn after_move(current: Option<usize>, from: usize, to: usize) -> Option<usize> {
    let current = current?;

    let rebased = if from == current {
        to
    } else if from < current && current <= to {
        current - 1
    } else if to <= current && current < from {
        current + 1
    } else {
        current
    };
    Some(rebased)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_current_keeps_position() {
        // [A, B, C] playing B; removing B leaves C at index 1
        assert_eq!(after_remove(Some(1), 1, 2), Some(1));
    }

    #[test]
    fn remove_current_at_end_wraps() {
        assert_eq!(after_remove(Some(2), 2, 2), Some(0));
    }

    #[test]
    fn remove_last_remaining_track_clears() {
        assert_eq!(after_remove(Some(0), 0, 0), None);
    }

    #[test]
    fn remove_before_current_decrements() {
        assert_eq!(after_remove(Some(3), 1, 4), Some(2));
    }

    #[test]
    fn remove_after_current_is_unchanged() {
        assert_eq!(after_remove(Some(1), 3, 4), Some(1));
    }

    #[test]
    fn nothing_to_rebase() {
        assert_eq!(after_remove(None, 0, 3), None);
        assert_eq!(after_move(None, 0, 3), None);
    }

    #[test]
    fn move_current_follows_track() {
        assert_eq!(after_move(Some(2), 2, 0), Some(0));
        assert_eq!(after_move(Some(0), 0, 3), Some(3));
    }

    #[test]
    fn move_from_before_to_after_decrements() {
        assert_eq!(after_move(Some(2), 0, 3), Some(1));
        assert_eq!(after_move(Some(2), 1, 2), Some(1));
    }

    #[test]
    fn move_from_after_to_before_increments() {
        // 4 tracks, current 1, move 2 -> 0
        assert_eq!(after_move(Some(1), 2, 0), Some(2));
        assert_eq!(after_move(Some(1), 3, 1), Some(2));
    }

    #[test]
    fn move_elsewhere_is_unchanged() {
        assert_eq!(after_move(Some(0), 2, 3), Some(0));
        assert_eq!(after_move(Some(3), 0, 1), Some(3));
    }

    #[test]
    fn rebased_index_tracks_same_item() {
        let tracks = ["a", "b", "c", "d", "e"];
        for from in 0..tracks.len() {
            for to in 0..tracks.len() {
                for current in 0..tracks.len() {
                    let mut moved = tracks.to_vec();
                    let item = moved.remove(from);
                    moved.insert(to, item);

                    let rebased = after_move(Some(current), from, to).unwrap();
                    assert_eq!(moved[rebased], tracks[current], "from {from} to {to} current {current}");
                }
            }
        }
    }
}
