//! Player state: a fixed track list, the current index, and the transport
//! operations that move it around.

use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub duration: u32,
}

impl Track {
    fn new(id: u32, title: &str, artist: &str, duration: u32) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            duration,
        }
    }
}

/// The fixed local music list shown in the quick playlist.
pub fn seed_tracks() -> Vec<Track> {
    vec![
        Track::new(1, "Sunrise", "A. Composer", 180),
        Track::new(2, "Ocean Drive", "Beat Makers", 210),
        Track::new(3, "Night Wind", "Synth Duo", 240),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub tracks: Vec<Track>,
    current_index: usize,
}

impl PlayerState {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current_index: 0,
        }
    }

    /// The track under the cursor, or `None` when the list is empty or the
    /// index is out of range. The caller renders a placeholder for `None`.
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current_index)
    }

    #[allow(dead_code)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Move the cursor to the track with the given id. Unknown ids are
    /// silently ignored.
    pub fn select_by_id(&mut self, id: u32) {
        if let Some(index) = self.tracks.iter().position(|t| t.id == id) {
            self.current_index = index;
        }
    }

    pub fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.tracks.len();
    }

    pub fn prev(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current_index = (self.current_index + self.tracks.len() - 1) % self.tracks.len();
    }

    /// Fisher-Yates shuffle of the track list in place. The cursor is not
    /// re-located to follow the previously displayed track, so afterwards the
    /// display shows whichever track landed at the unchanged index.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.tracks.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.tracks.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn next_wraps_around_after_full_cycle() {
        let mut player = PlayerState::new(seed_tracks());
        let n = player.tracks.len();
        for start in 0..n {
            player.select_by_id(player.tracks[start].id);
            let before = player.current_index();
            for _ in 0..n {
                player.next();
            }
            assert_eq!(player.current_index(), before);
        }
    }

    #[test]
    fn prev_wraps_around_after_full_cycle() {
        let mut player = PlayerState::new(seed_tracks());
        let n = player.tracks.len();
        let before = player.current_index();
        for _ in 0..n {
            player.prev();
        }
        assert_eq!(player.current_index(), before);
    }

    #[test]
    fn prev_from_first_track_wraps_to_last() {
        let mut player = PlayerState::new(seed_tracks());
        assert_eq!(player.current_index(), 0);
        player.prev();
        assert_eq!(player.current_index(), player.tracks.len() - 1);
    }

    #[test]
    fn select_by_id_moves_cursor_and_ignores_misses() {
        let mut player = PlayerState::new(seed_tracks());
        player.select_by_id(3);
        assert_eq!(player.current().map(|t| t.id), Some(3));

        player.select_by_id(999);
        assert_eq!(player.current().map(|t| t.id), Some(3));
    }

    #[test]
    fn current_is_none_for_empty_list() {
        let mut player = PlayerState::new(Vec::new());
        assert_eq!(player.current(), None);
        // Transport controls are no-ops rather than panics.
        player.next();
        player.prev();
        assert_eq!(player.current(), None);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut player = PlayerState::new(seed_tracks());
        let mut before: Vec<u32> = player.tracks.iter().map(|t| t.id).collect();

        player.shuffle(&mut rng);

        let mut after: Vec<u32> = player.tracks.iter().map(|t| t.id).collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_fills_each_position_roughly_uniformly() {
        let mut rng = StdRng::seed_from_u64(42);
        let tracks = seed_tracks();
        let n = tracks.len();
        let trials = 3000;
        // counts[pos][id - 1] = how often track `id` ended up at `pos`
        let mut counts = vec![vec![0u32; n]; n];

        for _ in 0..trials {
            let mut player = PlayerState::new(tracks.clone());
            player.shuffle(&mut rng);
            for (pos, track) in player.tracks.iter().enumerate() {
                counts[pos][(track.id - 1) as usize] += 1;
            }
        }

        let expected = trials as u32 / n as u32;
        for row in &counts {
            for &count in row {
                // Expected 1000 per cell; allow a generous band for a seeded run.
                assert!(
                    count > expected * 7 / 10 && count < expected * 13 / 10,
                    "count {count} too far from expected {expected}"
                );
            }
        }
    }
}
