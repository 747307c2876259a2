//! Selection state shared by the thumbnail strip and the fullscreen viewer.
//!
//! Every transition is total: out-of-range indexes are clamped and an empty
//! sequence turns `select`, `step` and `open` into no-ops.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GallerySelection {
    selected_index: usize,
    is_viewer_open: bool,
    len: usize,
}

impl GallerySelection {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_viewer_open(&self) -> bool {
        self.is_viewer_open
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn select(&mut self, index: usize) {
        if self.is_empty() {
            return;
        }
        self.selected_index = index.min(self.len - 1);
    }

    /// Move one entry with wraparound at both ends
    pub fn step(&mut self, direction: Direction) {
        if self.is_empty() {
            return;
        }
        self.selected_index = match direction {
            Direction::Previous if self.selected_index == 0 => self.len - 1,
            Direction::Previous => self.selected_index - 1,
            Direction::Next => (self.selected_index + 1) % self.len,
        };
    }

    pub fn open(&mut self) {
        if !self.is_empty() {
            self.is_viewer_open = true;
        }
    }

    pub fn close(&mut self) {
        self.is_viewer_open = false;
    }

    /// Adopt a new sequence length, e.g. after another product was loaded
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected_index = 0;
            self.is_viewer_open = false;
        } else {
            self.selected_index = self.selected_index.min(len - 1);
        }
    }

    /// `"3 / 7"`
    pub fn caption(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{} / {}", self.selected_index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GallerySelection::new(4);
        assert_eq!(state.selected_index(), 0);
        assert!(!state.is_viewer_open());
        assert_eq!(state.caption(), "1 / 4");
    }

    #[test]
    fn test_previous_then_next_returns_to_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut state = GallerySelection::new(len);
                state.select(start);
                state.step(Direction::Previous);
                state.step(Direction::Next);
                assert_eq!(state.selected_index(), start);

                state.step(Direction::Next);
                state.step(Direction::Previous);
                assert_eq!(state.selected_index(), start);
            }
        }
    }

    #[test]
    fn test_wraparound() {
        let mut state = GallerySelection::new(3);
        state.step(Direction::Previous);
        assert_eq!(state.selected_index(), 2);
        state.step(Direction::Next);
        assert_eq!(state.selected_index(), 0);

        let mut single = GallerySelection::new(1);
        single.step(Direction::Next);
        assert_eq!(single.selected_index(), 0);
        single.step(Direction::Previous);
        assert_eq!(single.selected_index(), 0);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut state = GallerySelection::new(5);
        state.select(3);
        let once = state;
        state.select(3);
        assert_eq!(state, once);
    }

    #[test]
    fn test_select_clamps() {
        let mut state = GallerySelection::new(3);
        state.select(10);
        assert_eq!(state.selected_index(), 2);
    }

    #[test]
    fn test_open_close_does_not_touch_index() {
        let mut state = GallerySelection::new(3);
        state.select(1);
        state.open();
        assert!(state.is_viewer_open());
        state.close();
        assert!(!state.is_viewer_open());
        assert_eq!(state.selected_index(), 1);
    }

    #[test]
    fn test_empty_sequence_is_inert() {
        let mut state = GallerySelection::new(0);
        state.select(2);
        state.step(Direction::Next);
        state.step(Direction::Previous);
        state.open();
        assert_eq!(state, GallerySelection::new(0));
        assert_eq!(state.caption(), "");
    }

    #[test]
    fn test_sync_len() {
        let mut state = GallerySelection::new(6);
        state.select(5);
        state.open();

        state.sync_len(2);
        assert_eq!(state.selected_index(), 1);
        assert!(state.is_viewer_open());

        state.sync_len(0);
        assert_eq!(state.selected_index(), 0);
        assert!(!state.is_viewer_open());
    }
}
