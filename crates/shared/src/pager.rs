use crate::models::CoordKey;

/// Index into a cluster, always within `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    /// A pager over `len` records, starting at the first. `len` is at least 1.
    pub fn new(len: usize) -> Self {
        Pager {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// 1-based position for the counter.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn is_paged(&self) -> bool {
        self.len > 1
    }

    /// Step back; stays put on the first record.
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Step forward; stays put on the last record.
    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    Closed,
    Showing { key: CoordKey, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPopup {
    pub key: CoordKey,
    pub pager: Pager,
}

/// Owns the single open popup.
///
/// Opening a popup drops the previous pager first, so there is never more
/// than one current popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupController {
    open: Option<OpenPopup>,
}

impl PopupController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the first record of the cluster at `key`.
    ///
    /// Returns the key of the popup this one superseded, if any.
    pub fn open(&mut self, key: CoordKey, len: usize) -> Option<CoordKey> {
        let previous = self.close();
        tracing::debug!(key = %key, records = len, "Opening popup");
        self.open = Some(OpenPopup {
            key,
            pager: Pager::new(len),
        });
        previous
    }

    /// Close the current popup and return its key.
    pub fn close(&mut self) -> Option<CoordKey> {
        self.open.take().map(|p| p.key)
    }

    pub fn prev(&mut self) {
        if let Some(p) = self.open.as_mut() {
            p.pager.prev();
        }
    }

    pub fn next(&mut self) {
        if let Some(p) = self.open.as_mut() {
            p.pager.next();
        }
    }

    pub fn current(&self) -> Option<&OpenPopup> {
        self.open.as_ref()
    }

    pub fn state(&self) -> PopupState {
        match &self.open {
            None => PopupState::Closed,
            Some(p) => PopupState::Showing {
                key: p.key.clone(),
                index: p.pager.index(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> CoordKey {
        CoordKey::parse(raw).unwrap()
    }

    #[test]
    fn test_pager_starts_at_first() {
        let p = Pager::new(3);
        assert_eq!(p.index(), 0);
        assert_eq!(p.position(), 1);
        assert!(!p.has_prev());
        assert!(p.has_next());
    }

    #[test]
    fn test_pager_clamps_at_both_ends() {
        let mut p = Pager::new(2);
        p.prev();
        assert_eq!(p.index(), 0);
        p.next();
        p.next();
        p.next();
        assert_eq!(p.index(), 1);
        assert!(p.has_prev());
        assert!(!p.has_next());
    }

    #[test]
    fn test_pager_single_record() {
        let mut p = Pager::new(1);
        assert!(!p.is_paged());
        assert!(!p.has_prev());
        assert!(!p.has_next());
        p.next();
        assert_eq!(p.index(), 0);
    }

    #[test]
    fn test_pager_index_invariant_over_walk() {
        let n = 5;
        let mut p = Pager::new(n);
        let steps = [true, true, false, true, true, true, true, false, false, false, false, false];
        for forward in steps {
            if forward {
                p.next();
            } else {
                p.prev();
            }
            assert!(p.index() < n);
            assert_eq!(p.has_prev(), p.index() != 0);
            assert_eq!(p.has_next(), p.index() != n - 1);
        }
    }

    #[test]
    fn test_controller_initially_closed() {
        assert_eq!(PopupController::new().state(), PopupState::Closed);
    }

    #[test]
    fn test_controller_open_shows_first_record() {
        let mut c = PopupController::new();
        assert_eq!(c.open(key("1,1"), 3), None);
        c.next();
        c.next();
        assert_eq!(
            c.state(),
            PopupState::Showing {
                key: key("1,1"),
                index: 2
            }
        );
    }

    #[test]
    fn test_controller_open_supersedes_previous() {
        let mut c = PopupController::new();
        c.open(key("1,1"), 3);
        c.next();
        let superseded = c.open(key("2,2"), 2);
        assert_eq!(superseded, Some(key("1,1")));
        assert_eq!(
            c.state(),
            PopupState::Showing {
                key: key("2,2"),
                index: 0
            }
        );
    }

    #[test]
    fn test_controller_reopen_same_key_resets_index() {
        let mut c = PopupController::new();
        c.open(key("1,1"), 3);
        c.next();
        c.open(key("1,1"), 3);
        assert_eq!(c.current().unwrap().pager.index(), 0);
    }

    #[test]
    fn test_controller_close() {
        let mut c = PopupController::new();
        c.open(key("1,1"), 1);
        assert_eq!(c.close(), Some(key("1,1")));
        assert_eq!(c.close(), None);
        c.next();
        assert_eq!(c.state(), PopupState::Closed);
    }
}
