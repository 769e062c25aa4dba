use std::cell::Cell;
use std::rc::Rc;

/// Application-lifetime context shared by every view of one page load.
///
/// Construct one per load and hand clones to the views that need it. A fresh
/// `Session` behaves like a reload, which is also how tests reset it.
#[derive(Clone, Debug, Default)]
pub struct Session {
    entrance_played: Rc<Cell<bool>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once per session: the caller gets to play the
    /// entrance reveal. Later mounts, on any route, get `false`.
    pub fn claim_entrance(&self) -> bool {
        !self.entrance_played.replace(true)
    }

    #[inline]
    pub fn entrance_played(&self) -> bool {
        self.entrance_played.get()
    }
}
