//! Frame scheduler.
//!
//! One `Ticker` owns every per-frame callback. Components subscribe when they
//! mount and unsubscribe when they unmount, so teardown is a single removal
//! and nothing reschedules itself.

use crate::constants::MAX_FRAME_DT;
use smallvec::SmallVec;
use std::time::Duration;

/// Ordering bucket within a frame: raw input first, then smoothing, then
/// parameter mapping, then one-shot timelines that override mapped values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Input,
    Smooth,
    Map,
    Timeline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTime {
    pub index: u64,
    /// Delta fed to integrators, capped.
    pub dt: Duration,
    /// Delta as measured.
    pub raw_dt: Duration,
    /// Sum of capped deltas since the ticker started.
    pub elapsed: Duration,
}

type FrameCallback = Box<dyn FnMut(&FrameTime)>;

struct Entry {
    id: TickId,
    phase: Phase,
    callback: FrameCallback,
}

pub struct Ticker {
    entries: SmallVec<[Entry; 8]>,
    next_id: u64,
    max_dt: Duration,
    last_now: Option<Duration>,
    frame: u64,
    elapsed: Duration,
}

impl Ticker {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT)
    }

    pub fn with_max_dt(max_dt: Duration) -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
            max_dt,
            last_now: None,
            frame: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn subscribe(
        &mut self,
        phase: Phase,
        callback: impl FnMut(&FrameTime) + 'static,
    ) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        // Stable: after every entry of the same or an earlier phase.
        let at = self
            .entries
            .iter()
            .position(|e| e.phase > phase)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            at,
            Entry {
                id,
                phase,
                callback: Box::new(callback),
            },
        );
        id
    }

    /// Remove a callback; it is dropped immediately. Returns whether it was
    /// registered.
    pub fn unsubscribe(&mut self, id: TickId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    /// Run one frame at host timestamp `now` (monotonic, any origin). The
    /// first call only establishes the origin and runs with a zero delta.
    pub fn tick(&mut self, now: Duration) -> FrameTime {
        let raw_dt = match self.last_now {
            Some(last) => now.saturating_sub(last),
            None => Duration::ZERO,
        };
        self.last_now = Some(now);
        self.run(raw_dt)
    }

    /// Run one frame with an explicit delta.
    pub fn advance(&mut self, dt: Duration) -> FrameTime {
        if let Some(last) = self.last_now {
            self.last_now = Some(last + dt);
        }
        self.run(dt)
    }

    fn run(&mut self, raw_dt: Duration) -> FrameTime {
        if raw_dt > self.max_dt {
            log::debug!(
                "[ticker] frame delta {:?} capped to {:?}",
                raw_dt,
                self.max_dt
            );
        }
        let dt = raw_dt.min(self.max_dt);
        self.elapsed += dt;
        let frame = FrameTime {
            index: self.frame,
            dt,
            raw_dt,
            elapsed: self.elapsed,
        };
        self.frame += 1;
        for entry in self.entries.iter_mut() {
            (entry.callback)(&frame);
        }
        frame
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
