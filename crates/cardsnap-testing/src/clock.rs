use cardsnap_pager::FrameClock;
use std::cell::Cell;
use std::time::Duration;

/// ~60 FPS frame interval in nanoseconds.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.now.set(self.now.get().saturating_add(nanos));
    }

    pub fn advance_frame(&self) {
        self.now.set(self.now.get().saturating_add(FRAME_NANOS));
    }
}

impl FrameClock for ManualClock {
    fn now_nanos(&self) -> u64 {
        self.now()
    }
}
