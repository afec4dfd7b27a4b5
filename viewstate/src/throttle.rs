// frame-coalescing throttle
//
// scroll events can fire many times per rendered frame.  a gate is acquired when an
// animation-frame callback is requested and released when that callback runs; any
// event arriving in between is dropped, so bursts collapse to one update per frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    // returns true if the caller should request a frame
    pub fn try_acquire(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn release(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Header,
    BackToTop,
}

// the two independent frame gates driven by window scroll events
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Throttle {
    pub header: FrameGate,
    pub back_to_top: FrameGate,
}

impl Throttle {
    pub fn gate(&mut self, gate: Gate) -> &mut FrameGate {
        match gate {
            Gate::Header => &mut self.header,
            Gate::BackToTop => &mut self.back_to_top,
        }
    }
}
