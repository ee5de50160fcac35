use super::slot::FrameSlot;
use super::types::{Frame, FrameMetadata};
use crate::error::StreamError;

/// Fixed-capacity FIFO of the most recent frames, evicting the oldest when
/// full.
///
/// Bookkeeping is two independent modular counters plus a size counter: the
/// valid frames always occupy `[start, start+size)` modulo capacity, and
/// `end` points at the slot that receives the next push. `start` is never
/// derived from `end`.
pub(crate) struct FrameRing {
    slots: Box<[FrameSlot]>,
    capacity: usize,
    start: usize,
    end: usize,
    size: usize,
}

impl FrameRing {
    /// Allocates every slot up front; capacity and per-slot buffer length are
    /// fixed for the ring's lifetime. Geometry validation is the caller's job.
    pub(crate) fn new(capacity: usize, max_frame_bytes: usize) -> Self {
        let slots: Vec<FrameSlot> = (0..capacity).map(|_| FrameSlot::new(max_frame_bytes)).collect();
        Self {
            slots: slots.into_boxed_slice(),
            capacity,
            start: 0,
            end: 0,
            size: 0,
        }
    }

    /// Stores one frame, overwriting the oldest when full.
    ///
    /// Never blocks and never waits for space; the only failure is an
    /// oversize payload, which leaves the ring untouched.
    pub(crate) fn push(&mut self, metadata: FrameMetadata, data: &[u8]) -> Result<(), StreamError> {
        self.slots[self.end].write(metadata, data)?;

        self.end = (self.end + 1) % self.capacity;
        if self.size < self.capacity {
            self.size += 1;
        } else {
            // Full: the push just reclaimed the oldest slot, so the new
            // oldest valid frame is one past the previous start.
            self.start = (self.start + 1) % self.capacity;
        }
        Ok(())
    }

    /// Takes the oldest frame, or `None` when the ring is empty.
    pub(crate) fn poll(&mut self) -> Option<Frame> {
        if self.size == 0 {
            return None;
        }
        let frame = self.slots[self.start].snapshot();
        self.start = (self.start + 1) % self.capacity;
        self.size -= 1;
        Some(frame)
    }

    pub(crate) fn len(&self) -> usize {
        self.size
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }
}
