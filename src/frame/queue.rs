use super::ring::FrameRing;
use super::types::{Frame, FrameMetadata};
use crate::error::StreamError;
use std::sync::{Mutex, MutexGuard};

/// Mutex-guarded frame queue shared between the device notification thread
/// and the polling consumer.
///
/// The queue owns its ring exclusively; every access goes through one of the
/// guarded operations below, and the lock is only ever held for the duration
/// of a single bounded copy. Neither `push` nor `poll` waits: a full queue
/// overwrites its oldest frame and an empty queue reports `Ok(None)`.
pub struct FrameQueue {
    ring: Mutex<Option<FrameRing>>,
}

impl FrameQueue {
    /// Creates the queue in its uninitialized state; `init` must run before
    /// any push or poll.
    pub fn new() -> Self {
        Self {
            ring: Mutex::new(None),
        }
    }

    /// Allocates `capacity` slots of `max_frame_bytes` each, exactly once.
    pub fn init(&self, capacity: usize, max_frame_bytes: usize) -> Result<(), StreamError> {
        if capacity == 0 {
            return Err(StreamError::invalid_capacity("capacity must be greater than 0"));
        }
        if max_frame_bytes == 0 {
            return Err(StreamError::invalid_capacity(
                "max frame size must be greater than 0",
            ));
        }
        let mut guard = self.lock();
        if guard.is_some() {
            return Err(StreamError::AlreadyInitialized);
        }
        *guard = Some(FrameRing::new(capacity, max_frame_bytes));
        Ok(())
    }

    /// Stores one frame, overwriting the oldest when full. Never blocks
    /// beyond the copy itself.
    pub fn push(&self, metadata: FrameMetadata, data: &[u8]) -> Result<(), StreamError> {
        let mut guard = self.lock();
        let ring = guard.as_mut().ok_or(StreamError::Uninitialized)?;
        ring.push(metadata, data)
    }

    /// Takes the oldest pending frame as an owned copy.
    ///
    /// `Ok(None)` is the normal no-data result, not an error; the queue stays
    /// pollable indefinitely, including after the producer has stopped.
    pub fn poll(&self) -> Result<Option<Frame>, StreamError> {
        let mut guard = self.lock();
        let ring = guard.as_mut().ok_or(StreamError::Uninitialized)?;
        Ok(ring.poll())
    }

    /// Number of frames currently pending; 0 before `init`.
    pub fn len(&self) -> usize {
        self.lock().as_ref().map_or(0, |ring| ring.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot count fixed at `init`; 0 before `init`.
    pub fn capacity(&self) -> usize {
        self.lock().as_ref().map_or(0, |ring| ring.capacity())
    }

    // A poisoned lock still holds consistent state: the ring's counters only
    // advance after a successful copy. Recover and keep serving.
    fn lock(&self) -> MutexGuard<'_, Option<FrameRing>> {
        self.ring.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}
