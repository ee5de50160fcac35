use crate::frame::{FrameMetadata, FrameQueue};
use log::warn;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Raw fields of a frame-done notification as the device reports them.
#[derive(Debug, Clone, Copy)]
pub struct RawFrameInfo {
    pub byte_length: usize,
    pub width: u32,
    pub height: u32,
    pub frame_number: u64,
}

/// Boundary handle handed to a device session when streaming starts.
///
/// The session invokes [`deliver`](FrameSink::deliver) from its own thread,
/// concurrently with consumer polls. The call performs exactly one bounded
/// copy, never suspends, and never propagates a failure back across the
/// boundary: malformed or rejected notifications become a warning and a
/// counter increment, nothing more.
#[derive(Clone)]
pub struct FrameSink {
    queue: Arc<FrameQueue>,
    rejected: Arc<AtomicU64>,
}

impl FrameSink {
    pub(crate) fn new(queue: Arc<FrameQueue>) -> Self {
        Self {
            queue,
            rejected: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Translates one notification into a queue push.
    ///
    /// Absent data or metadata makes the call a no-op with a diagnostic, as
    /// does a length mismatch between the two or a failed push.
    pub fn deliver(&self, data: Option<&[u8]>, info: Option<RawFrameInfo>) {
        let (data, info) = match (data, info) {
            (Some(data), Some(info)) => (data, info),
            _ => {
                warn!("Frame notification missing data or metadata, ignoring");
                self.rejected.fetch_add(1, Ordering::Relaxed);
                return;
            }
        };

        if info.byte_length != data.len() {
            warn!(
                "Frame {} metadata reports {} bytes but payload has {}, ignoring",
                info.frame_number,
                info.byte_length,
                data.len()
            );
            self.rejected.fetch_add(1, Ordering::Relaxed);
            return;
        }

        let metadata = FrameMetadata::new(data.len(), info.width, info.height, info.frame_number);
        if let Err(err) = self.queue.push(metadata, data) {
            warn!("Dropping frame {}: {}", info.frame_number, err);
            self.rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Notifications discarded at the boundary since streaming started.
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }
}
