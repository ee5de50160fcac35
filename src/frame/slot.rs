use super::types::{Frame, FrameMetadata};
use crate::error::StreamError;

/// Reusable storage cell for one frame.
///
/// The backing buffer is allocated once and its length never changes; only
/// the leading `metadata.byte_length` bytes are valid at any time.
pub(crate) struct FrameSlot {
    buffer: Box<[u8]>,
    metadata: FrameMetadata,
}

impl FrameSlot {
    pub(crate) fn new(max_frame_bytes: usize) -> Self {
        Self {
            buffer: vec![0u8; max_frame_bytes].into_boxed_slice(),
            metadata: FrameMetadata::new(0, 0, 0, 0),
        }
    }

    /// Copies `data` into the slot and overwrites its metadata snapshot.
    ///
    /// Rejects payloads larger than the fixed buffer without touching the
    /// slot; there is no truncation path.
    pub(crate) fn write(&mut self, mut metadata: FrameMetadata, data: &[u8]) -> Result<(), StreamError> {
        if data.len() > self.buffer.len() {
            return Err(StreamError::OversizeFrame {
                length: data.len(),
                max: self.buffer.len(),
            });
        }
        self.buffer[..data.len()].copy_from_slice(data);
        metadata.byte_length = data.len();
        self.metadata = metadata;
        Ok(())
    }

    /// Copies the valid bytes and metadata out as an owned frame.
    pub(crate) fn snapshot(&self) -> Frame {
        Frame {
            data: self.buffer[..self.metadata.byte_length].to_vec(),
            metadata: self.metadata.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_snapshot() {
        let mut slot = FrameSlot::new(8);
        slot.write(FrameMetadata::new(0, 2, 2, 7), &[1, 2, 3, 4]).unwrap();

        let frame = slot.snapshot();
        assert_eq!(frame.data, vec![1, 2, 3, 4]);
        assert_eq!(frame.metadata.byte_length, 4);
        assert_eq!(frame.metadata.frame_number, 7);
    }

    #[test]
    fn test_write_sets_byte_length_from_payload() {
        let mut slot = FrameSlot::new(8);
        // Caller-supplied byte_length is overwritten with the real copy size.
        slot.write(FrameMetadata::new(999, 1, 1, 1), &[5, 6]).unwrap();
        assert_eq!(slot.snapshot().metadata.byte_length, 2);
    }

    #[test]
    fn test_oversize_write_rejected_without_mutation() {
        let mut slot = FrameSlot::new(4);
        slot.write(FrameMetadata::new(0, 1, 1, 1), &[9, 9, 9, 9]).unwrap();

        let err = slot.write(FrameMetadata::new(0, 1, 1, 2), &[0; 5]).unwrap_err();
        assert!(matches!(
            err,
            StreamError::OversizeFrame { length: 5, max: 4 }
        ));

        // Previous contents survive the rejected write.
        let frame = slot.snapshot();
        assert_eq!(frame.data, vec![9, 9, 9, 9]);
        assert_eq!(frame.metadata.frame_number, 1);
    }
}
