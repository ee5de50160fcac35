use chrono::{DateTime, Local};

/// Descriptive record stored alongside every frame's bytes.
///
/// `timestamp` is the arrival time at the queue, stamped when the frame-done
/// notification is translated into a push.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMetadata {
    pub byte_length: usize,
    pub width: u32,
    pub height: u32,
    pub frame_number: u64,
    pub timestamp: DateTime<Local>,
}

impl FrameMetadata {
    pub fn new(byte_length: usize, width: u32, height: u32, frame_number: u64) -> Self {
        Self {
            byte_length,
            width,
            height,
            frame_number,
            timestamp: Local::now(),
        }
    }
}

/// One polled frame: an owned copy of the slot's payload plus its metadata.
///
/// The copy is independent of the queue; later pushes reusing the slot cannot
/// touch it.
#[derive(Debug, Clone)]
pub struct Frame {
    pub data: Vec<u8>,
    pub metadata: FrameMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_new_stamps_current_time() {
        let before = Local::now();
        let metadata = FrameMetadata::new(64, 8, 8, 1);
        let after = Local::now();

        assert_eq!(metadata.byte_length, 64);
        assert_eq!(metadata.width, 8);
        assert_eq!(metadata.height, 8);
        assert_eq!(metadata.frame_number, 1);
        assert!(metadata.timestamp >= before && metadata.timestamp <= after);
    }
}
