use super::DeviceSession;
use crate::error::StreamError;
use crate::stream::{FrameSink, RawFrameInfo};
use crossbeam_channel::{bounded, select, tick, Sender};
use log::{debug, info};
use rand::Rng;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Stand-in device session generating random mono frames at a fixed rate.
///
/// Used by the demo binary and the streaming tests in place of a hardware
/// session: a producer thread fires on a timer and invokes the sink exactly
/// the way a driver's frame-done notification would, concurrently with
/// consumer polls.
pub struct SimulatedSession {
    width: u32,
    height: u32,
    fps: f64,
    stop_tx: Option<Sender<()>>,
    producer: Option<JoinHandle<()>>,
}

impl SimulatedSession {
    pub fn new(width: u32, height: u32, fps: f64) -> Self {
        Self {
            width,
            height,
            fps,
            stop_tx: None,
            producer: None,
        }
    }
}

impl DeviceSession for SimulatedSession {
    fn payload_size(&self) -> Result<usize, StreamError> {
        Ok(self.width as usize * self.height as usize)
    }

    fn start_streaming(&mut self, sink: FrameSink) -> Result<(), StreamError> {
        if self.producer.is_some() {
            return Err(StreamError::session("session is already streaming"));
        }
        if self.fps <= 0.0 {
            return Err(StreamError::session("frame rate must be positive"));
        }

        let (stop_tx, stop_rx) = bounded::<()>(0);
        let interval = Duration::from_secs_f64(1.0 / self.fps);
        let payload_size = self.width as usize * self.height as usize;
        let (width, height) = (self.width, self.height);

        let producer = thread::spawn(move || {
            let ticker = tick(interval);
            let mut rng = rand::thread_rng();
            let mut payload = vec![0u8; payload_size];
            let mut frame_number: u64 = 0;
            loop {
                select! {
                    // Closing the channel on stop also lands here.
                    recv(stop_rx) -> _ => {
                        debug!("Producer thread stopping after {} frames", frame_number);
                        break;
                    }
                    recv(ticker) -> _ => {
                        rng.fill(&mut payload[..]);
                        frame_number += 1;
                        let frame_info = RawFrameInfo {
                            byte_length: payload_size,
                            width,
                            height,
                            frame_number,
                        };
                        sink.deliver(Some(&payload), Some(frame_info));
                    }
                }
            }
        });

        self.stop_tx = Some(stop_tx);
        self.producer = Some(producer);
        info!(
            "Simulated session streaming {}x{} frames at {} fps",
            width, height, self.fps
        );
        Ok(())
    }

    fn stop_streaming(&mut self) -> Result<(), StreamError> {
        if let Some(stop_tx) = self.stop_tx.take() {
            drop(stop_tx);
        }
        if let Some(producer) = self.producer.take() {
            producer
                .join()
                .map_err(|_| StreamError::session("producer thread panicked"))?;
        }
        Ok(())
    }
}

impl Drop for SimulatedSession {
    fn drop(&mut self) {
        let _ = self.stop_streaming();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameQueue;
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn test_payload_size_is_geometry_product() {
        let session = SimulatedSession::new(640, 480, 30.0);
        assert_eq!(session.payload_size().unwrap(), 640 * 480);
    }

    #[test]
    fn test_double_start_fails() {
        let queue = Arc::new(FrameQueue::new());
        queue.init(2, 16).unwrap();
        let sink = FrameSink::new(Arc::clone(&queue));

        let mut session = SimulatedSession::new(4, 4, 500.0);
        session.start_streaming(sink.clone()).unwrap();
        assert!(matches!(
            session.start_streaming(sink),
            Err(StreamError::Session(_))
        ));
        session.stop_streaming().unwrap();
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let mut session = SimulatedSession::new(4, 4, 500.0);
        session.stop_streaming().unwrap();
    }

    #[test]
    fn test_produces_full_sized_frames() {
        let queue = Arc::new(FrameQueue::new());
        queue.init(4, 16).unwrap();

        let mut session = SimulatedSession::new(4, 4, 1000.0);
        session
            .start_streaming(FrameSink::new(Arc::clone(&queue)))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let frame = loop {
            assert!(Instant::now() < deadline, "no frame produced");
            if let Some(frame) = queue.poll().unwrap() {
                break frame;
            }
            thread::sleep(Duration::from_millis(1));
        };
        session.stop_streaming().unwrap();

        assert_eq!(frame.data.len(), 16);
        assert_eq!(frame.metadata.byte_length, 16);
        assert!(frame.metadata.frame_number >= 1);
    }
}
