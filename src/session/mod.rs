mod sim;

pub use sim::SimulatedSession;

use crate::error::StreamError;
use crate::stream::FrameSink;

/// Narrow boundary to the device layer.
///
/// A session owns the hardware handle, acquisition lifecycle and parameter
/// access; the streaming core only ever asks it for the maximum payload size
/// and hands it a [`FrameSink`] to invoke, on the session's own thread, each
/// time a frame completes.
pub trait DeviceSession {
    /// Maximum size in bytes of a single frame payload, as the device
    /// reports it. Used to size every queue slot before streaming starts.
    fn payload_size(&self) -> Result<usize, StreamError>;

    /// Registers the sink and begins delivering frame notifications.
    fn start_streaming(&mut self, sink: FrameSink) -> Result<(), StreamError>;

    /// Stops delivery. Must be safe to call when not streaming.
    fn stop_streaming(&mut self) -> Result<(), StreamError>;
}
