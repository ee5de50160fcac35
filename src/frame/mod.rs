mod queue;
mod ring;
mod slot;
mod types;

pub use queue::FrameQueue;
pub use types::{Frame, FrameMetadata};
