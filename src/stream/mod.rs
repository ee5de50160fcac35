mod manager;
mod sink;

pub use manager::StreamManager;
pub use sink::{FrameSink, RawFrameInfo};
