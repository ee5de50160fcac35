mod loader;

pub use loader::{BufferConfig, CameraConfig, Config, RunConfig};
