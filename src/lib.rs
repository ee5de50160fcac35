//! A library for buffered frame delivery from industrial machine-vision
//! cameras.
//!
//! This library provides functionality for:
//! - A fixed-capacity, mutex-guarded frame queue with overwrite-oldest
//!   eviction, sized once from the device's reported payload size
//! - A notification boundary translating asynchronous frame-done callbacks
//!   into queue pushes without ever failing into the driver's thread
//! - A stream manager exposing start/get_frame/stop to the application
//! - A simulated device session for development and testing

pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod logging;
pub mod session;
pub mod stream;

pub use config::Config;
pub use error::{AppError, Result, StreamError};
pub use frame::{Frame, FrameMetadata, FrameQueue};
pub use session::{DeviceSession, SimulatedSession};
pub use stream::{FrameSink, RawFrameInfo, StreamManager};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
///
/// Sets up logging and should be called before using any other
/// functionality.
pub fn initialize(debug: bool, log_file: Option<&str>) -> Result<()> {
    logging::setup_logging(debug as u8, log_file)?;
    logging::log_app_start(VERSION);
    Ok(())
}
