use mvs_stream::{
    cli::CliArgs, config::Config, logging, session::SimulatedSession, stream::StreamManager,
};

use anyhow::Result;
use clap::Parser;
use log::info;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    // Parse command-line arguments
    let cli_args = CliArgs::parse();

    // Setup logging
    logging::setup_logging(cli_args.debug as u8, cli_args.log_file.as_deref())?;
    logging::log_app_start(env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load(&cli_args)?;
    logging::log_app_config(&config);

    // Wire the simulated device session to the stream manager
    let session = SimulatedSession::new(config.camera.width, config.camera.height, config.camera.fps);
    let mut stream = StreamManager::new(session);
    stream.start(config.buffer.capacity)?;

    // Main loop: drain frames at our own cadence while the producer pushes
    // at the device's
    info!("Entering main polling loop");
    let mut delivered: u64 = 0;
    while delivered < config.run.frames {
        match stream.get_frame()? {
            Some(frame) => {
                delivered += 1;
                info!(
                    "Frame {} ({}x{}, {} bytes) captured at {}",
                    frame.metadata.frame_number,
                    frame.metadata.width,
                    frame.metadata.height,
                    frame.metadata.byte_length,
                    frame.metadata.timestamp.format("%H:%M:%S%.3f")
                );
            }
            None => thread::sleep(Duration::from_millis(1)),
        }
    }

    stream.stop()?;
    info!(
        "Delivered {} frames, {} rejected at the notification boundary",
        delivered,
        stream.rejected_frames()
    );

    Ok(())
}
