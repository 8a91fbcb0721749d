use clap::Parser;
use clockcast_lib::TimePacket;
use clockcast_lib::cipher::{self, BROADCAST_KEY};
use clockcast_lib::constants::{BROADCAST_INTERVAL, DEVICE_ID, MULTICAST_GROUP, MULTICAST_PORT};
use clockcast_lib::net;
use clockcast_lib::session::{SendAction, Session, SessionEvent};
use std::error::Error;
use tokio::time::interval;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Broadcast clock time frames to the multicast group")]
struct Args {
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    // Failing to reach the group at startup is fatal; send failures later
    // are logged and the tick is skipped.
    let socket = net::sender_socket().await?;
    info!(
        "Sending time frames to multicast group {}:{}",
        MULTICAST_GROUP, MULTICAST_PORT
    );
    info!("Press Ctrl+C to stop");

    let mut timer = interval(BROADCAST_INTERVAL);
    let mut session = Session::new();

    while !session.is_stopped() {
        let event = tokio::select! {
            _ = timer.tick() => SessionEvent::Tick,
            _ = tokio::signal::ctrl_c() => SessionEvent::Terminate,
        };

        match session.handle(event) {
            SendAction::Time => {
                let packet = TimePacket::from_wall_clock(DEVICE_ID);
                let mut frame = packet.encode();
                cipher::transform(&mut frame, &BROADCAST_KEY);
                match socket.send(&frame).await {
                    Ok(_) => info!(
                        "Sent time frame {:02}:{:02}:{:02} (H:0x{:02X} M:0x{:02X} S:0x{:02X})",
                        packet.hour,
                        packet.minute,
                        packet.second,
                        packet.hour,
                        packet.minute,
                        packet.second
                    ),
                    Err(e) => error!("Failed to send time frame: {}", e),
                }
            }
            SendAction::Sentinel => {
                info!("Termination signal received, sending session-end frame");
                let packet = TimePacket::session_end(DEVICE_ID);
                let mut frame = packet.encode();
                cipher::transform(&mut frame, &BROADCAST_KEY);
                match socket.send(&frame).await {
                    Ok(_) => info!("Sent session-end frame"),
                    Err(e) => error!("Failed to send session-end frame: {}", e),
                }
                session.sentinel_sent();
            }
            SendAction::Nothing => {}
        }
    }

    info!("Broadcast session closed");
    Ok(())
}
