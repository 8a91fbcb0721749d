use bytes::Bytes;
use clap::Parser;
use clockcast_lib::FrameView;
use clockcast_lib::cipher::{self, BROADCAST_KEY};
use clockcast_lib::constants::{FAMILY_MAGIC, FRAME_SIZE, HDR1_MAGIC, HDR2_MAGIC, MULTICAST_GROUP, MULTICAST_PORT};
use clockcast_lib::net;
use std::error::Error;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Monitor clock time frames on the multicast group")]
struct Args {
    /// Number of frames to inspect before exiting (default: unlimited)
    #[arg(short, long)]
    count: Option<u64>,

    /// Apply the keystream transform before decoding (inspect live ciphered traffic)
    #[arg(long)]
    decipher: bool,

    /// Just print the raw hex of each frame
    #[arg(long)]
    hex_only: bool,

    /// Print each decoded frame as one JSON object
    #[arg(long)]
    json: bool,

    /// Include receive timestamps in output
    #[arg(short, long)]
    timestamp: bool,

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

    let socket = net::listener_socket()?;
    info!(
        "Listening for time frames on {}:{}",
        MULTICAST_GROUP, MULTICAST_PORT
    );
    info!("Press Ctrl+C to stop");

    let mut buffer = [0u8; 1024];
    let mut frame_count = 0u64;

    loop {
        if let Some(max_count) = args.count {
            if frame_count >= max_count {
                break;
            }
        }

        let (n, from) = match socket.recv_from(&mut buffer).await {
            Ok(received) => received,
            Err(e) => {
                warn!("Failed to read datagram: {}", e);
                continue;
            }
        };

        if n < FRAME_SIZE {
            warn!("Received short datagram ({} bytes) from {}", n, from);
            continue;
        }

        // Only the fixed 48-byte structure is inspected; trailing bytes
        // are ignored.
        let mut frame = [0u8; FRAME_SIZE];
        frame.copy_from_slice(&buffer[..FRAME_SIZE]);
        if args.decipher {
            cipher::transform(&mut frame, &BROADCAST_KEY);
        }

        frame_count += 1;

        if args.hex_only {
            println!("{}", hex::encode(frame));
            continue;
        }

        let view = FrameView::try_from(Bytes::copy_from_slice(&frame))?;

        if args.json {
            let report = serde_json::json!({
                "from": from.to_string(),
                "frame": view,
                "validation": view.validate(),
                "valid": view.validate().is_valid(),
            });
            println!("{report}");
            continue;
        }

        let timestamp_str = if args.timestamp {
            format!(" at {}", chrono::Local::now().format("%H:%M:%S"))
        } else {
            String::new()
        };
        println!("\n--- Frame from {}{} ---", from, timestamp_str);
        println!("Raw hex: {}", hex::encode(frame));
        print_fields(&view);
    }

    info!("Inspected {} frames", frame_count);
    Ok(())
}

fn print_fields(view: &FrameView) {
    println!("HDR1: 0x{:08X} (expected: 0x{:08X})", view.hdr1, HDR1_MAGIC);
    println!("HDR2: 0x{:08X} (expected: 0x{:08X})", view.hdr2, HDR2_MAGIC);
    println!("RSRV1: 0x{:04X}", view.rsrv1);
    println!("DEVICE: 0x{:04X}", view.device);
    println!(
        "FAMILY: 0x{:08X} (expected: 0x{:08X})",
        view.family, FAMILY_MAGIC
    );
    println!("ZEROS: 0x{:02X} ({})", view.zeros, view.leading_zeros());
    println!("CTRLCODE: 0x{:02X} ({})", view.ctrlcode, view.control_code());
    println!(
        "Time: {:02}:{:02}:{:02} (H:0x{:02X} M:0x{:02X} S:0x{:02X})",
        view.hour, view.minute, view.second, view.hour, view.minute, view.second
    );

    let validation = view.validate();
    if !validation.hdr1_ok {
        println!("WARNING: HDR1 mismatch!");
    }
    if !validation.hdr2_ok {
        println!("WARNING: HDR2 mismatch!");
    }
    if !validation.family_ok {
        println!("WARNING: FAMILY mismatch!");
    }
    if validation.is_valid() {
        println!("Frame format is correct");
    } else if !validation.hdr1_ok && !validation.hdr2_ok && !validation.family_ok {
        // Every magic off at once usually means ciphered traffic was
        // decoded clear; see --decipher.
        println!("All magics mismatch; frame may be ciphered traffic");
    }
}
