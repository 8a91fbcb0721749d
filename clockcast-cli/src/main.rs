use clockcast_lib::TimePacket;
use clockcast_lib::cipher::{self, BROADCAST_KEY};
use clockcast_lib::constants::DEVICE_ID;
use std::error::Error;

/// Conformance smoke tool: build one live frame, show it clear and ciphered.
fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let packet = TimePacket::from_wall_clock(DEVICE_ID);
    let frame = packet.encode();

    println!("Frame size: {} bytes", frame.len());
    println!("Frame hex: {}", hex::encode(frame));
    println!(
        "Time: {:02}:{:02}:{:02}",
        packet.hour, packet.minute, packet.second
    );

    let mut ciphered = frame;
    cipher::transform(&mut ciphered, &BROADCAST_KEY);
    println!("Ciphered hex: {}", hex::encode(ciphered));

    Ok(())
}
