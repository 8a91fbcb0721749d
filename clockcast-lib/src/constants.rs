// Wire constants for the clock broadcast protocol

use std::net::Ipv4Addr;
use std::time::Duration;

/// Size of an encoded time frame (48 bytes)
pub const FRAME_SIZE: usize = 48;

/// First header magic carried by every conformant frame
pub const HDR1_MAGIC: u32 = 0x2381_D765;

/// Second header magic
pub const HDR2_MAGIC: u32 = 0x10B3_2FE1;

/// Product family identifier
pub const FAMILY_MAGIC: u32 = 0x0000_0080;

/// Control-source identifier stamped into outgoing frames
pub const DEVICE_ID: u16 = 0x1234;

/// IPv4 multicast group the clock units listen on
pub const MULTICAST_GROUP: Ipv4Addr = Ipv4Addr::new(239, 252, 0, 0);

/// UDP port of the multicast group
pub const MULTICAST_PORT: u16 = 6168;

/// Interval between live time frames
pub const BROADCAST_INTERVAL: Duration = Duration::from_secs(1);
