//! Multicast socket plumbing for the sender and listener binaries.

use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tracing::debug;

use crate::constants::{MULTICAST_GROUP, MULTICAST_PORT};

/// Create a socket connected to the multicast group for sending.
///
/// The sender never receives, so an ephemeral local port is enough and
/// `send` can be used without re-stating the destination.
pub async fn sender_socket() -> io::Result<UdpSocket> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    socket.connect((MULTICAST_GROUP, MULTICAST_PORT)).await?;
    debug!("sender socket bound to {}", socket.local_addr()?);
    Ok(socket)
}

/// Bind to the group port and join the multicast group for receiving.
///
/// `SO_REUSEADDR` is set so several listeners can share the port on one
/// host. Must be called from within a tokio runtime.
pub fn listener_socket() -> io::Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;

    let bind_addr = SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, MULTICAST_PORT);
    socket.bind(&SocketAddr::V4(bind_addr).into())?;
    socket.join_multicast_v4(&MULTICAST_GROUP, &Ipv4Addr::UNSPECIFIED)?;

    UdpSocket::from_std(socket.into())
}
