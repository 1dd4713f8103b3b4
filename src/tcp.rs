use crate::err::{AppliesTo, IoErrorExt};
use crate::future::first_ok;
use std::io;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};

pub async fn bind(addrs: &[SocketAddr]) -> Result<TcpListener, io::Error> {
    first_ok(addrs.iter().map(|addr| TcpListener::bind(*addr)), || {
        io::Error::new(io::ErrorKind::AddrNotAvailable, "No addresses to bind to")
    })
    .await
}

pub async fn accept(listener: &mut TcpListener) -> Result<(TcpStream, SocketAddr), io::Error> {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                stream.set_nodelay(true)?;
                return Ok((stream, addr));
            }
            Err(e) => match e.applies_to() {
                AppliesTo::Connection => log::debug!("Aborted connection dropped: {}", e),
                AppliesTo::Listener => return Err(e),
            },
        }
    }
}
