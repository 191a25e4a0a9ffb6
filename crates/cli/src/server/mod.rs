use keystone_dns_infrastructure::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{error, info};

pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = Arc::new(create_udp_socket(socket_addr)?);
    let handler = Arc::new(handler);

    info!(bind_address = %socket_addr, "DNS server listening");

    let mut recv_buf = [0u8; 4096];
    loop {
        let (n, peer) = match socket.recv_from(&mut recv_buf).await {
            Ok(recv) => recv,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            if let Some(response) = handler.handle(&query, peer).await {
                if let Err(e) = socket.send_to(&response, peer).await {
                    error!(peer = %peer, error = %e, "UDP send error");
                }
            }
        });
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
