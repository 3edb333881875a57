use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};

use custom_error::custom_error;

use crate::protocol::message::{Packet, PACKET_SIZE};
use crate::protocol::peers::PeerTable;

pub const DEFAULT_RELAY_PORT: u16 = 50001;

const RECEIVE_BUFFER_SIZE: usize = 512;

custom_error! {pub TransportError
    BindFailed {address: String, description: String} = "Failed to bind {address}: {description}",
    SendFailed {target: String, description: String} = "Failed to send to {target}: {description}",
    ReceiveFailed {description: String} = "Failed to receive: {description}",
    InvalidPacket {origin: String, description: String} = "Invalid packet from {origin}: {description}",
    Closed = "Socket is closed",
}

pub trait Transport {

    fn send(&mut self, packet: &Packet) -> Result<(), TransportError>;

    fn recv(&mut self) -> Result<Option<Packet>, TransportError>;

    fn close(&mut self);
}

pub struct ClientSocket {
    socket: Option<UdpSocket>,
    relay: Option<SocketAddr>,
    username: String,
}

impl ClientSocket {

    pub fn bind(port: u16, username: &str) -> Result<Self, TransportError> {
        let socket = bind_non_blocking(SocketAddr::from(([0, 0, 0, 0], port)))?;
        info!("client ({}) socket is bound to {:?}", username, socket.local_addr().ok());

        Ok(ClientSocket {
            socket: Some(socket),
            relay: None,
            username: username.to_string(),
        })
    }

    pub fn join(&mut self, relay: SocketAddr) -> Result<(), TransportError> {
        info!("client ({}) will attempt to join relay at {}...", self.username, relay);
        self.relay = Some(relay);
        self.send(&Packet::Handshake)?;
        info!("client ({}) joined {}", self.username, relay);
        Ok(())
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|socket| socket.local_addr().ok())
    }
}

impl Transport for ClientSocket {

    fn send(&mut self, packet: &Packet) -> Result<(), TransportError> {
        let socket = self.socket.as_ref().ok_or(TransportError::Closed)?;
        let relay = self.relay.ok_or_else(|| TransportError::SendFailed {
            target: "relay".to_string(),
            description: "client has not joined a relay yet".to_string(),
        })?;

        send_packet(socket, packet, relay)?;
        debug!("client ({}) sent {:?}", self.username, packet);
        Ok(())
    }

    fn recv(&mut self) -> Result<Option<Packet>, TransportError> {
        let socket = self.socket.as_ref().ok_or(TransportError::Closed)?;

        match recv_datagram(socket)? {
            Some((data, source)) => decode_from(&data, source).map(Some),
            None => Ok(None),
        }
    }

    fn close(&mut self) {
        if self.socket.take().is_some() {
            info!("client ({}) socket is closed", self.username);
        }
    }
}

pub struct RelaySocket {
    socket: Option<UdpSocket>,
    peers: PeerTable,
    username: String,
}

impl RelaySocket {

    pub fn bind(port: u16, username: &str) -> Result<Self, TransportError> {
        let socket = bind_non_blocking(SocketAddr::from(([0, 0, 0, 0], port)))?;
        info!("relay ({}) socket is bound to {:?}", username, socket.local_addr().ok());

        Ok(RelaySocket {
            socket: Some(socket),
            peers: PeerTable::new(),
            username: username.to_string(),
        })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|socket| socket.local_addr().ok())
    }

    pub fn peers(&self) -> &PeerTable {
        &self.peers
    }

    fn relay_from(&mut self, data: &[u8], source: SocketAddr) -> Result<Packet, TransportError> {
        let socket = self.socket.as_ref().ok_or(TransportError::Closed)?;

        if self.peers.register(source) {
            info!("first time joiner: {} ({} peers now)", source, self.peers.len());
            // informational only, nothing waits for this
            if let Err(err) = send_packet(socket, &Packet::Handshake, source) {
                warn!("could not greet new peer {}: {}", source, err);
            }
        }

        let packet = decode_from(data, source)?;

        for target in self.peers.others(&source) {
            if let Err(err) = socket.send_to(data, target) {
                warn!("relay ({}) could not forward to {}: {}", self.username, target, err);
            }
        }

        if packet == Packet::Quit {
            self.peers.remove(&source);
            info!("peer {} has left ({} peers now)", source, self.peers.len());
        }

        Ok(packet)
    }
}

impl Transport for RelaySocket {

    // every peer is attempted, the first failure is returned
    fn send(&mut self, packet: &Packet) -> Result<(), TransportError> {
        let socket = self.socket.as_ref().ok_or(TransportError::Closed)?;
        let mut result = Ok(());

        for target in self.peers.addresses() {
            if let Err(err) = send_packet(socket, packet, target) {
                warn!("relay ({}) could not send to {}: {}", self.username, target, err);
                if result.is_ok() {
                    result = Err(err);
                }
            }
        }

        result
    }

    fn recv(&mut self) -> Result<Option<Packet>, TransportError> {
        let socket = self.socket.as_ref().ok_or(TransportError::Closed)?;

        match recv_datagram(socket)? {
            Some((data, source)) => self.relay_from(&data, source).map(Some),
            None => Ok(None),
        }
    }

    fn close(&mut self) {
        if self.socket.take().is_some() {
            info!("relay ({}) socket is closed", self.username);
        }
    }
}

fn bind_non_blocking(address: SocketAddr) -> Result<UdpSocket, TransportError> {
    let socket = UdpSocket::bind(address).map_err(|err| TransportError::BindFailed {
        address: address.to_string(),
        description: err.to_string(),
    })?;

    socket.set_nonblocking(true).map_err(|err| TransportError::BindFailed {
        address: address.to_string(),
        description: format!("failed to make socket non-blocking: {}", err),
    })?;

    Ok(socket)
}

fn send_packet(socket: &UdpSocket, packet: &Packet, target: SocketAddr) -> Result<(), TransportError> {
    let data = packet.encode().map_err(|err| TransportError::SendFailed {
        target: target.to_string(),
        description: err.to_string(),
    })?;

    match socket.send_to(&data, target) {
        Ok(sent) if sent == data.len() => Ok(()),
        Ok(sent) => Err(TransportError::SendFailed {
            target: target.to_string(),
            description: format!("only {} of {} bytes were sent", sent, data.len()),
        }),
        Err(err) => Err(TransportError::SendFailed {
            target: target.to_string(),
            description: err.to_string(),
        }),
    }
}

fn recv_datagram(socket: &UdpSocket) -> Result<Option<(Vec<u8>, SocketAddr)>, TransportError> {
    let mut buffer = [0; RECEIVE_BUFFER_SIZE];

    match socket.recv_from(&mut buffer) {
        Ok((total_read, source)) => Ok(Some((buffer[..total_read].to_vec(), source))),
        Err(err) if err.kind() == ErrorKind::WouldBlock => Ok(None),
        Err(err) => Err(TransportError::ReceiveFailed {
            description: err.to_string(),
        }),
    }
}

fn decode_from(data: &[u8], source: SocketAddr) -> Result<Packet, TransportError> {
    if data.len() != PACKET_SIZE {
        return Err(TransportError::InvalidPacket {
            origin: source.to_string(),
            description: format!("datagram of {} bytes", data.len()),
        });
    }

    Packet::decode(data).map_err(|err| TransportError::InvalidPacket {
        origin: source.to_string(),
        description: err.to_string(),
    })
}
