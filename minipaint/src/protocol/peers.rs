use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Instant;

#[derive(Clone, Copy, Debug)]
pub struct PeerInfo {
    pub first_seen: Instant,
    pub last_seen: Instant,
    pub packets_received: u64,
}

pub struct PeerTable {
    peers: HashMap<SocketAddr, PeerInfo>,
}

impl PeerTable {

    pub fn new() -> Self {
        PeerTable {
            peers: HashMap::new(),
        }
    }

    pub fn register(&mut self, address: SocketAddr) -> bool {
        let now = Instant::now();

        match self.peers.get_mut(&address) {
            Some(info) => {
                info.last_seen = now;
                info.packets_received += 1;
                false
            },
            None => {
                self.peers.insert(address, PeerInfo {
                    first_seen: now,
                    last_seen: now,
                    packets_received: 1,
                });
                true
            }
        }
    }

    pub fn remove(&mut self, address: &SocketAddr) -> Option<PeerInfo> {
        self.peers.remove(address)
    }

    pub fn contains(&self, address: &SocketAddr) -> bool {
        self.peers.contains_key(address)
    }

    pub fn get(&self, address: &SocketAddr) -> Option<&PeerInfo> {
        self.peers.get(address)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn addresses(&self) -> Vec<SocketAddr> {
        self.peers.keys().cloned().collect()
    }

    pub fn others(&self, origin: &SocketAddr) -> Vec<SocketAddr> {
        self.peers.keys()
            .filter(|address| *address != origin)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(port: u16) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], port))
    }

    #[test]
    fn test_register_once() {
        let mut peers = PeerTable::new();

        assert!(peers.register(address(55000)));
        assert!(!peers.register(address(55000)));
        assert!(peers.register(address(55001)));

        assert_eq!(peers.len(), 2);
        assert_eq!(peers.get(&address(55000)).map(|info| info.packets_received), Some(2));
    }

    #[test]
    fn test_same_port_different_host_are_different_peers() {
        let mut peers = PeerTable::new();

        peers.register(SocketAddr::from(([10, 0, 0, 1], 55000)));
        peers.register(SocketAddr::from(([10, 0, 0, 2], 55000)));

        assert_eq!(peers.len(), 2);
    }

    #[test]
    fn test_others_excludes_origin() {
        let mut peers = PeerTable::new();
        peers.register(address(1));
        peers.register(address(2));
        peers.register(address(3));

        let mut others = peers.others(&address(2));
        others.sort();

        assert_eq!(others, vec![address(1), address(3)]);
    }

    #[test]
    fn test_remove() {
        let mut peers = PeerTable::new();
        peers.register(address(1));

        assert!(peers.remove(&address(1)).is_some());
        assert!(!peers.contains(&address(1)));
        assert!(peers.is_empty());
    }
}
