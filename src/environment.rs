//! Development-system detection
//!
//! Tells whether the tool runs on one of the configured development hosts, in
//! which case the CLI logs it at startup. The host list comes from
//! configuration and the address lookup sits behind [`HostProbe`], so tests
//! never depend on the network setup of the machine running them.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Source of this host's address
pub trait HostProbe {
    fn host_address(&self) -> Option<IpAddr>;
}

/// Finds the address of the interface used for outbound traffic
///
/// Connecting a UDP socket only selects a route; no packet is sent.
#[derive(Debug, Clone, Copy)]
pub struct LocalAddressProbe {
    route_target: IpAddr,
}

impl LocalAddressProbe {
    #[must_use]
    pub fn new(route_target: IpAddr) -> Self {
        Self { route_target }
    }
}

impl Default for LocalAddressProbe {
    fn default() -> Self {
        // TEST-NET-1, never routed to a real host
        Self::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)))
    }
}

impl HostProbe for LocalAddressProbe {
    fn host_address(&self) -> Option<IpAddr> {
        let bind_addr = match self.route_target {
            IpAddr::V4(_) => "0.0.0.0:0",
            IpAddr::V6(_) => "[::]:0",
        };

        let socket = UdpSocket::bind(bind_addr).ok()?;
        socket.connect((self.route_target, 9)).ok()?;
        let addr = socket.local_addr().ok()?.ip();

        (!addr.is_unspecified()).then_some(addr)
    }
}

/// Always reports the same address
#[derive(Debug, Clone, Copy)]
pub struct FixedAddressProbe(pub Option<IpAddr>);

impl HostProbe for FixedAddressProbe {
    fn host_address(&self) -> Option<IpAddr> {
        self.0
    }
}

/// True when this host's address is one of `dev_hosts`
pub fn is_development_system(probe: &dyn HostProbe, dev_hosts: &[IpAddr]) -> bool {
    if dev_hosts.is_empty() {
        return false;
    }

    probe
        .host_address()
        .is_some_and(|addr| dev_hosts.contains(&addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_matching_host() {
        let probe = FixedAddressProbe(Some(addr("10.1.2.3")));
        assert!(is_development_system(&probe, &[addr("10.9.9.9"), addr("10.1.2.3")]));
    }

    #[test]
    fn test_non_matching_host() {
        let probe = FixedAddressProbe(Some(addr("10.1.2.3")));
        assert!(!is_development_system(&probe, &[addr("10.1.2.4")]));
    }

    #[test]
    fn test_unknown_address_is_not_development() {
        let probe = FixedAddressProbe(None);
        assert!(!is_development_system(&probe, &[addr("10.1.2.3")]));
    }

    #[test]
    fn test_empty_host_list_skips_probe() {
        struct PanickingProbe;
        impl HostProbe for PanickingProbe {
            fn host_address(&self) -> Option<IpAddr> {
                panic!("probe should not be consulted");
            }
        }

        assert!(!is_development_system(&PanickingProbe, &[]));
    }

    #[test]
    fn test_loopback_route() {
        let probe = LocalAddressProbe::new(addr("127.0.0.1"));
        if let Some(local) = probe.host_address() {
            assert!(local.is_loopback());
        }
    }
}
