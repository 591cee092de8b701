//! Static IPv4 addressing of the device.

use core::fmt;
use core::net::Ipv4Addr;

use crate::config::CONFIG;
use crate::device;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    NonContiguousMask,
    InvalidGateway,
    AddressOutsideSubnet,
    AddressIsNetwork,
    AddressIsBroadcast,
    AddressIsGateway,
}

impl Error {
    pub const fn message(self) -> &'static str {
        match self {
            Error::NonContiguousMask => "subnet mask is not contiguous",
            Error::InvalidGateway => "gateway is the network or broadcast address",
            Error::AddressOutsideSubnet => "device address is outside the gateway subnet",
            Error::AddressIsNetwork => "device address is the network address",
            Error::AddressIsBroadcast => "device address is the broadcast address",
            Error::AddressIsGateway => "device address is the gateway address",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

const fn bits(addr: Ipv4Addr) -> u32 {
    u32::from_be_bytes(addr.octets())
}

const fn from_bits(bits: u32) -> Ipv4Addr {
    let [a, b, c, d] = bits.to_be_bytes();
    Ipv4Addr::new(a, b, c, d)
}

/// CIDR prefix length of `mask`, `None` when the mask has holes
pub const fn prefix_len(mask: Ipv4Addr) -> Option<u8> {
    let m = bits(mask);
    let ones = m.leading_ones();
    if m.count_ones() == ones {
        Some(ones as u8)
    } else {
        None
    }
}

pub const fn same_subnet(a: Ipv4Addr, b: Ipv4Addr, mask: Ipv4Addr) -> bool {
    let m = bits(mask);
    bits(a) & m == bits(b) & m
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticIpConfig {
    pub address: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub subnet: Ipv4Addr,
}

impl StaticIpConfig {
    pub const fn new(address: Ipv4Addr, gateway: Ipv4Addr, subnet: Ipv4Addr) -> Self {
        Self {
            address,
            gateway,
            subnet,
        }
    }

    pub const fn validate(&self) -> Result<(), Error> {
        if prefix_len(self.subnet).is_none() {
            return Err(Error::NonContiguousMask);
        }
        if !same_subnet(self.address, self.gateway, self.subnet) {
            return Err(Error::AddressOutsideSubnet);
        }

        let address = bits(self.address);
        if address == bits(self.network()) {
            return Err(Error::AddressIsNetwork);
        }
        if address == bits(self.broadcast()) {
            return Err(Error::AddressIsBroadcast);
        }
        if address == bits(self.gateway) {
            return Err(Error::AddressIsGateway);
        }

        let gateway = bits(self.gateway);
        if gateway == bits(self.network()) || gateway == bits(self.broadcast()) {
            return Err(Error::InvalidGateway);
        }

        Ok(())
    }

    pub const fn prefix_len(&self) -> Option<u8> {
        prefix_len(self.subnet)
    }

    pub const fn network(&self) -> Ipv4Addr {
        from_bits(bits(self.address) & bits(self.subnet))
    }

    pub const fn broadcast(&self) -> Ipv4Addr {
        from_bits(bits(self.address) | !bits(self.subnet))
    }
}

/// Selected device address on the configured network
pub const STATIC_IP: StaticIpConfig = StaticIpConfig::new(
    device::IP_ADDRESS,
    CONFIG.network.gateway,
    CONFIG.network.subnet,
);

const _: () = {
    if let Err(e) = STATIC_IP.validate() {
        panic!("{}", e.message());
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    const GATEWAY: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 1);
    const MASK_24: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

    #[test]
    fn prefix_len_of_common_masks() {
        assert_eq!(prefix_len(MASK_24), Some(24));
        assert_eq!(prefix_len(Ipv4Addr::new(255, 255, 252, 0)), Some(22));
        assert_eq!(prefix_len(Ipv4Addr::new(255, 255, 255, 255)), Some(32));
        assert_eq!(prefix_len(Ipv4Addr::UNSPECIFIED), Some(0));
    }

    #[test]
    fn prefix_len_rejects_holes() {
        assert_eq!(prefix_len(Ipv4Addr::new(255, 0, 255, 0)), None);
        assert_eq!(prefix_len(Ipv4Addr::new(0, 0, 0, 255)), None);
    }

    #[test]
    fn subnet_membership() {
        let a = Ipv4Addr::new(192, 168, 1, 50);
        assert!(same_subnet(a, GATEWAY, MASK_24));
        assert!(!same_subnet(a, Ipv4Addr::new(192, 168, 2, 1), MASK_24));
        assert!(same_subnet(
            a,
            Ipv4Addr::new(192, 168, 2, 1),
            Ipv4Addr::new(255, 255, 0, 0)
        ));
    }

    #[test]
    fn network_and_broadcast() {
        let cfg = StaticIpConfig::new(Ipv4Addr::new(192, 168, 1, 50), GATEWAY, MASK_24);
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.network(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cfg.broadcast(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(cfg.prefix_len(), Some(24));
    }

    #[test]
    fn validate_rejects_bad_assignments() {
        let check = |addr: Ipv4Addr, gw: Ipv4Addr, mask: Ipv4Addr| {
            StaticIpConfig::new(addr, gw, mask).validate()
        };

        assert_eq!(
            check(Ipv4Addr::new(192, 168, 1, 50), GATEWAY, Ipv4Addr::new(255, 0, 255, 0)),
            Err(Error::NonContiguousMask)
        );
        assert_eq!(
            check(Ipv4Addr::new(192, 168, 2, 50), GATEWAY, MASK_24),
            Err(Error::AddressOutsideSubnet)
        );
        assert_eq!(
            check(Ipv4Addr::new(192, 168, 1, 0), GATEWAY, MASK_24),
            Err(Error::AddressIsNetwork)
        );
        assert_eq!(
            check(Ipv4Addr::new(192, 168, 1, 255), GATEWAY, MASK_24),
            Err(Error::AddressIsBroadcast)
        );
        assert_eq!(
            check(GATEWAY, GATEWAY, MASK_24),
            Err(Error::AddressIsGateway)
        );
        assert_eq!(
            check(
                Ipv4Addr::new(192, 168, 1, 50),
                Ipv4Addr::new(192, 168, 1, 255),
                MASK_24
            ),
            Err(Error::InvalidGateway)
        );
    }

    #[test]
    fn selected_device_fits_configured_network() {
        assert_eq!(STATIC_IP.address, device::IP_ADDRESS);
        assert_eq!(STATIC_IP.gateway, CONFIG.network.gateway);
        assert_eq!(STATIC_IP.validate(), Ok(()));
    }
}
