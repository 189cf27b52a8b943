//! Address-family aware CIDR value.

use super::{Ipv4, Ipv6};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A parsed address range of either family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cidr {
    V4(Ipv4),
    V6(Ipv6),
}

/// True when the notation is IPv6 (contains a `:`).
pub fn is_ipv6_notation(cidr: &str) -> bool {
    cidr.contains(':')
}

impl Cidr {
    /// Parse a CIDR string, picking the family from its notation.
    pub fn new(cidr: &str) -> Result<Cidr, Box<dyn Error>> {
        if is_ipv6_notation(cidr) {
            Ok(Cidr::V6(Ipv6::new(cidr)?))
        } else {
            Ok(Cidr::V4(Ipv4::new(cidr)?))
        }
    }

    /// Usable host addresses for an Azure subnet of this size.
    pub fn usable_addresses(&self) -> u64 {
        match self {
            Cidr::V4(ip) => ip.az_hosts(),
            Cidr::V6(ip) => ip.hosts(),
        }
    }
}

impl FromStr for Cidr {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cidr::V4(ip) => write!(f, "{ip}"),
            Cidr::V6(ip) => write!(f, "{ip}"),
        }
    }
}
