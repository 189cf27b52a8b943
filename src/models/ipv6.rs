//! IPv6 prefix support.
//!
//! Azure dual-stack VNets carry IPv6 prefixes next to the IPv4 ones. Only
//! containment is needed for them, so [`Ipv6`] is smaller than [`super::Ipv4`].

use super::ipv4::parse_prefix_len;
use std::error::Error;
use std::net::Ipv6Addr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Host counts above this are not meaningful for a subnet report.
pub const MAX_REPORTED_V6_HOSTS: u64 = 65534;

/// IPv6 address with prefix length.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv6 {
    /// The IPv6 address as written (host bits may be set).
    pub addr: Ipv6Addr,
    /// Prefix length (0-128).
    pub mask: u8,
}

impl Ipv6 {
    /// Create a new [`Ipv6`] from a prefix string (e.g., "fd00:10::/64").
    ///
    /// A bare address without `/len` is a single host (/128).
    pub fn new(addr_cidr: &str) -> Result<Ipv6, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = match addr_cidr.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (addr_cidr, None),
        };
        let addr: Ipv6Addr = addr
            .parse()
            .map_err(|_| format!("Invalid IPv6 address {addr}"))?;
        let mask: u8 = match mask {
            Some(mask) => parse_prefix_len(mask)?,
            None => MAX_LENGTH_V6,
        };
        if mask > MAX_LENGTH_V6 {
            return Err("Prefix length is too long".into());
        }
        Ok(Ipv6 { addr, mask })
    }

    /// First address of the prefix.
    pub fn start(&self) -> u128 {
        u128::from(self.addr) & self.netmask()
    }

    /// True when every address of `self` lies inside `other`.
    pub fn is_in_subnet(&self, other: &Ipv6) -> bool {
        if self.mask < other.mask {
            return false;
        }
        u128::from(self.addr) & other.netmask() == other.start()
    }

    /// Address count capped at [`MAX_REPORTED_V6_HOSTS`].
    pub fn hosts(&self) -> u64 {
        let host_bits = u32::from(MAX_LENGTH_V6 - self.mask);
        1u64.checked_shl(host_bits)
            .map_or(MAX_REPORTED_V6_HOSTS, |count| count.min(MAX_REPORTED_V6_HOSTS))
    }

    fn netmask(&self) -> u128 {
        u128::MAX
            .checked_shl(u32::from(MAX_LENGTH_V6 - self.mask))
            .unwrap_or(0)
    }
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
