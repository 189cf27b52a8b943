//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 addresses with subnet masks,
//! along with utility functions for subnet calculations.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of addresses Azure reserves in every IPv4 subnet
/// (network, default gateway, 2x DNS, broadcast).
pub const AZURE_RESERVED_IPS: u64 = 5;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use azure_ipam::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Calculate the number of usable host addresses in an Azure subnet.
///
/// Azure reserves 5 IP addresses per subnet (network, broadcast, gateway, and 2 DNS),
/// so /30 and smaller report 0.
pub fn num_az_hosts(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let total = 1u64 << (MAX_LENGTH - len);
        Ok(total.saturating_sub(AZURE_RESERVED_IPS))
    }
}

/// Parse the part after `/`. Only ASCII digits are accepted, so `+24` is rejected.
pub(super) fn parse_prefix_len(mask: &str) -> Result<u8, Box<dyn Error>> {
    if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid subnet mask {mask}").into());
    }
    mask.parse()
        .map_err(|_| format!("Invalid subnet mask {mask}").into())
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address as written (host bits may be set).
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// A bare address without `/len` is a single host (/32).
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = match addr_cidr.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (addr_cidr, None),
        };
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        let mask: u8 = match mask {
            Some(mask) => parse_prefix_len(mask)?,
            None => MAX_LENGTH,
        };
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.start())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.end())
    }

    /// First address of the range as an integer, most-significant octet first.
    pub fn start(&self) -> u32 {
        u32::from(self.addr) & self.netmask()
    }

    /// Last address of the range as an integer.
    pub fn end(&self) -> u32 {
        self.start() | !self.netmask()
    }

    /// True when every address of `self` lies inside `other`.
    pub fn is_in_subnet(&self, other: &Ipv4) -> bool {
        if self.mask < other.mask {
            return false;
        }
        u32::from(self.addr) & other.netmask() == other.start()
    }

    /// Usable addresses after the Azure reservation.
    pub fn az_hosts(&self) -> u64 {
        num_az_hosts(self.mask).unwrap_or(0)
    }

    fn netmask(&self) -> u32 {
        // mask is validated to 0..=32 on construction
        get_cidr_mask(self.mask).unwrap_or(u32::MAX)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_num_az_hosts() {
        assert_eq!(num_az_hosts(0).unwrap(), 4294967291);
        assert_eq!(num_az_hosts(8).unwrap(), 16777211);
        assert_eq!(num_az_hosts(16).unwrap(), 65531);
        assert_eq!(num_az_hosts(24).unwrap(), 251);
        assert_eq!(num_az_hosts(25).unwrap(), 123);
        assert_eq!(num_az_hosts(26).unwrap(), 59);
        assert_eq!(num_az_hosts(27).unwrap(), 27);
        assert_eq!(num_az_hosts(28).unwrap(), 11);
        assert_eq!(num_az_hosts(29).unwrap(), 3);
        assert_eq!(num_az_hosts(30).unwrap(), 0);
        assert_eq!(num_az_hosts(32).unwrap(), 0);
        assert!(num_az_hosts(33).is_err());
    }

    #[test]
    fn test_new_rejects_garbage() {
        assert!(Ipv4::new("10.0.0.0/33").is_err());
        assert!(Ipv4::new("10.0.0/24").is_err());
        assert!(Ipv4::new("10.0.0.0/abc").is_err());
        assert!(Ipv4::new("10.0.0.0/+24").is_err());
        assert!(Ipv4::new("10.0.0.0/").is_err());
        assert!(Ipv4::new("10.0.0.0/ 24").is_err());
        assert!(Ipv4::new("").is_err());
        assert_eq!(Ipv4::new("10.1.2.3").unwrap().mask, 32);
        assert_eq!(Ipv4::new(" 10.1.2.0/24 ").unwrap().to_string(), "10.1.2.0/24");
    }

    #[test]
    fn test_lo_hi_ignore_host_bits() {
        let ip = Ipv4::new("10.0.10.77/24").unwrap();
        assert_eq!(ip.lo(), Ipv4Addr::new(10, 0, 10, 0));
        assert_eq!(ip.hi(), Ipv4Addr::new(10, 0, 10, 255));

        let all = Ipv4::new("0.0.0.0/0").unwrap();
        assert_eq!(all.start(), 0);
        assert_eq!(all.end(), u32::MAX);
    }

    #[test]
    fn test_is_in_subnet() {
        let vnet = Ipv4::new("10.0.0.0/16").unwrap();
        let subnet = Ipv4::new("10.0.10.0/24").unwrap();
        let other = Ipv4::new("10.1.0.0/24").unwrap();

        assert!(subnet.is_in_subnet(&vnet));
        assert!(!vnet.is_in_subnet(&subnet));
        assert!(!other.is_in_subnet(&vnet));
        assert!(vnet.is_in_subnet(&vnet));
        assert!(vnet.is_in_subnet(&Ipv4::new("0.0.0.0/0").unwrap()));
    }

    #[test]
    fn test_eq_keeps_host_bits() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();

        assert_eq!(ip1, Ipv4::new("10.0.0.1/24").unwrap());
        assert_ne!(ip1, ip2);
        assert_eq!(ip1.start(), ip2.start());
    }
}
