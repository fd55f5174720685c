use std::net::{Ipv4Addr, Ipv6Addr};

use crate::reason::InvalidReason;

/// Validate `value` as an IPv4 literal: exactly 4 dot-separated octets in
/// 0-255. `std` parsing already rejects leading zeros and alternate
/// notations (octal, hex, bare integers).
pub(crate) fn check_v4(value: &str) -> Result<String, InvalidReason> {
    if value.is_empty() {
        return Err(InvalidReason::Empty);
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InvalidReason::Whitespace);
    }
    value
        .parse::<Ipv4Addr>()
        .map(|ip| ip.to_string())
        .map_err(|_| InvalidReason::BadIpv4)
}

/// Validate `value` as an IPv6 literal (compressed or expanded); the
/// normalized form is the canonical compressed rendering.
pub(crate) fn check_v6(value: &str) -> Result<String, InvalidReason> {
    if value.is_empty() {
        return Err(InvalidReason::Empty);
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InvalidReason::Whitespace);
    }
    value
        .to_lowercase()
        .parse::<Ipv6Addr>()
        .map(|ip| ip.to_string())
        .map_err(|_| InvalidReason::BadIpv6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v4_accepts_exact_octets() {
        assert_eq!(check_v4("192.168.1.1").unwrap(), "192.168.1.1");
        assert_eq!(check_v4("0.0.0.0").unwrap(), "0.0.0.0");
        assert_eq!(check_v4("255.255.255.255").unwrap(), "255.255.255.255");
    }

    #[test]
    fn v4_rejects_out_of_range_and_odd_shapes() {
        assert_eq!(check_v4("256.1.1.1"), Err(InvalidReason::BadIpv4));
        assert_eq!(check_v4("1.2.3"), Err(InvalidReason::BadIpv4));
        assert_eq!(check_v4("1.2.3.4.5"), Err(InvalidReason::BadIpv4));
        assert_eq!(check_v4("127.000.000.001"), Err(InvalidReason::BadIpv4));
        assert_eq!(check_v4("2130706433"), Err(InvalidReason::BadIpv4));
        assert_eq!(check_v4(""), Err(InvalidReason::Empty));
        assert_eq!(check_v4("1.2. 3.4"), Err(InvalidReason::Whitespace));
    }

    #[test]
    fn v6_accepts_compressed_and_expanded() {
        assert_eq!(check_v6("::1").unwrap(), "::1");
        assert_eq!(check_v6("0:0:0:0:0:0:0:1").unwrap(), "::1");
        assert_eq!(check_v6("2001:DB8::1").unwrap(), "2001:db8::1");
    }

    #[test]
    fn v6_rejects_malformed_literals() {
        assert_eq!(check_v6("2001:::1"), Err(InvalidReason::BadIpv6));
        assert_eq!(check_v6("192.168.1.1"), Err(InvalidReason::BadIpv6));
        assert_eq!(check_v6("gggg::1"), Err(InvalidReason::BadIpv6));
    }
}
