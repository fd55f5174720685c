use std::net::Ipv4Addr;

use crate::reason::InvalidReason;

/// Validate `value` as IPv4 CIDR notation (`address/prefix`, prefix in
/// 0-32). IPv6 CIDR is out of scope. The address error and the prefix
/// error stay distinct so the UI can name the broken half.
pub(crate) fn check(value: &str) -> Result<String, InvalidReason> {
    if value.is_empty() {
        return Err(InvalidReason::Empty);
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InvalidReason::Whitespace);
    }
    if value.matches('/').count() != 1 {
        return Err(InvalidReason::CidrShape);
    }

    let (addr, prefix) = value.split_once('/').ok_or(InvalidReason::CidrShape)?;
    let ip: Ipv4Addr = addr.parse().map_err(|_| InvalidReason::CidrAddress)?;
    let bits: u8 = prefix.parse().map_err(|_| InvalidReason::CidrPrefix)?;
    if bits > 32 {
        return Err(InvalidReason::CidrPrefix);
    }

    Ok(format!("{ip}/{bits}"))
}
