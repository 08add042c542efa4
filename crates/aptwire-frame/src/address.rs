//! Well-known bus addresses.
//!
//! Addresses are 7 bits wide; the eighth bit of the destination byte is the
//! long-form flag and never part of an address.

/// The controlling PC.
pub const HOST: u8 = 0x01;

/// Motherboard of a rack-based controller.
pub const RACK_CONTROLLER: u8 = 0x11;

/// First bay of a rack-based controller.
pub const BAY_0: u8 = 0x21;

/// Last bay of a rack-based controller.
pub const BAY_9: u8 = 0x2A;

/// Stand-alone USB controllers (T-Cube, K-Cube).
pub const GENERIC_USB: u8 = 0x50;

/// Largest valid address.
pub const MAX_ADDRESS: u8 = 0x7F;

/// Address of rack bay `n` (0-9).
pub fn bay(n: u8) -> Option<u8> {
    if n <= BAY_9 - BAY_0 {
        Some(BAY_0 + n)
    } else {
        None
    }
}

/// Returns a human-readable name for a bus address.
pub fn address_name(address: u8) -> &'static str {
    match address {
        HOST => "HOST",
        RACK_CONTROLLER => "RACK_CONTROLLER",
        BAY_0..=BAY_9 => "BAY",
        GENERIC_USB => "GENERIC_USB",
        0x80..=0xFF => "INVALID",
        _ => "OTHER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bay_addresses() {
        assert_eq!(bay(0), Some(0x21));
        assert_eq!(bay(9), Some(0x2A));
        assert_eq!(bay(10), None);
    }

    #[test]
    fn names() {
        assert_eq!(address_name(0x01), "HOST");
        assert_eq!(address_name(0x25), "BAY");
        assert_eq!(address_name(0x50), "GENERIC_USB");
        assert_eq!(address_name(0x90), "INVALID");
        assert_eq!(address_name(0x33), "OTHER");
    }
}
