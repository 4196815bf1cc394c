//! Bluetooth device address

use std::fmt;

/// Bluetooth device address (BD_ADDR), as reported by the radio
///
/// Byte 0 is the most significant octet, which is also the order the
/// Bluedroid stack hands it out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BtAddr([u8; 6]);

impl BtAddr {
    pub const LEN: usize = 6;

    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
}

/// `3C:71:BF:A2:9C:4E`
impl fmt::Display for BtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `^[0-9A-F]{2}(:[0-9A-F]{2}){5}$`
    fn is_console_format(s: &str) -> bool {
        let parts: Vec<&str> = s.split(':').collect();
        parts.len() == 6
            && parts.iter().all(|p| {
                p.len() == 2
                    && p.chars()
                        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
            })
    }

    #[test]
    fn display_uppercase_colon_separated() {
        let addr = BtAddr::new([0x3C, 0x71, 0xBF, 0xA2, 0x9C, 0x4E]);
        assert_eq!(addr.to_string(), "3C:71:BF:A2:9C:4E");
    }

    #[test]
    fn display_all_zero() {
        assert_eq!(BtAddr::default().to_string(), "00:00:00:00:00:00");
    }

    #[test]
    fn display_matches_console_format_for_every_octet_value() {
        for v in 0..=u8::MAX {
            let addr = BtAddr::new([v, v.wrapping_add(1), 0xFF - v, v >> 4, v << 4, v ^ 0x5A]);
            let s = addr.to_string();
            assert!(is_console_format(&s), "{s}");
            assert_eq!(s.len(), 17);
        }
    }
}
