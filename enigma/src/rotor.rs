use std::fmt;
use std::str::FromStr;

/// Letters as indices, `A` = 0
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Reflector B
pub const REFLECTOR_B: &[u8; 26] = b"YRUHQSLDPXNGOKMIEBFZCWVJAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Rotor {
    I,
    II,
    III,
    IV,
    V,
}

impl Rotor {
    pub const ALL: [Rotor; 5] = [Rotor::I, Rotor::II, Rotor::III, Rotor::IV, Rotor::V];

    pub fn wiring(self) -> &'static [u8; 26] {
        match self {
            Rotor::I => b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            Rotor::II => b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
            Rotor::III => b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
            Rotor::IV => b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
            Rotor::V => b"VZBRGITYUPSDNHLXAWMJQOFEKC",
        }
    }

    /// Position (as an index) at which the next rotor is carried
    pub fn notch(self) -> u8 {
        let letter = match self {
            Rotor::I => b'Q',
            Rotor::II => b'E',
            Rotor::III => b'V',
            Rotor::IV => b'J',
            Rotor::V => b'Z',
        };
        letter - b'A'
    }

    pub fn name(self) -> &'static str {
        match self {
            Rotor::I => "I",
            Rotor::II => "II",
            Rotor::III => "III",
            Rotor::IV => "IV",
            Rotor::V => "V",
        }
    }

    /// Signal entering at `c` with the rotor at `offset`
    pub(crate) fn forward(self, c: u8, offset: u8) -> u8 {
        self.wiring()[((c + offset) % 26) as usize] - b'A'
    }

    /// Inverse of `forward` for the same `offset`
    pub(crate) fn backward(self, c: u8, offset: u8) -> u8 {
        let wired = self
            .wiring()
            .iter()
            .position(|&w| w == ALPHABET[c as usize])
            .unwrap_or_default() as u8;
        (wired + 26 - offset) % 26
    }
}

pub(crate) fn reflect(c: u8) -> u8 {
    REFLECTOR_B[c as usize] - b'A'
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rotor {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Rotor::ALL
            .into_iter()
            .find(|r| r.name() == upper)
            .ok_or_else(|| crate::Error::UnknownRotor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wirings_are_permutations() {
        for rotor in Rotor::ALL {
            let mut seen = rotor.wiring().to_vec();
            seen.sort_unstable();
            assert_eq!(&seen[..], &ALPHABET[..], "{rotor}");
        }
    }

    #[test]
    fn backward_undoes_forward() {
        for rotor in Rotor::ALL {
            for offset in 0..26 {
                for c in 0..26 {
                    assert_eq!(rotor.backward(rotor.forward(c, offset), offset), c);
                }
            }
        }
    }

    #[test]
    fn reflector_is_a_fixed_point_free_involution() {
        for c in 0..26 {
            assert_ne!(reflect(c), c);
            assert_eq!(reflect(reflect(c)), c);
        }
    }

    #[test]
    fn notches() {
        assert_eq!(Rotor::I.notch(), 16);
        assert_eq!(Rotor::II.notch(), 4);
        assert_eq!(Rotor::V.notch(), 25);
    }

    #[test]
    fn serde_uses_roman_names() {
        assert_eq!(serde_json::to_string(&Rotor::IV).unwrap(), "\"IV\"");
        assert_eq!(serde_json::from_str::<Rotor>("\"III\"").unwrap(), Rotor::III);
    }
}
