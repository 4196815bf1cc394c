//! Three-rotor Enigma cipher and the JSON packet that carries its messages
//!
//! Rotors I-V and reflector B, no ring settings and no plugboard. Encryption
//! and decryption are the same operation: running a ciphertext through a
//! machine set up with the same rotors and start positions gives back the
//! plaintext.

pub mod machine;
pub mod packet;
pub mod rotor;

pub use machine::{Machine, sanitize};
pub use packet::Packet;
pub use rotor::Rotor;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown rotor: {0:?} (expected I, II, III, IV or V)")]
    UnknownRotor(String),
    #[error("expected 3 rotors, found {0}")]
    RotorCount(usize),
    #[error("invalid rotor position: {0:?} (expected a letter A-Z)")]
    InvalidPosition(char),
    #[error("expected 3 rotor positions, found {0}")]
    PositionCount(usize),
    #[error("malformed packet: {0}")]
    Packet(#[from] serde_json::Error),
    #[error("failed to read packet: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse exactly three rotor names, leftmost (fastest) first
pub fn parse_rotors<S: AsRef<str>>(names: &[S]) -> Result<[Rotor; 3], Error> {
    match names {
        [a, b, c] => Ok([a.as_ref().parse()?, b.as_ref().parse()?, c.as_ref().parse()?]),
        _ => Err(Error::RotorCount(names.len())),
    }
}

/// Parse start positions written as three letters, e.g. `AAA`
pub fn parse_positions(letters: &str) -> Result<[char; 3], Error> {
    let letters: Vec<char> = letters.trim().chars().collect();
    let [a, b, c] = letters[..] else {
        return Err(Error::PositionCount(letters.len()));
    };

    let mut positions = [a, b, c];
    for p in positions.iter_mut() {
        *p = p.to_ascii_uppercase();
        if !p.is_ascii_uppercase() {
            return Err(Error::InvalidPosition(*p));
        }
    }
    Ok(positions)
}
