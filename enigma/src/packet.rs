//! Message packet exchanged between emitter and receiver
//!
//! ```json
//! {"mensaje": "QHHHQRMQUQ", "rotors": ["I", "II", "III"], "pos": ["A", "A", "A"]}
//! ```

use crate::{Error, Machine, Rotor};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Packet {
    /// Ciphertext, letters `A-Z` only
    #[serde(rename = "mensaje")]
    pub message: String,
    pub rotors: [Rotor; 3],
    /// Start positions the message was enciphered from
    #[serde(rename = "pos")]
    pub positions: [char; 3],
}

impl Packet {
    /// Encipher `plaintext` into a packet
    pub fn seal(plaintext: &str, rotors: [Rotor; 3], positions: [char; 3]) -> Result<Self, Error> {
        check_positions(&positions)?;
        let message = Machine::new(rotors, positions).process(plaintext);
        Ok(Self {
            message,
            rotors,
            positions,
        })
    }

    /// Decipher the carried message
    pub fn open(&self) -> Result<String, Error> {
        check_positions(&self.positions)?;
        Ok(Machine::new(self.rotors, self.positions).process(&self.message))
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

fn check_positions(positions: &[char; 3]) -> Result<(), Error> {
    match positions.iter().find(|p| !p.is_ascii_uppercase()) {
        Some(&p) => Err(Error::InvalidPosition(p)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rotor::*;

    #[test]
    fn seal_and_open() {
        let packet = Packet::seal("Hello world", [I, II, III], ['A', 'A', 'A']).unwrap();
        assert_eq!(packet.message, "QHHHQRMQUQ");
        assert_eq!(packet.open().unwrap(), "HELLOWORLD");
    }

    #[test]
    fn wire_format() {
        let packet = Packet::seal("HELLOWORLD", [I, II, III], ['A', 'A', 'A']).unwrap();
        assert_eq!(
            packet.to_json().unwrap(),
            r#"{"mensaje":"QHHHQRMQUQ","rotors":["I","II","III"],"pos":["A","A","A"]}"#
        );
    }

    #[test]
    fn reads_packets_with_spaced_json() {
        let json = r#"{"mensaje": "LRHHYRWESMSU", "rotors": ["III", "I", "V"], "pos": ["A", "A", "A"]}"#;
        let packet = Packet::from_json(json).unwrap();
        assert_eq!(packet.rotors, [III, I, V]);
        assert_eq!(packet.open().unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn rejects_bad_packets() {
        assert!(matches!(
            Packet::from_json(r#"{"mensaje": "ABC", "rotors": ["I", "II"], "pos": ["A", "A", "A"]}"#),
            Err(Error::Packet(_))
        ));
        assert!(matches!(
            Packet::from_json(r#"{"mensaje": "ABC", "rotors": ["I", "II", "VI"], "pos": ["A", "A", "A"]}"#),
            Err(Error::Packet(_))
        ));
        assert!(matches!(Packet::from_json("not json"), Err(Error::Packet(_))));

        let packet = Packet::from_json(r#"{"mensaje": "ABC", "rotors": ["I", "II", "III"], "pos": ["a", "A", "A"]}"#).unwrap();
        assert!(matches!(packet.open(), Err(Error::InvalidPosition('a'))));
    }
}
