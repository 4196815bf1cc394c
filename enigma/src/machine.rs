use crate::rotor::{Rotor, reflect};

/// Uppercase `text` and drop everything that is not a letter `A-Z`
///
/// Uses full Unicode case mapping, so `ß` becomes `SS` rather than vanishing.
pub fn sanitize(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Three rotors in slots 1-3 (slot 1 steps on every key press)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    rotors: [Rotor; 3],
    positions: [u8; 3],
}

impl Machine {
    /// `positions` are letters `A-Z`, as validated by `parse_positions`
    pub fn new(rotors: [Rotor; 3], positions: [char; 3]) -> Self {
        Self {
            rotors,
            positions: positions.map(|p| (p as u8).wrapping_sub(b'A') % 26),
        }
    }

    pub fn rotors(&self) -> [Rotor; 3] {
        self.rotors
    }

    pub fn positions(&self) -> [char; 3] {
        self.positions.map(|p| (b'A' + p) as char)
    }

    /// Advance the rotors before a key press
    ///
    /// The middle rotor double-steps when it sits on its own notch. The third
    /// rotor is carried only when the middle rotor lands on its notch, which
    /// differs from the historical machine but is what peers expect.
    fn step(&mut self) {
        let [n1, n2, _] = self.rotors.map(Rotor::notch);
        let [p1, p2, p3] = &mut self.positions;

        let double_step = *p2 == n2;
        *p1 = (*p1 + 1) % 26;

        if *p1 == n1 || double_step {
            *p2 = (*p2 + 1) % 26;
            if *p2 == n2 {
                *p3 = (*p3 + 1) % 26;
            }
        }
    }

    /// Encipher a single letter index (`A` = 0)
    pub fn press(&mut self, c: u8) -> u8 {
        self.step();

        let mut c = c % 26;
        for (rotor, &offset) in self.rotors.iter().zip(&self.positions) {
            c = rotor.forward(c, offset);
        }
        c = reflect(c);
        for (rotor, &offset) in self.rotors.iter().zip(&self.positions).rev() {
            c = rotor.backward(c, offset);
        }
        c
    }

    /// Encipher (or decipher) `text` after sanitizing it
    pub fn process(&mut self, text: &str) -> String {
        sanitize(text)
            .bytes()
            .map(|b| (b'A' + self.press(b - b'A')) as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rotor::*;

    fn machine(rotors: [Rotor; 3], positions: [char; 3]) -> Machine {
        Machine::new(rotors, positions)
    }

    #[test]
    fn sanitize_keeps_letters_only() {
        assert_eq!(sanitize("Hola, mundo! 123"), "HOLAMUNDO");
        assert_eq!(sanitize("ñandú"), "AND");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn sanitize_expands_multi_letter_uppercase() {
        assert_eq!(sanitize("straße"), "STRASSE");
        assert_eq!(sanitize("ﬁn"), "FIN");
    }

    #[test]
    fn enciphers_expanded_letters() {
        let expanded = machine([I, II, III], ['A', 'A', 'A']).process("STRASSE");
        let mut m = machine([I, II, III], ['A', 'A', 'A']);
        assert_eq!(m.process("Straße"), expanded);
        assert_eq!(expanded.len(), 7);
    }

    #[test]
    fn known_ciphertexts() {
        let mut m = machine([I, II, III], ['A', 'A', 'A']);
        assert_eq!(m.process("HELLOWORLD"), "QHHHQRMQUQ");
        assert_eq!(m.positions(), ['K', 'A', 'A']);

        let mut m = machine([I, II, III], ['A', 'A', 'A']);
        assert_eq!(m.process("AAAAA"), "EVRDW");

        let mut m = machine([III, I, V], ['A', 'A', 'A']);
        assert_eq!(m.process("attack at dawn"), "LRHHYRWESMSU");

        let mut m = machine([I, II, III], ['Q', 'E', 'A']);
        assert_eq!(m.process("HELLO"), "VLMKC");
        assert_eq!(m.positions(), ['V', 'F', 'A']);
    }

    #[test]
    fn carries_past_the_notch() {
        let mut m = machine([I, II, III], ['A', 'A', 'A']);
        assert_eq!(
            m.process(&"A".repeat(30)),
            "EVRDWDXJXEEKNWWMUNIQBZQQEJSOWD"
        );
        assert_eq!(m.positions(), ['E', 'B', 'A']);
    }

    #[test]
    fn stepping() {
        // slot 1 reaches its notch (Q): slot 2 steps
        let mut m = machine([I, II, III], ['P', 'A', 'A']);
        m.step();
        assert_eq!(m.positions(), ['Q', 'B', 'A']);

        // slot 2 sits on its notch (E): double step
        let mut m = machine([I, II, III], ['A', 'E', 'A']);
        m.step();
        assert_eq!(m.positions(), ['B', 'F', 'A']);

        // slot 2 lands on its notch: slot 3 steps
        let mut m = machine([I, II, III], ['P', 'D', 'A']);
        m.step();
        assert_eq!(m.positions(), ['Q', 'E', 'B']);
        m.step();
        assert_eq!(m.positions(), ['R', 'F', 'B']);

        let mut m = machine([I, II, III], ['Z', 'Z', 'Z']);
        m.step();
        assert_eq!(m.positions(), ['A', 'Z', 'Z']);
    }

    #[test]
    fn deciphers_with_same_settings() {
        let plain = "GUARDAESTAMACPARAUSARLAENELEMISOR";
        for rotors in [[I, II, III], [V, IV, III], [II, II, II]] {
            let cipher = machine(rotors, ['C', 'X', 'M']).process(plain);
            assert_ne!(cipher, plain);
            assert_eq!(machine(rotors, ['C', 'X', 'M']).process(&cipher), plain);
        }
    }

    #[test]
    fn never_maps_a_letter_to_itself() {
        let mut m = machine([IV, II, V], ['A', 'A', 'A']);
        for _ in 0..100 {
            for c in 0..26 {
                assert_ne!(m.press(c), c);
            }
        }
    }
}
