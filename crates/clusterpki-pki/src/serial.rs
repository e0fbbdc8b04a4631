//! Certificate serial numbers.

use rand::RngCore;
use rcgen::SerialNumber;

/// Serial length in bytes; the top bit is cleared so the INTEGER stays positive.
const SERIAL_LEN: usize = 16;

/// Draw a random, positive, non-zero serial number.
///
/// Returns the rcgen value and its lowercase hex form.
pub(crate) fn random_serial(rng: &mut impl RngCore) -> (SerialNumber, String) {
    let mut bytes = [0u8; SERIAL_LEN];
    rng.fill_bytes(&mut bytes);
    bytes[0] = (bytes[0] & 0x7f) | 0x40;

    (SerialNumber::from_slice(&bytes), hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{seeded_rng, OsEntropy};

    #[test]
    fn test_serials_are_positive_and_distinct() {
        let mut rng = seeded_rng(&OsEntropy).unwrap();
        let (_, first) = random_serial(&mut rng);
        let (_, second) = random_serial(&mut rng);

        assert_ne!(first, second);
        for serial in [&first, &second] {
            assert_eq!(serial.len(), SERIAL_LEN * 2);
            let top = u8::from_str_radix(&serial[..2], 16).unwrap();
            assert_eq!(top & 0x80, 0);
            assert_ne!(top, 0);
        }
    }
}
