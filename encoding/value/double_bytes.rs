/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[derive(Debug, Copy, Clone)]
pub struct DoubleBytes {
    bytes: [u8; DoubleBytes::LENGTH],
}

impl DoubleBytes {
    pub const LENGTH: usize = 8;

    pub fn new(bytes: [u8; DoubleBytes::LENGTH]) -> Self {
        Self { bytes }
    }

    pub fn build(double: f64) -> Self {
        // positives: flip the sign bit; negatives: flip every bit
        let bits = double.to_bits();
        let sortable = if bits >> 63 == 0 { bits ^ (1 << 63) } else { !bits };
        Self { bytes: sortable.to_be_bytes() }
    }

    pub fn as_f64(&self) -> f64 {
        let sortable = u64::from_be_bytes(self.bytes);
        let bits = if sortable >> 63 == 1 { sortable ^ (1 << 63) } else { !sortable };
        f64::from_bits(bits)
    }

    pub fn bytes(&self) -> [u8; Self::LENGTH] {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::DoubleBytes;

    #[test]
    fn byte_order_matches_numeric_order() {
        let doubles = [f64::NEG_INFINITY, -1.5e10, -2.0, -0.5, 0.0, 0.25, 3.0, 7.5e12, f64::INFINITY];
        let encoded: Vec<[u8; 8]> = doubles.iter().map(|double| DoubleBytes::build(*double).bytes()).collect();
        assert!(encoded.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(doubles.iter().all(|double| DoubleBytes::build(*double).as_f64() == *double));
    }
}
