//! Bit-position generators.
//!
//! A generator decides which carrier byte receives the n-th payload bit. The sequence
//! depends only on the carrier capacity and the rule, so the extractor can rebuild it
//! from the carrier alone. It is placement obfuscation, not a secret: encrypt the
//! payload first if confidentiality is needed.

use enum_dispatch::enum_dispatch;

#[enum_dispatch]
pub trait PositionGenerator {
    /// distance between two consecutive positions for a carrier of `capacity_bits`
    fn stride(&self, capacity_bits: usize) -> usize;

    /// a fresh, restartable sequence of distinct offsets in `0..capacity_bits`
    fn positions(&self, capacity_bits: usize) -> Positions {
        Positions::new(capacity_bits, self.stride(capacity_bits))
    }
}

/// The rule used to place payload bits, hide and reveal have to agree on it.
#[enum_dispatch(PositionGenerator)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRule {
    Sequential(Sequential),
    PrimeStride(PrimeStride),
}

impl Default for PositionRule {
    fn default() -> Self {
        PrimeStride.into()
    }
}

/// Plain `0, 1, 2, ..` order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sequential;

impl PositionGenerator for Sequential {
    fn stride(&self, _capacity_bits: usize) -> usize {
        1
    }
}

/// Walks the carrier in steps of a prime `s` with `gcd(s, capacity) = 1`.
///
/// `s` is the smallest such prime not below `sqrt(capacity)`, position `i` is
/// `(i * s) mod capacity`. Coprimality makes the walk visit every offset exactly once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrimeStride;

impl PositionGenerator for PrimeStride {
    fn stride(&self, capacity_bits: usize) -> usize {
        if capacity_bits <= 2 {
            return 1;
        }
        let mut candidate = ceil_sqrt(capacity_bits).max(2);
        while !(is_prime(candidate) && capacity_bits % candidate != 0) {
            candidate += 1;
        }
        candidate
    }
}

/// Lazy iterator over carrier offsets.
#[derive(Debug, Clone)]
pub struct Positions {
    emitted: usize,
    capacity: usize,
    stride: usize,
    current: usize,
}

impl Positions {
    fn new(capacity: usize, stride: usize) -> Self {
        Self {
            emitted: 0,
            capacity,
            stride: if capacity == 0 { 0 } else { stride % capacity },
            current: 0,
        }
    }
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted == self.capacity {
            return None;
        }
        let position = self.current;
        self.emitted += 1;
        self.current += self.stride;
        if self.current >= self.capacity {
            self.current -= self.capacity;
        }
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.capacity - self.emitted;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Positions {}

fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.saturating_mul(root) < n {
        root += 1;
    }
    while root > 0 && (root - 1) * (root - 1) >= n {
        root -= 1;
    }
    root
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_permutation(rule: PositionRule, capacity: usize) {
        let mut seen = vec![false; capacity];
        let mut count = 0;
        for p in rule.positions(capacity) {
            assert!(p < capacity, "position {p} out of range for {capacity}");
            assert!(!seen[p], "position {p} visited twice for {capacity}");
            seen[p] = true;
            count += 1;
        }
        assert_eq!(count, capacity);
    }

    #[test]
    fn should_visit_every_offset_exactly_once() {
        for capacity in 0..300 {
            assert_is_permutation(PrimeStride.into(), capacity);
            assert_is_permutation(Sequential.into(), capacity);
        }
        assert_is_permutation(PrimeStride.into(), 30_000);
        assert_is_permutation(PrimeStride.into(), 3 * 499 * 499);
    }

    #[test]
    fn should_be_restartable() {
        let rule = PositionRule::default();
        let first: Vec<usize> = rule.positions(1234).collect();
        let second: Vec<usize> = rule.positions(1234).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn sequential_rule_is_plain_order() {
        let rule: PositionRule = Sequential.into();
        assert_eq!(rule.positions(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn prime_stride_picks_smallest_coprime_prime_above_the_root() {
        assert_eq!(PrimeStride.stride(100), 11);
        assert_eq!(PrimeStride.stride(30_000), 179);
        assert_eq!(PrimeStride.stride(121), 13);
        assert_eq!(PrimeStride.stride(3), 2);
        assert_eq!(PrimeStride.stride(2), 1);
    }

    #[test]
    fn prime_stride_spreads_the_first_positions() {
        let rule: PositionRule = PrimeStride.into();
        let first: Vec<usize> = rule.positions(100).take(4).collect();

        assert_eq!(first, vec![0, 11, 22, 33]);
    }

    #[test]
    fn should_report_exact_size() {
        let mut positions = PositionRule::default().positions(10);
        assert_eq!(positions.len(), 10);
        positions.next();
        assert_eq!(positions.len(), 9);
    }

    #[test]
    fn default_rule_is_prime_stride() {
        assert_eq!(PositionRule::default(), PositionRule::PrimeStride(PrimeStride));
    }

    #[test]
    fn primality_helpers() {
        let primes: Vec<usize> = (0..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(99), 10);
        assert_eq!(ceil_sqrt(100), 10);
        assert_eq!(ceil_sqrt(101), 11);
    }
}
