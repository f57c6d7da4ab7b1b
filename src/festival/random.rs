/// Deterministic pseudo-random generator seeded from a string.
///
/// Backs the cosmetic choices of the festival (name and location) so that an
/// unchanged taste profile keeps producing the same festival. The string
/// hash (`h = h * 31 + code`, wrapped to 32-bit signed, absolute value) and
/// the linear congruential step (`state = (state * 9301 + 49297) % 233280`)
/// are a compatibility contract; the constants must not be swapped for
/// "equivalent" ones or the output sequence changes.
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: &str) -> Self {
        Self {
            state: hash_seed(seed) as u64,
        }
    }

    /// Next pseudo-random number in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * 9301 + 49297) % 233280;
        self.state as f64 / 233280.0
    }

    /// Random integer in `[min, max)`.
    pub fn next_int(&mut self, min: usize, max: usize) -> usize {
        (self.next() * (max - min) as f64) as usize + min
    }

    /// Random element of a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_int(0, items.len())]
    }
}

fn hash_seed(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in seed.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

/// Derives the festival seed from the artist pool.
///
/// The id set is sorted before the first ten are taken, so the seed depends
/// only on which artists are present, not on the order the upstream API
/// returned them in.
pub fn derive_seed(artist_ids: &[String]) -> String {
    let mut ids: Vec<String> = artist_ids.to_vec();
    ids.sort();
    ids.truncate(10);
    ids.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new("alpha-beta-gamma");
        let mut b = SeededRandom::new("alpha-beta-gamma");

        for _ in 0..32 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn next_stays_in_unit_interval() {
        let mut rng = SeededRandom::new("bounds");
        for _ in 0..1000 {
            let value = rng.next();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn next_int_respects_bounds() {
        let mut rng = SeededRandom::new("ranges");
        for _ in 0..1000 {
            let value = rng.next_int(3, 9);
            assert!((3..9).contains(&value));
        }
    }

    #[test]
    fn choose_returns_member() {
        let items = ["a", "b", "c", "d"];
        let mut rng = SeededRandom::new("members");
        for _ in 0..100 {
            assert!(items.contains(rng.choose(&items)));
        }
    }

    #[test]
    fn lcg_constants_are_fixed() {
        // One hand-computed step: seed "" hashes to 0, so the first state
        // is (0 * 9301 + 49297) % 233280 = 49297.
        let mut rng = SeededRandom::new("");
        assert_eq!(rng.next(), 49297.0 / 233280.0);
    }

    #[test]
    fn derive_seed_ignores_input_order() {
        let forward: Vec<String> = ["a1", "b2", "c3"].iter().map(|s| s.to_string()).collect();
        let reversed: Vec<String> = ["c3", "b2", "a1"].iter().map(|s| s.to_string()).collect();

        assert_eq!(derive_seed(&forward), derive_seed(&reversed));
        assert_eq!(derive_seed(&forward), "a1-b2-c3");
    }

    #[test]
    fn derive_seed_caps_at_ten_ids() {
        let ids: Vec<String> = (0..15).map(|i| format!("id{:02}", i)).collect();
        let seed = derive_seed(&ids);
        assert_eq!(seed.split('-').count(), 10);
    }
}
