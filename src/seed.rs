//! Seed derivation.
//!
//! Everything random in a drawing flows from one 32-bit seed built from the
//! day, the weather, the mood, the words and the requested style. The day is
//! the only time-dependent input: the same feeling yields a new piece
//! tomorrow.

use std::collections::HashSet;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Today's date in the `YYYYMMDD` form used in seed material and titles.
pub fn today() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}

/// 32-bit FNV-1a over raw bytes.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// The inputs that identify one drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMaterial<'a> {
    pub date: &'a str,
    pub weather: &'a str,
    pub mood: i32,
    pub prompt: &'a str,
    pub style: &'a str,
}

impl SeedMaterial<'_> {
    /// The literal string that gets hashed.
    pub fn text(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            self.date, self.weather, self.mood, self.prompt, self.style
        )
    }

    /// Same material, same seed.
    pub fn seed(&self) -> u32 {
        fnv1a_32(self.text().as_bytes())
    }
}

/// Chaos coefficient in `[0, 1]`: distinct characters of the lowercased
/// prompt, divided by ten.
pub fn chaos_coefficient(prompt: &str) -> f64 {
    let distinct: HashSet<char> = prompt.to_lowercase().chars().collect();
    (distinct.len() as f64 / 10.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn material<'a>(date: &'a str, prompt: &'a str) -> SeedMaterial<'a> {
        SeedMaterial {
            date,
            weather: "Sunny",
            mood: 5,
            prompt,
            style: "chaotic",
        }
    }

    #[test]
    fn fnv1a_reference_vectors() {
        assert_eq!(fnv1a_32(b""), 0x811c_9dc5);
        assert_eq!(fnv1a_32(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a_32(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn material_text_layout() {
        let m = material("20240101", "hello");
        assert_eq!(m.text(), "20240101-Sunny-5-hello-chaotic");
        assert_eq!(m.seed(), fnv1a_32(b"20240101-Sunny-5-hello-chaotic"));
    }

    #[test]
    fn seed_is_stable_and_day_dependent() {
        let a = material("20240101", "hello").seed();
        let b = material("20240101", "hello").seed();
        let c = material("20240102", "hello").seed();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn today_is_eight_digits() {
        let d = today();
        assert_eq!(d.len(), 8);
        assert!(d.chars().all(|c| c.is_ascii_digit()), "not a date: {d}");
    }

    #[test]
    fn chaos_counts_distinct_lowercase_chars() {
        assert_eq!(chaos_coefficient(""), 0.0);
        assert_eq!(chaos_coefficient("aaaa"), 0.1);
        assert_eq!(chaos_coefficient("AaBb"), 0.2);
        assert_eq!(chaos_coefficient("hello"), 0.4);
        assert_eq!(chaos_coefficient("the quick brown fox"), 1.0);
    }

    #[test]
    fn chaos_never_decreases_as_characters_are_added() {
        let alphabet = "abcdefghijklmnopqrstuvwxyz";
        let mut last = 0.0;
        for end in 0..=alphabet.len() {
            let chaos = chaos_coefficient(&alphabet[..end]);
            assert!(chaos >= last, "chaos dropped at {end}: {chaos} < {last}");
            assert!((0.0..=1.0).contains(&chaos));
            last = chaos;
        }
    }

    proptest! {
        #[test]
        fn chaos_stays_in_unit_range(prompt in ".{0,100}") {
            let chaos = chaos_coefficient(&prompt);
            prop_assert!((0.0..=1.0).contains(&chaos));
        }

        #[test]
        fn appending_never_lowers_chaos(prompt in "[ -~]{0,60}", extra in "[ -~]") {
            let longer = format!("{prompt}{extra}");
            prop_assert!(chaos_coefficient(&longer) >= chaos_coefficient(&prompt));
        }
    }
}
