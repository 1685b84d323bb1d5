//! Symbolic lookup tables.
//!
//! Every mood maps, by its last digit, to a short meaning and to the color
//! the point cloud is drawn in. Decorative shapes take their fills from a
//! separate palette so they never blend into the line.

const MEANINGS: [&str; 10] = [
    "Stillness before the first stroke",
    "A single spark of intent",
    "Balance between two pulls",
    "Growth finding its shape",
    "Foundations settling in",
    "Change moving through",
    "Harmony in small things",
    "Searching the unseen",
    "Abundance overflowing",
    "Completion and release",
];

const LINE_COLORS: [&str; 10] = [
    "black", "crimson", "darkorange", "goldenrod", "forestgreen", "teal", "royalblue",
    "indigo", "darkviolet", "mediumvioletred",
];

const SHAPE_PALETTE: [&str; 8] = [
    "tomato",
    "sandybrown",
    "khaki",
    "mediumseagreen",
    "skyblue",
    "slateblue",
    "plum",
    "lightcoral",
];

const PRIMARY_TRIAD: [&str; 3] = ["red", "yellow", "blue"];

/// Immutable lookup tables handed to the engine at construction.
#[derive(Debug, Clone)]
pub struct Symbolism {
    meanings: [&'static str; 10],
    line_colors: [&'static str; 10],
    shape_palette: &'static [&'static str],
    primary_triad: &'static [&'static str],
}

impl Default for Symbolism {
    fn default() -> Self {
        Self {
            meanings: MEANINGS,
            line_colors: LINE_COLORS,
            shape_palette: &SHAPE_PALETTE,
            primary_triad: &PRIMARY_TRIAD,
        }
    }
}

impl Symbolism {
    /// Digit used for lookups. Negative moods wrap like positive ones.
    pub fn digit(mood: i32) -> usize {
        mood.rem_euclid(10) as usize
    }

    pub fn meaning(&self, mood: i32) -> &'static str {
        self.meanings[Self::digit(mood)]
    }

    pub fn line_color(&self, mood: i32) -> &'static str {
        self.line_colors[Self::digit(mood)]
    }

    pub fn shape_palette(&self) -> &'static [&'static str] {
        self.shape_palette
    }

    pub fn primary_triad(&self) -> &'static [&'static str] {
        self.primary_triad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_use_last_digit() {
        let s = Symbolism::default();
        assert_eq!(s.meaning(5), s.meaning(15));
        assert_eq!(s.meaning(5), s.meaning(95));
        assert_eq!(s.line_color(0), "black");
        assert_eq!(s.line_color(10), "black");
    }

    #[test]
    fn negative_moods_wrap() {
        assert_eq!(Symbolism::digit(-1), 9);
        assert_eq!(Symbolism::digit(-10), 0);
    }

    #[test]
    fn shape_palette_is_distinct_from_line_colors() {
        let s = Symbolism::default();
        for color in s.shape_palette() {
            assert!(!LINE_COLORS.contains(color), "{color} is also a line color");
        }
    }
}
