//! Terrain catalog: the closed set of floor kinds and their traversal costs.

use std::fmt;

/// Kind of floor on a non-wall cell. Entering a cell costs its terrain's
/// [`cost`](Terrain::cost).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Empty,
    Grass,
    Dirt,
    Water,
}

impl Terrain {
    /// Every variant, cheapest first.
    pub const ALL: [Terrain; 4] = [Terrain::Empty, Terrain::Grass, Terrain::Dirt, Terrain::Water];

    /// Traversal cost. Always non-negative.
    pub const fn cost(self) -> i32 {
        match self {
            Terrain::Empty => 0,
            Terrain::Grass => 1,
            Terrain::Dirt => 5,
            Terrain::Water => 10,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Empty => "Clear Path",
            Terrain::Grass => "Grass",
            Terrain::Dirt => "Dirt Path",
            Terrain::Water => "Water",
        }
    }

    /// Map a uniform sample in `[0, 1)` to a terrain:
    /// 40% empty, 30% grass, 20% dirt, 10% water.
    pub fn from_sample(r: f64) -> Terrain {
        if r < 0.4 {
            Terrain::Empty
        } else if r < 0.7 {
            Terrain::Grass
        } else if r < 0.9 {
            Terrain::Dirt
        } else {
            Terrain::Water
        }
    }

    /// Character used in ASCII layouts.
    pub const fn glyph(self) -> char {
        match self {
            Terrain::Empty => '.',
            Terrain::Grass => ',',
            Terrain::Dirt => ':',
            Terrain::Water => '~',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(ch: char) -> Option<Terrain> {
        Terrain::ALL.into_iter().find(|t| t.glyph() == ch)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
