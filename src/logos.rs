//! Fixed logo catalogue and the per-difficulty deck the game draws from.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Value used by the `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Caption shown to the player.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// One logo the player may be asked about. `name` doubles as the answer key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LogoEntry {
    pub name: &'static str,
    pub image_url: &'static str,
    pub category: &'static str, // informational only
    pub difficulty: Difficulty,
}

// -----------------------------------------------------------------------------
// Dataset. Order is the order of the guess buttons.
// -----------------------------------------------------------------------------

pub const LOGOS: &[LogoEntry] = &[
    LogoEntry {
        name: "React",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/a/a7/React-icon.svg",
        category: "Frontend",
        difficulty: Difficulty::Easy,
    },
    LogoEntry {
        name: "Python",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/c/c3/Python-logo-notext.svg",
        category: "Backend",
        difficulty: Difficulty::Easy,
    },
    LogoEntry {
        name: "TypeScript",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/4/4c/Typescript_logo_2020.svg",
        category: "Frontend",
        difficulty: Difficulty::Medium,
    },
    LogoEntry {
        name: "Go",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/0/05/Go_Logo_Blue.svg",
        category: "Backend",
        difficulty: Difficulty::Hard,
    },
    LogoEntry {
        name: "Rust",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/d/d5/Rust_programming_language_black_logo.svg",
        category: "Systems",
        difficulty: Difficulty::Hard,
    },
    LogoEntry {
        name: "Node.js",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/d/d9/Node.js_logo.svg",
        category: "Backend",
        difficulty: Difficulty::Medium,
    },
    LogoEntry {
        name: "Angular",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/c/cf/Angular_full_color_logo.svg",
        category: "Frontend",
        difficulty: Difficulty::Medium,
    },
    LogoEntry {
        name: "Java",
        image_url: "https://upload.wikimedia.org/wikipedia/en/3/30/Java_programming_language_logo.svg",
        category: "Backend",
        difficulty: Difficulty::Hard,
    },
];

/// Validated view over a logo dataset, bucketed by difficulty.
///
/// Construction is the startup invariant check: every difficulty must have at
/// least one entry and names must be unique. After that, picking never fails.
#[derive(Clone, Debug)]
pub struct LogoDeck {
    entries: &'static [LogoEntry],
    buckets: [Vec<&'static LogoEntry>; 3],
}

impl LogoDeck {
    pub fn new(entries: &'static [LogoEntry]) -> Result<Self, GameError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(GameError::DuplicateName(entry.name));
            }
        }
        let mut buckets: [Vec<&'static LogoEntry>; 3] = Default::default();
        for entry in entries {
            buckets[entry.difficulty.index()].push(entry);
        }
        for d in Difficulty::ALL {
            if buckets[d.index()].is_empty() {
                return Err(GameError::EmptyDifficulty(d));
            }
        }
        Ok(Self { entries, buckets })
    }

    /// Deck over the built-in [`LOGOS`] dataset.
    pub fn standard() -> Result<Self, GameError> {
        Self::new(LOGOS)
    }

    /// Uniform pick among entries of `difficulty`. Repeats are allowed.
    pub fn pick<R: Rng>(&self, difficulty: Difficulty, rng: &mut R) -> &'static LogoEntry {
        let bucket = &self.buckets[difficulty.index()];
        bucket[rng.gen_range(0..bucket.len())]
    }

    pub fn entries(&self) -> &'static [LogoEntry] {
        self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.buckets[difficulty.index()].len()
    }
}
