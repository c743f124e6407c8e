use std::fmt;
use std::str::FromStr;
use crate::error::Error;
use crate::STEPS;

/// Hand-tuned light and dark scales of a built-in family.
pub(crate) struct FamilyData {
    pub(crate) family: ColorFamily,
    pub(crate) light: [&'static str; STEPS],
    pub(crate) dark: [&'static str; STEPS],
}

/// The color families shipped with the library.
///
/// The first six are neutrals (grays tinted towards a hue); the others
/// are chromatic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFamily {
    Gray, Mauve, Slate, Sage, Olive, Sand,
    Tomato, Red, Ruby, Crimson, Pink, Plum, Purple, Violet, Iris, Indigo,
    Blue, Cyan, Teal, Jade, Green, Grass, Bronze, Gold, Brown, Orange,
    Amber, Yellow, Lime, Mint, Sky,
}

impl ColorFamily {
    /// All families, in declaration order.
    pub const ALL: [ColorFamily; 31] = {
        use ColorFamily::*;
        [Gray, Mauve, Slate, Sage, Olive, Sand,
         Tomato, Red, Ruby, Crimson, Pink, Plum, Purple, Violet, Iris, Indigo,
         Blue, Cyan, Teal, Jade, Green, Grass, Bronze, Gold, Brown, Orange,
         Amber, Yellow, Lime, Mint, Sky]
    };

    /// The lowercase name, e.g. `"blue"`.
    pub fn name(self) -> &'static str {
        use ColorFamily::*;
        match self {
            Gray => "gray", Mauve => "mauve", Slate => "slate",
            Sage => "sage", Olive => "olive", Sand => "sand",
            Tomato => "tomato", Red => "red", Ruby => "ruby",
            Crimson => "crimson", Pink => "pink", Plum => "plum",
            Purple => "purple", Violet => "violet", Iris => "iris",
            Indigo => "indigo", Blue => "blue", Cyan => "cyan",
            Teal => "teal", Jade => "jade", Green => "green",
            Grass => "grass", Bronze => "bronze", Gold => "gold",
            Brown => "brown", Orange => "orange", Amber => "amber",
            Yellow => "yellow", Lime => "lime", Mint => "mint", Sky => "sky",
        }
    }

    /// Says whether the family is one of the tinted grays.
    pub fn is_neutral(self) -> bool {
        use ColorFamily::*;
        matches!(self, Gray | Mauve | Slate | Sage | Olive | Sand)
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFamily {
    type Err = Error;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Error> {
        ColorFamily::ALL.iter().copied()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownFamily { name: s.to_string() })
    }
}
