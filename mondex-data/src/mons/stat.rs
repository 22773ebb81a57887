use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single stat value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    #[alias = "maxHP"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spd"]
    #[alias = "Speed"]
    Spd,
}

/// The base stat block of a species.
///
/// This is a plain value type with copy semantics: handing one out never aliases internal state.
/// Field names follow the external record shape (`maxHP`, `atk`, `def`, `spd`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicStatus {
    #[serde(rename = "maxHP", default)]
    pub max_hp: u16,
    #[serde(default)]
    pub atk: u16,
    #[serde(default)]
    pub def: u16,
    #[serde(default)]
    pub spd: u16,
}

impl BasicStatus {
    /// Creates a new stat block.
    pub fn new(max_hp: u16, atk: u16, def: u16, spd: u16) -> Self {
        Self {
            max_hp,
            atk,
            def,
            spd,
        }
    }

    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.max_hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spd => self.spd,
        }
    }

    /// Sets the given value in the stat block.
    pub fn set(&mut self, stat: Stat, value: u16) {
        let stat = match stat {
            Stat::HP => &mut self.max_hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::Spd => &mut self.spd,
        };
        *stat = value;
    }

    /// Sums up all stats in the block.
    pub fn sum(&self) -> u32 {
        self.max_hp as u32 + self.atk as u32 + self.def as u32 + self.spd as u32
    }
}
