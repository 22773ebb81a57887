use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// An elemental category.
///
/// Element tags appear in two places: on a skill, as the element the skill attacks with, and on a
/// species, as its configured weakness and strength. A species takes 1.5x damage from its weakness
/// tag and 0.5x damage from its strength tag.
///
/// The last three tags (Healing, Support, Debuff) only make sense on skills, but all tags share
/// one enum so that skill elements and species weaknesses are directly comparable.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum ElementTag {
    #[string = "None"]
    #[default]
    None,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Earth"]
    Earth,
    #[string = "Air"]
    Air,
    #[string = "Light"]
    Light,
    #[string = "Dark"]
    Dark,
    #[string = "Physical"]
    Physical,
    #[string = "Magical"]
    Magical,
    #[string = "Electric"]
    Electric,
    #[string = "Ice"]
    Ice,
    #[string = "Healing"]
    Healing,
    #[string = "Support"]
    Support,
    #[string = "Debuff"]
    Debuff,
}
