use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// How far from its user a skill can reach on the battlefield.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum SkillRange {
    /// The skill only affects its user.
    #[string = "Self"]
    #[default]
    User,
    #[string = "Single"]
    Single,
    #[string = "Adjacent"]
    Adjacent,
    #[string = "Cross"]
    Cross,
    #[string = "Line"]
    Line,
    #[string = "Area"]
    Area,
    #[string = "All"]
    All,
}
