use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The shape of the battlefield region a skill affects.
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
pub enum SkillShape {
    #[string = "Point"]
    #[default]
    Point,
    #[string = "Line"]
    Line,
    #[string = "Cross"]
    Cross,
    #[string = "Square"]
    Square,
    #[string = "Circle"]
    Circle,
    #[string = "Cone"]
    Cone,
}
