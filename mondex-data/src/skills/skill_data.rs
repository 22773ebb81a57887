use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    ElementTag,
    Id,
    Identifiable,
    SkillRange,
    SkillShape,
};

/// Data about a particular skill.
///
/// Skills are leaf data: a monster learns and forgets whole skill records. Two skills are the same
/// skill if their names normalize to the same [`Id`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillData {
    /// Name of the skill.
    pub name: String,
    /// Element the skill attacks with, compared against a target's weakness and strength.
    #[serde(default)]
    pub tag: ElementTag,
    /// Base power.
    #[serde(default)]
    pub power: u32,
    /// Reach of the skill from its user.
    #[serde(default)]
    pub range: SkillRange,
    /// Shape of the affected region.
    #[serde(default)]
    pub shape: SkillShape,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

impl Identifiable for SkillData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}

#[cfg(test)]
mod skill_data_test {
    use pretty_assertions::assert_eq;

    use crate::{
        ElementTag,
        Identifiable,
        SkillData,
        SkillRange,
        SkillShape,
        test_util::test_deserialization,
    };

    #[test]
    fn deserializes_full_record() {
        test_deserialization(
            r#"{
                "name": "Ember",
                "tag": "Fire",
                "power": 40,
                "range": "Single",
                "shape": "Point",
                "description": "A weak fire attack."
            }"#,
            SkillData {
                name: "Ember".to_owned(),
                tag: ElementTag::Fire,
                power: 40,
                range: SkillRange::Single,
                shape: SkillShape::Point,
                description: "A weak fire attack.".to_owned(),
            },
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        test_deserialization(
            r#"{ "name": "Tackle" }"#,
            SkillData {
                name: "Tackle".to_owned(),
                ..Default::default()
            },
        );
    }

    #[test]
    fn id_normalizes_name() {
        let skill = SkillData {
            name: "Thunder Clap".to_owned(),
            ..Default::default()
        };
        assert_eq!(skill.id().as_ref(), "thunderclap");
    }
}
