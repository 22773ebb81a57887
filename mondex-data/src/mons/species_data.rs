use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    BasicStatus,
    ElementTag,
    Id,
    Identifiable,
    SkillData,
};

/// Damage multiplier against a species' configured weakness.
const WEAKNESS_MULTIPLIER: f64 = 1.5;
/// Damage multiplier against a species' configured strength.
const STRENGTH_MULTIPLIER: f64 = 0.5;

/// Data about a particular species.
///
/// Species data is immutable template data shared by every monster of the species. Data about an
/// individual monster (level, current HP, learned skills) does not belong here.
///
/// This struct is also the external record shape: a catalog persists to and loads from a JSON
/// array of these records. Records with an unknown weakness or strength label fail to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The name of the species.
    ///
    /// The name should be unique across all species in a catalog. Uniqueness is judged by the
    /// normalized [`Id`], not the raw string.
    pub name: String,
    /// Base stats, before any level scaling.
    #[serde(rename = "basicStatus")]
    pub basic_status: BasicStatus,
    /// Element the species takes increased damage from.
    pub weakness: ElementTag,
    /// Element the species takes reduced damage from.
    pub strength: ElementTag,
    /// Skills every monster of this species starts with.
    #[serde(rename = "baseSkills", default)]
    pub base_skills: Vec<SkillData>,
    /// Opaque handle to an external sprite resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
}

impl SpeciesData {
    /// Is the species weak to the given attacking element?
    pub fn is_weak_to(&self, attack_tag: ElementTag) -> bool {
        self.weakness == attack_tag
    }

    /// Is the species strong against the given attacking element?
    pub fn is_strong_against(&self, attack_tag: ElementTag) -> bool {
        self.strength == attack_tag
    }

    /// The damage multiplier for an attack of the given element against this species.
    ///
    /// Weakness is checked first, so a species misconfigured with the same tag for both weakness
    /// and strength takes increased damage.
    pub fn damage_multiplier(&self, attack_tag: ElementTag) -> f64 {
        if self.is_weak_to(attack_tag) {
            WEAKNESS_MULTIPLIER
        } else if self.is_strong_against(attack_tag) {
            STRENGTH_MULTIPLIER
        } else {
            1.0
        }
    }
}

impl Identifiable for SpeciesData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}
