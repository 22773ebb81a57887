use crate::{
    BasicStatus,
    ElementTag,
    SkillData,
    SkillRange,
    SkillShape,
    SpeciesData,
};

fn skill(name: &str, tag: ElementTag, power: u32, range: SkillRange, shape: SkillShape) -> SkillData {
    SkillData {
        name: name.to_owned(),
        tag,
        power,
        range,
        shape,
        description: String::new(),
    }
}

fn species(
    name: &str,
    status: BasicStatus,
    weakness: ElementTag,
    strength: ElementTag,
    base_skills: Vec<SkillData>,
) -> SpeciesData {
    SpeciesData {
        name: name.to_owned(),
        basic_status: status,
        weakness,
        strength,
        base_skills,
        sprite: None,
    }
}

/// The built-in sample species.
///
/// Used as the default seed when no external species records are available, and by tests that need
/// a realistic catalog.
pub fn sample_species() -> Vec<SpeciesData> {
    Vec::from([
        species(
            "Flame Dragon",
            BasicStatus::new(150, 120, 80, 70),
            ElementTag::Ice,
            ElementTag::Fire,
            Vec::from([
                skill(
                    "Flame Breath",
                    ElementTag::Fire,
                    60,
                    SkillRange::Line,
                    SkillShape::Cone,
                ),
                skill(
                    "Tail Swipe",
                    ElementTag::Physical,
                    40,
                    SkillRange::Adjacent,
                    SkillShape::Point,
                ),
            ]),
        ),
        species(
            "Forest Wolf",
            BasicStatus::new(80, 75, 55, 90),
            ElementTag::Fire,
            ElementTag::Earth,
            Vec::from([skill(
                "Bite",
                ElementTag::Physical,
                35,
                SkillRange::Single,
                SkillShape::Point,
            )]),
        ),
        species(
            "Crystal Golem",
            BasicStatus::new(200, 60, 120, 30),
            ElementTag::Dark,
            ElementTag::Light,
            Vec::from([skill(
                "Crystal Slam",
                ElementTag::Light,
                50,
                SkillRange::Adjacent,
                SkillShape::Point,
            )]),
        ),
        species(
            "Thunder Bird",
            BasicStatus::new(100, 90, 50, 110),
            ElementTag::Earth,
            ElementTag::Electric,
            Vec::from([skill(
                "Thunder Clap",
                ElementTag::Electric,
                55,
                SkillRange::Area,
                SkillShape::Circle,
            )]),
        ),
        species(
            "Ice Bear",
            BasicStatus::new(140, 85, 90, 40),
            ElementTag::Fire,
            ElementTag::Ice,
            Vec::from([skill(
                "Frost Claw",
                ElementTag::Ice,
                45,
                SkillRange::Single,
                SkillShape::Point,
            )]),
        ),
    ])
}

#[cfg(test)]
mod sample_test {
    use std::collections::BTreeSet;

    use crate::{
        Identifiable,
        sample_species,
    };

    #[test]
    fn sample_species_have_unique_ids() {
        let species = sample_species();
        let ids = species
            .iter()
            .map(|species| species.id())
            .collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), species.len());
    }

    #[test]
    fn sample_species_have_stats_and_skills() {
        for species in sample_species() {
            assert!(species.basic_status.max_hp > 0, "{} has no HP", species.name);
            assert!(
                !species.base_skills.is_empty(),
                "{} has no base skills",
                species.name
            );
        }
    }
}
