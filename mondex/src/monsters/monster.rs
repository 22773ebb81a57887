use std::{
    fmt,
    fmt::Display,
    sync::Arc,
};

use mondex_data::{
    ElementTag,
    Id,
    Identifiable,
    SkillData,
    SpeciesData,
};

/// Per-level growth of max HP.
const HP_GROWTH: f64 = 0.10;
/// Per-level growth of attack.
const ATK_GROWTH: f64 = 0.08;
/// Per-level growth of defense.
const DEF_GROWTH: f64 = 0.06;
/// Per-level growth of speed.
const SPD_GROWTH: f64 = 0.05;

/// Rounds half away from zero, like the stat formulas expect.
fn scale_stat(base: u16, growth: f64, level: u8) -> u16 {
    (base as f64 * (1.0 + (level - 1) as f64 * growth)).round() as u16
}

/// An individual monster derived from a species template.
///
/// A monster shares its immutable [`SpeciesData`] template and layers mutable individual state on
/// top: a nickname, a level, learned skills, and current HP. Derived stats are recomputed from the
/// template on every access, so changing the level immediately changes every derived stat.
///
/// A monster is alive or fainted. HP reaching 0 faints it; while fainted, [`heal`][`Self::heal`]
/// is a no-op and only [`full_heal`][`Self::full_heal`] brings it back.
#[derive(Debug, Clone)]
pub struct Monster {
    nickname: String,
    species: Arc<SpeciesData>,
    level: u8,
    learned_skills: Vec<SkillData>,
    current_hp: u16,
    fainted: bool,
}

impl Monster {
    /// Creates a new monster of the given species.
    ///
    /// The level is clamped to at least 1, an empty nickname defaults to the species name, the
    /// species' base skills are copied in as the starting skill set, and HP starts at the
    /// level-scaled maximum.
    pub fn new(species: Arc<SpeciesData>, nickname: &str, level: u8) -> Self {
        let nickname = if nickname.is_empty() {
            species.name.clone()
        } else {
            nickname.to_owned()
        };
        let learned_skills = species.base_skills.clone();
        let mut monster = Self {
            nickname,
            species,
            level: level.max(1),
            learned_skills,
            current_hp: 0,
            fainted: false,
        };
        monster.current_hp = monster.max_hp();
        monster
    }

    /// The monster's nickname.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// The species template this monster is derived from.
    pub fn species(&self) -> &Arc<SpeciesData> {
        &self.species
    }

    /// The monster's level, at least 1.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Current HP, in `[0, max_hp()]`.
    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    /// Has the monster fainted?
    ///
    /// True exactly when current HP is 0.
    pub fn fainted(&self) -> bool {
        self.fainted
    }

    /// Level-scaled max HP: `round(base * (1 + (level - 1) * 0.10))`.
    pub fn max_hp(&self) -> u16 {
        scale_stat(self.species.basic_status.max_hp, HP_GROWTH, self.level)
    }

    /// Level-scaled attack: `round(base * (1 + (level - 1) * 0.08))`.
    pub fn attack(&self) -> u16 {
        scale_stat(self.species.basic_status.atk, ATK_GROWTH, self.level)
    }

    /// Level-scaled defense: `round(base * (1 + (level - 1) * 0.06))`.
    pub fn defense(&self) -> u16 {
        scale_stat(self.species.basic_status.def, DEF_GROWTH, self.level)
    }

    /// Level-scaled speed: `round(base * (1 + (level - 1) * 0.05))`.
    pub fn speed(&self) -> u16 {
        scale_stat(self.species.basic_status.spd, SPD_GROWTH, self.level)
    }

    /// Skills the monster currently knows, in learn order.
    pub fn learned_skills(&self) -> &[SkillData] {
        &self.learned_skills
    }

    /// Applies damage. HP stops at 0, regardless of overkill, and the monster faints there.
    ///
    /// Damage is unsigned, so "negative damage" cannot be expressed.
    pub fn take_damage(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_sub(amount);
        if self.current_hp == 0 {
            self.fainted = true;
        }
    }

    /// Restores HP, clamped to max HP. Does nothing while fainted.
    pub fn heal(&mut self, amount: u16) {
        if self.fainted {
            return;
        }
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp());
    }

    /// Restores HP to the maximum and clears the fainted state.
    ///
    /// This revives a fainted monster. That is intentional: full heal is the only way out of the
    /// fainted state.
    pub fn full_heal(&mut self) {
        self.current_hp = self.max_hp();
        self.fainted = false;
    }

    /// Raises the level by one, keeping the current HP ratio.
    ///
    /// The ratio is taken against the max HP before the increment, then applied to the new max:
    /// a monster at half HP stays at half HP of its larger pool. A ratio low enough to round the
    /// rescaled HP to 0 faints the monster.
    pub fn level_up(&mut self) {
        let ratio = self.hp_ratio();
        self.level = self.level.saturating_add(1);
        self.rescale_hp(ratio);
    }

    /// Sets the level directly, keeping the current HP ratio as in
    /// [`level_up`][`Self::level_up`]. Does nothing for level 0.
    pub fn set_level(&mut self, level: u8) {
        if level < 1 {
            return;
        }
        let ratio = self.hp_ratio();
        self.level = level;
        self.rescale_hp(ratio);
    }

    fn rescale_hp(&mut self, ratio: f64) {
        self.current_hp = (self.max_hp() as f64 * ratio).round() as u16;
        // HP at 0 and the fainted state must never disagree.
        self.fainted = self.current_hp == 0;
    }

    fn hp_ratio(&self) -> f64 {
        let max_hp = self.max_hp();
        if max_hp == 0 {
            return 0.0;
        }
        self.current_hp as f64 / max_hp as f64
    }

    /// Learns a skill. Fails if a skill with the same name is already known.
    pub fn learn_skill(&mut self, skill: SkillData) -> bool {
        if self.has_skill(&skill.name) {
            return false;
        }
        self.learned_skills.push(skill);
        true
    }

    /// Forgets the skill with the given name. Returns true iff the skill was known.
    pub fn forget_skill(&mut self, name: &str) -> bool {
        let id = Id::from(name);
        match self.learned_skills.iter().position(|skill| skill.id() == id) {
            Some(index) => {
                self.learned_skills.remove(index);
                true
            }
            None => false,
        }
    }

    /// Does the monster know a skill with the given name?
    pub fn has_skill(&self, name: &str) -> bool {
        let id = Id::from(name);
        self.learned_skills.iter().any(|skill| skill.id() == id)
    }

    /// Is the monster's species weak to the given attacking element?
    pub fn is_weak_to(&self, attack_tag: ElementTag) -> bool {
        self.species.is_weak_to(attack_tag)
    }

    /// Is the monster's species strong against the given attacking element?
    pub fn is_strong_against(&self, attack_tag: ElementTag) -> bool {
        self.species.is_strong_against(attack_tag)
    }

    /// The damage multiplier for an attack of the given element against this monster.
    pub fn damage_multiplier(&self, attack_tag: ElementTag) -> f64 {
        self.species.damage_multiplier(attack_tag)
    }
}

impl Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Lv.{}) HP:{}/{} ATK:{} DEF:{} SPD:{}",
            self.nickname,
            self.level,
            self.current_hp,
            self.max_hp(),
            self.attack(),
            self.defense(),
            self.speed(),
        )
    }
}
