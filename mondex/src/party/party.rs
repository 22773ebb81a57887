use mondex_data::Id;

use crate::Monster;

/// A bounded, ordered collection of monsters under a player's control.
#[derive(Debug, Clone)]
pub struct Party {
    members: Vec<Monster>,
    max_size: usize,
}

impl Party {
    /// The default party size limit.
    pub const DEFAULT_MAX_SIZE: usize = 6;

    /// Creates an empty party with the default size limit.
    pub fn new() -> Self {
        Self::with_max_size(Self::DEFAULT_MAX_SIZE)
    }

    /// Creates an empty party with a custom size limit.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            members: Vec::new(),
            max_size,
        }
    }

    /// The party size limit.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Current party members, in order.
    pub fn members(&self) -> &[Monster] {
        &self.members
    }

    /// Adds a monster to the back of the party. Fails when the party is full.
    pub fn add(&mut self, monster: Monster) -> bool {
        if self.is_full() {
            log::debug!("party is full; cannot add {}", monster.nickname());
            return false;
        }
        log::debug!("added {} to party", monster.nickname());
        self.members.push(monster);
        true
    }

    /// Removes and returns the monster at the given position.
    pub fn remove(&mut self, index: usize) -> Option<Monster> {
        if index >= self.members.len() {
            return None;
        }
        Some(self.members.remove(index))
    }

    /// The monster at the given position.
    pub fn get(&self, index: usize) -> Option<&Monster> {
        self.members.get(index)
    }

    /// Mutable access to the monster at the given position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Monster> {
        self.members.get_mut(index)
    }

    /// The first monster whose nickname matches, by normalized ID.
    pub fn get_by_nickname(&self, nickname: &str) -> Option<&Monster> {
        let id = Id::from(nickname);
        self.members
            .iter()
            .find(|monster| Id::from(monster.nickname()) == id)
    }

    /// Mutable variant of [`get_by_nickname`][`Self::get_by_nickname`].
    pub fn get_by_nickname_mut(&mut self, nickname: &str) -> Option<&mut Monster> {
        let id = Id::from(nickname);
        self.members
            .iter_mut()
            .find(|monster| Id::from(monster.nickname()) == id)
    }

    /// Iterates over members that have not fainted.
    pub fn alive(&self) -> impl Iterator<Item = &Monster> {
        self.members.iter().filter(|monster| !monster.fainted())
    }

    /// Iterates over fainted members.
    pub fn fainted(&self) -> impl Iterator<Item = &Monster> {
        self.members.iter().filter(|monster| monster.fainted())
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Checks if the party has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of open slots.
    pub fn available_slots(&self) -> usize {
        self.max_size.saturating_sub(self.members.len())
    }

    /// Checks if the party is at its size limit.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_size
    }

    /// Fully heals every member, reviving the fainted ones.
    pub fn heal_all(&mut self) {
        for monster in &mut self.members {
            monster.full_heal();
        }
    }

    /// Mean level across members, or 0 for an empty party.
    pub fn average_level(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let total: u32 = self.members.iter().map(|monster| monster.level() as u32).sum();
        total as f64 / self.members.len() as f64
    }
}

impl Default for Party {
    fn default() -> Self {
        Self::new()
    }
}
