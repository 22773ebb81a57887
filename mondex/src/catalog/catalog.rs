use std::sync::Arc;

use anyhow::{
    Context,
    Result,
};
use indexmap::IndexMap;
use mondex_data::{
    ElementTag,
    Id,
    Identifiable,
    SpeciesData,
    sample_species,
};

use crate::catalog::CatalogObserver;

/// The result of loading a catalog from raw records.
///
/// Loading has partial-failure semantics: a record that cannot be understood is skipped and
/// reported here, while the rest of the load continues.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records loaded into the catalog.
    pub loaded: usize,
    /// One diagnostic per skipped record.
    pub skipped: Vec<String>,
}

/// An in-memory registry of species templates.
///
/// The catalog is the single source of truth for species data. Templates are keyed by their
/// normalized [`Id`], so names are unique per catalog and lookup by name is case-insensitive
/// (`"Flame Dragon"`, `"flamedragon"`, and `"FLAME DRAGON"` all find the same template).
///
/// Templates are handed out as [`Arc`] clones: a monster holding a species reference keeps the
/// template alive even after it is removed from the catalog, and nothing reachable through a
/// returned handle can mutate catalog state.
///
/// There is no global instance. Construct a catalog and pass it to whatever needs one.
#[derive(Default)]
pub struct SpeciesCatalog {
    species: IndexMap<Id, Arc<SpeciesData>>,
    observers: Vec<Box<dyn CatalogObserver>>,
}

impl SpeciesCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with the built-in sample species.
    ///
    /// Intended as the fallback when no external species records are available.
    pub fn with_samples() -> Self {
        let mut catalog = Self::new();
        for species in sample_species() {
            catalog.add(species);
        }
        catalog
    }

    /// Registers an observer, notified synchronously after every successful mutation.
    pub fn subscribe(&mut self, observer: Box<dyn CatalogObserver>) {
        self.observers.push(observer);
    }

    fn notify(&self, f: impl Fn(&dyn CatalogObserver)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }

    /// Adds a species template.
    ///
    /// Fails (returns false, no state change) if the species has no usable name or a template
    /// with the same name is already registered.
    pub fn add(&mut self, species: SpeciesData) -> bool {
        let id = species.id();
        if id.is_empty() {
            log::warn!("cannot add species with no name");
            return false;
        }
        if self.species.contains_key(&id) {
            log::warn!("species {} is already registered", species.name);
            return false;
        }
        let species = Arc::new(species);
        self.species.insert(id, species.clone());
        log::debug!("added species: {}", species.name);
        self.notify(|observer| observer.species_added(&species));
        self.notify(|observer| observer.catalog_changed());
        true
    }

    /// Removes the species template with the given name.
    ///
    /// Removal may shift the positional order of the remaining templates, so indices obtained
    /// from [`get_by_index`][`Self::get_by_index`] must not be cached across mutations.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.species.swap_remove(&Id::from(name)) {
            Some(species) => {
                log::debug!("removed species: {}", species.name);
                self.notify(|observer| observer.species_removed(&species));
                self.notify(|observer| observer.catalog_changed());
                true
            }
            None => false,
        }
    }

    /// Replaces the template with the same name as the given species.
    ///
    /// Whole-record replacement: there is no field-level patching. Returns false if no template
    /// with that name is registered. Monsters holding the old template keep it; only future
    /// lookups see the replacement.
    pub fn update(&mut self, species: SpeciesData) -> bool {
        let id = species.id();
        if !self.species.contains_key(&id) {
            return false;
        }
        let species = Arc::new(species);
        self.species.insert(id, species.clone());
        log::debug!("updated species: {}", species.name);
        self.notify(|observer| observer.species_updated(&species));
        self.notify(|observer| observer.catalog_changed());
        true
    }

    /// Looks up a species template by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<SpeciesData>> {
        self.species.get(&Id::from(name)).cloned()
    }

    /// Looks up a species template by position in the current iteration order.
    ///
    /// Positions are not stable identities: they shift after removal.
    pub fn get_by_index(&self, index: usize) -> Option<Arc<SpeciesData>> {
        self.species.get_index(index).map(|(_, species)| species.clone())
    }

    /// Checks if a species with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.species.contains_key(&Id::from(name))
    }

    /// Number of registered species.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// All species templates, in the current iteration order.
    pub fn all(&self) -> Vec<Arc<SpeciesData>> {
        self.species.values().cloned().collect()
    }

    /// Removes every species template.
    pub fn clear(&mut self) {
        if self.species.is_empty() {
            return;
        }
        self.species.clear();
        log::debug!("cleared all species");
        self.notify(|observer| observer.catalog_changed());
    }

    /// All species weak to the given element.
    pub fn filter_by_weakness(&self, weakness: ElementTag) -> Vec<Arc<SpeciesData>> {
        self.species
            .values()
            .filter(|species| species.weakness == weakness)
            .cloned()
            .collect()
    }

    /// All species strong against the given element.
    pub fn filter_by_strength(&self, strength: ElementTag) -> Vec<Arc<SpeciesData>> {
        self.species
            .values()
            .filter(|species| species.strength == strength)
            .cloned()
            .collect()
    }

    /// All species whose base max HP falls in the given inclusive range.
    pub fn filter_by_hp_range(&self, min_hp: u16, max_hp: u16) -> Vec<Arc<SpeciesData>> {
        self.species
            .values()
            .filter(|species| {
                species.basic_status.max_hp >= min_hp && species.basic_status.max_hp <= max_hp
            })
            .cloned()
            .collect()
    }

    /// Replaces the entire catalog content with the given raw records.
    ///
    /// Records that fail to deserialize, lack a name, or duplicate an earlier record's name are
    /// skipped and reported in the [`LoadReport`]; the rest of the load continues.
    pub fn load_from_records(&mut self, records: Vec<serde_json::Value>) -> LoadReport {
        self.species.clear();
        let mut report = LoadReport::default();
        for (index, record) in records.into_iter().enumerate() {
            let species = match serde_json::from_value::<SpeciesData>(record) {
                Ok(species) => species,
                Err(error) => {
                    report.skipped.push(format!("record {index}: {error}"));
                    continue;
                }
            };
            let id = species.id();
            if id.is_empty() {
                report.skipped.push(format!("record {index}: missing name"));
                continue;
            }
            if self.species.contains_key(&id) {
                report.skipped.push(format!(
                    "record {index}: duplicate species name: {}",
                    species.name
                ));
                continue;
            }
            self.species.insert(id, Arc::new(species));
            report.loaded += 1;
        }
        for diagnostic in &report.skipped {
            log::warn!("skipped species {diagnostic}");
        }
        log::debug!(
            "loaded {} species ({} skipped)",
            report.loaded,
            report.skipped.len()
        );
        self.notify(|observer| observer.catalog_changed());
        report
    }

    /// Parses a JSON array of species records and loads it with
    /// [`load_from_records`][`Self::load_from_records`].
    ///
    /// A document that is not a JSON array at all is an error, and the catalog is left untouched;
    /// callers typically fall back to [`with_samples`][`Self::with_samples`].
    pub fn load_from_json(&mut self, json: &str) -> Result<LoadReport> {
        let records = serde_json::from_str::<Vec<serde_json::Value>>(json)
            .context("failed to parse species records")?;
        Ok(self.load_from_records(records))
    }

    /// Serializes all templates back into raw records.
    ///
    /// Round-trip partner of [`load_from_records`][`Self::load_from_records`]. Derived values
    /// (level-scaled stats, damage multipliers) are not part of the record shape; they are
    /// re-derived after a load.
    pub fn save_to_records(&self) -> Vec<SpeciesData> {
        self.species
            .values()
            .map(|species| species.as_ref().clone())
            .collect()
    }

    /// Serializes all templates into the JSON array form consumed by
    /// [`load_from_json`][`Self::load_from_json`].
    pub fn save_to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.save_to_records())
            .context("failed to serialize species records")
    }

    /// Reports consistency issues without mutating anything.
    ///
    /// Duplicate names are structurally impossible here (templates are keyed by ID), so this only
    /// checks the per-record problems the external representation could have smuggled in.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for (index, species) in self.species.values().enumerate() {
            if species.name.trim().is_empty() {
                issues.push(format!("species at index {index} has no name"));
            }
            if species.basic_status.max_hp == 0 {
                issues.push(format!("species {} has no HP", species.name));
            }
        }
        issues
    }
}
