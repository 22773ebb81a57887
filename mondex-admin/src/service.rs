use ahash::HashMap;
use mondex::{
    SpeciesCatalog,
    ValidationError,
};
use mondex_data::{
    BasicStatus,
    Id,
    Identifiable,
    SpeciesData,
};

use crate::{
    AdminSpecies,
    Category,
    CreateSpeciesRequest,
    Rarity,
    SearchRequest,
    SearchResponse,
    SortKey,
    UpdateSpeciesRequest,
};

/// Maximum species name length accepted by the management surface.
const MAX_NAME_LENGTH: usize = 50;
/// Stat ceiling accepted by the management surface.
const MAX_STAT: u16 = 999;

/// Management metadata the core catalog does not carry.
#[derive(Debug, Clone)]
struct AdminMeta {
    description: String,
    rarity: Rarity,
    category: Category,
    version: u64,
}

impl Default for AdminMeta {
    fn default() -> Self {
        Self {
            description: String::new(),
            rarity: Rarity::default(),
            category: Category::default(),
            version: 1,
        }
    }
}

/// Administrative CRUD service over a species catalog.
///
/// The service owns the catalog and a side table of management metadata (description, rarity,
/// category, version). Every mutating operation validates its whole input first and applies
/// nothing on failure; failures carry the full list of problems.
pub struct AdminService {
    catalog: SpeciesCatalog,
    meta: HashMap<Id, AdminMeta>,
}

impl AdminService {
    /// Creates a service over an empty catalog.
    pub fn new() -> Self {
        Self::from_catalog(SpeciesCatalog::new())
    }

    /// Creates a service adopting an existing catalog.
    ///
    /// Adopted species get default management metadata at version 1.
    pub fn from_catalog(catalog: SpeciesCatalog) -> Self {
        let meta = catalog
            .all()
            .into_iter()
            .map(|species| (species.id(), AdminMeta::default()))
            .collect();
        Self { catalog, meta }
    }

    /// Read-only access to the underlying catalog.
    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    /// Number of managed species.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Checks if no species are managed.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Creates a new species.
    ///
    /// Validation: name is required and at most 50 characters, HP must be in `[1, 999]`, and
    /// attack, defense, and speed must be in `[0, 999]`. A duplicate name is also an error. On
    /// failure, nothing is mutated and every problem found is reported.
    pub fn create(&mut self, request: CreateSpeciesRequest) -> Result<AdminSpecies, ValidationError> {
        let mut problems = validate_fields(&request.name, &request.basic_status);
        if self.catalog.contains(&request.name) {
            problems.add_problem("Species with this name already exists");
        }
        problems.ok()?;

        let species = SpeciesData {
            name: request.name,
            basic_status: request.basic_status,
            weakness: request.weakness,
            strength: request.strength,
            base_skills: request.skills,
            sprite: request.sprite,
        };
        let id = species.id();
        let meta = AdminMeta {
            description: request.description,
            rarity: request.rarity,
            category: request.category,
            version: 1,
        };
        self.catalog.add(species);
        self.meta.insert(id.clone(), meta);
        log::debug!("created species {id}");
        Ok(self.get(id.as_ref()).expect("species was just created"))
    }

    /// Looks up a managed species by ID or name.
    pub fn get(&self, id: &str) -> Option<AdminSpecies> {
        let species = self.catalog.get_by_name(id)?;
        let meta = self.meta.get(&species.id())?;
        Some(assemble(&species, meta))
    }

    /// Searches managed species, with filtering, sorting, and pagination.
    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        let name_query = request
            .name_query
            .as_deref()
            .map(Id::from)
            .filter(|id| !id.is_empty());
        let mut results = self
            .catalog
            .all()
            .into_iter()
            .filter(|species| {
                name_query
                    .as_ref()
                    .is_none_or(|query| species.id().as_ref().contains(query.as_ref()))
            })
            .filter(|species| {
                request
                    .weakness
                    .is_none_or(|weakness| species.weakness == weakness)
            })
            .filter(|species| {
                request
                    .strength
                    .is_none_or(|strength| species.strength == strength)
            })
            .filter(|species| {
                request
                    .min_hp
                    .is_none_or(|min_hp| species.basic_status.max_hp >= min_hp)
            })
            .filter(|species| {
                request
                    .max_hp
                    .is_none_or(|max_hp| species.basic_status.max_hp <= max_hp)
            })
            .filter_map(|species| {
                let meta = self.meta.get(&species.id())?;
                Some(assemble(&species, meta))
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| match request.sort_by {
            SortKey::Name => Id::from(a.name.as_str()).cmp(&Id::from(b.name.as_str())),
            SortKey::Hp => a.basic_status.max_hp.cmp(&b.basic_status.max_hp),
            SortKey::Attack => a.basic_status.atk.cmp(&b.basic_status.atk),
            SortKey::Defense => a.basic_status.def.cmp(&b.basic_status.def),
            SortKey::Speed => a.basic_status.spd.cmp(&b.basic_status.spd),
        });
        if !request.ascending {
            results.reverse();
        }

        let limit = if request.limit == 0 {
            SearchRequest::DEFAULT_LIMIT
        } else {
            request.limit
        };
        let page = request.page.max(1);
        let total_count = results.len();
        let total_pages = total_count.div_ceil(limit).max(1);
        let species = results
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();
        SearchResponse {
            species,
            total_count,
            current_page: page,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Replaces a managed species record.
    ///
    /// Rejected, with no state change, when the target does not exist, the carried version is
    /// stale, the new fields fail validation, or a rename collides with another species. A
    /// successful update bumps the version.
    pub fn update(&mut self, request: UpdateSpeciesRequest) -> Result<AdminSpecies, ValidationError> {
        let id = Id::from(request.id.as_str());
        let current_version = match self.meta.get(&id) {
            Some(meta) => meta.version,
            None => {
                return Err(ValidationError::problem(format!(
                    "Species not found: {}",
                    request.id
                )));
            }
        };

        let mut problems = validate_fields(&request.name, &request.basic_status);
        if request.version != current_version {
            problems.add_problem(format!(
                "Version mismatch: expected {current_version}, got {}",
                request.version
            ));
        }
        let new_id = Id::from(request.name.as_str());
        if new_id != id && self.catalog.contains(&request.name) {
            problems.add_problem("Species with this name already exists");
        }
        problems.ok()?;

        let species = SpeciesData {
            name: request.name,
            basic_status: request.basic_status,
            weakness: request.weakness,
            strength: request.strength,
            base_skills: request.skills,
            sprite: request.sprite,
        };
        let meta = AdminMeta {
            description: request.description,
            rarity: request.rarity,
            category: request.category,
            version: current_version + 1,
        };
        if new_id == id {
            self.catalog.update(species);
        } else {
            // Renames change the key in both tables.
            self.catalog.remove(id.as_ref());
            self.catalog.add(species);
            self.meta.remove(&id);
        }
        self.meta.insert(new_id.clone(), meta);
        log::debug!("updated species {new_id}");
        Ok(self.get(new_id.as_ref()).expect("species was just updated"))
    }

    /// Deletes a managed species by ID or name. Returns true iff it existed.
    pub fn delete(&mut self, id: &str) -> bool {
        let id = Id::from(id);
        if !self.catalog.remove(id.as_ref()) {
            return false;
        }
        self.meta.remove(&id);
        log::debug!("deleted species {id}");
        true
    }
}

impl Default for AdminService {
    fn default() -> Self {
        Self::new()
    }
}

fn assemble(species: &SpeciesData, meta: &AdminMeta) -> AdminSpecies {
    AdminSpecies {
        id: species.id().to_string(),
        name: species.name.clone(),
        description: meta.description.clone(),
        basic_status: species.basic_status,
        weakness: species.weakness,
        strength: species.strength,
        skills: species.base_skills.clone(),
        sprite: species.sprite.clone(),
        rarity: meta.rarity,
        category: meta.category,
        version: meta.version,
    }
}

fn validate_fields(name: &str, status: &BasicStatus) -> ValidationError {
    let mut problems = ValidationError::default();
    if name.trim().is_empty() || Id::from(name).is_empty() {
        problems.add_problem("Species name is required");
    } else if name.chars().count() > MAX_NAME_LENGTH {
        problems.add_problem("Species name must be 50 characters or less");
    }
    if status.max_hp == 0 || status.max_hp > MAX_STAT {
        problems.add_problem("HP must be between 1 and 999");
    }
    if status.atk > MAX_STAT {
        problems.add_problem("Attack must be between 0 and 999");
    }
    if status.def > MAX_STAT {
        problems.add_problem("Defense must be between 0 and 999");
    }
    if status.spd > MAX_STAT {
        problems.add_problem("Speed must be between 0 and 999");
    }
    problems
}
