use mondex_data::{
    BasicStatus,
    ElementTag,
    SkillData,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Rarity of a species, for the management surface only. Has no effect on battle math.
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
pub enum Rarity {
    #[string = "Common"]
    #[default]
    Common,
    #[string = "Uncommon"]
    Uncommon,
    #[string = "Rare"]
    Rare,
    #[string = "Epic"]
    Epic,
    #[string = "Legendary"]
    Legendary,
}

/// Broad creature category, for the management surface only.
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
pub enum Category {
    #[string = "Beast"]
    #[default]
    Beast,
    #[string = "Dragon"]
    Dragon,
    #[string = "Elemental"]
    Elemental,
    #[string = "Humanoid"]
    Humanoid,
    #[string = "Undead"]
    Undead,
    #[string = "Plant"]
    Plant,
    #[string = "Machine"]
    Machine,
    #[string = "Spirit"]
    Spirit,
}

/// A fully managed species record, as seen by the administrative surface.
///
/// Extends the core species template with management metadata. `version` increments on every
/// update and is used for optimistic concurrency: an update carrying a stale version is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSpecies {
    /// Normalized species ID.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "basicStatus")]
    pub basic_status: BasicStatus,
    pub weakness: ElementTag,
    pub strength: ElementTag,
    #[serde(default)]
    pub skills: Vec<SkillData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub version: u64,
}

/// Request to create a new species.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateSpeciesRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "basicStatus")]
    pub basic_status: BasicStatus,
    pub weakness: ElementTag,
    pub strength: ElementTag,
    #[serde(default)]
    pub skills: Vec<SkillData>,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub category: Category,
}

/// Request to replace an existing species record.
///
/// This is whole-record replacement, like
/// [`SpeciesCatalog::update`][`mondex::SpeciesCatalog::update`]: every field is written, none are
/// patched. `version` must match the current record.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateSpeciesRequest {
    /// ID of the species to update.
    pub id: String,
    /// Version the caller last read. Mismatch rejects the update.
    pub version: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "basicStatus")]
    pub basic_status: BasicStatus,
    pub weakness: ElementTag,
    pub strength: ElementTag,
    #[serde(default)]
    pub skills: Vec<SkillData>,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub category: Category,
}

/// Sort order for species searches.
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
pub enum SortKey {
    #[string = "name"]
    #[default]
    Name,
    #[string = "hp"]
    Hp,
    #[string = "attack"]
    Attack,
    #[string = "defense"]
    Defense,
    #[string = "speed"]
    Speed,
}

fn default_true() -> bool {
    true
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    SearchRequest::DEFAULT_LIMIT
}

/// Search criteria with pagination.
///
/// All filters are optional and combine conjunctively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Substring match against the normalized species name.
    #[serde(default)]
    pub name_query: Option<String>,
    #[serde(default)]
    pub weakness: Option<ElementTag>,
    #[serde(default)]
    pub strength: Option<ElementTag>,
    #[serde(default)]
    pub min_hp: Option<u16>,
    #[serde(default)]
    pub max_hp: Option<u16>,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default = "default_true")]
    pub ascending: bool,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: usize,
    /// Results per page. Zero falls back to [`SearchRequest::DEFAULT_LIMIT`].
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl SearchRequest {
    /// Default results per page.
    pub const DEFAULT_LIMIT: usize = 20;
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            name_query: None,
            weakness: None,
            strength: None,
            min_hp: None,
            max_hp: None,
            sort_by: SortKey::default(),
            ascending: true,
            page: default_page(),
            limit: default_limit(),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub species: Vec<AdminSpecies>,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}
