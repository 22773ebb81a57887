mod schema;
mod service;

pub use schema::{
    AdminSpecies,
    Category,
    CreateSpeciesRequest,
    Rarity,
    SearchRequest,
    SearchResponse,
    SortKey,
    UpdateSpeciesRequest,
};
pub use service::AdminService;
