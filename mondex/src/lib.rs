mod catalog;
mod error;
mod monsters;
mod party;

pub use catalog::{
    CatalogObserver,
    LoadReport,
    SpeciesCatalog,
};
pub use error::ValidationError;
pub use monsters::Monster;
pub use party::Party;
