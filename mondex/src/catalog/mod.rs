mod catalog;
mod observer;

pub use catalog::{
    LoadReport,
    SpeciesCatalog,
};
pub use observer::CatalogObserver;
