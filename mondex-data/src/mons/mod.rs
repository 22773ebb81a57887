mod element;
mod sample;
mod species_data;
mod stat;

pub use element::ElementTag;
pub use sample::sample_species;
pub use species_data::SpeciesData;
pub use stat::{
    BasicStatus,
    Stat,
};
