use mondex_data::SpeciesData;

/// Observer of [`SpeciesCatalog`][`crate::SpeciesCatalog`] mutations.
///
/// Callbacks run synchronously, after the mutation has been applied and never before. A bulk
/// operation (load, clear) only fires [`catalog_changed`][`CatalogObserver::catalog_changed`],
/// not one callback per record.
pub trait CatalogObserver {
    /// A species was added to the catalog.
    fn species_added(&self, _species: &SpeciesData) {}

    /// A species was removed from the catalog.
    fn species_removed(&self, _species: &SpeciesData) {}

    /// A species record was replaced in place.
    fn species_updated(&self, _species: &SpeciesData) {}

    /// The set of species changed in some way.
    fn catalog_changed(&self) {}
}
