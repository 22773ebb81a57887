use assert_matches::assert_matches;
use mondex::SpeciesCatalog;
use mondex_admin::{
    AdminService,
    Category,
    CreateSpeciesRequest,
    Rarity,
    SearchRequest,
    SortKey,
    UpdateSpeciesRequest,
};
use mondex_data::{
    BasicStatus,
    ElementTag,
};
use pretty_assertions::assert_eq;

fn create_request(name: &str, status: BasicStatus) -> CreateSpeciesRequest {
    CreateSpeciesRequest {
        name: name.to_owned(),
        description: format!("A {name} species"),
        basic_status: status,
        weakness: ElementTag::Ice,
        strength: ElementTag::Fire,
        rarity: Rarity::Rare,
        category: Category::Dragon,
        ..Default::default()
    }
}

#[test]
fn creates_species_with_metadata() {
    let mut service = AdminService::new();
    let created = service
        .create(create_request("Flame Dragon", BasicStatus::new(150, 120, 80, 70)))
        .unwrap();
    assert_eq!(created.id, "flamedragon");
    assert_eq!(created.name, "Flame Dragon");
    assert_eq!(created.description, "A Flame Dragon species");
    assert_eq!(created.rarity, Rarity::Rare);
    assert_eq!(created.category, Category::Dragon);
    assert_eq!(created.version, 1);

    // The core catalog holds the template.
    assert!(service.catalog().contains("Flame Dragon"));
}

#[test]
fn create_reports_every_validation_problem() {
    let mut service = AdminService::new();
    let error = service
        .create(CreateSpeciesRequest {
            name: String::new(),
            basic_status: BasicStatus::new(0, 1000, 1000, 1000),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(
        error.problems().collect::<Vec<_>>(),
        Vec::from([
            "Species name is required",
            "HP must be between 1 and 999",
            "Attack must be between 0 and 999",
            "Defense must be between 0 and 999",
            "Speed must be between 0 and 999",
        ])
    );
    assert!(service.is_empty());
}

#[test]
fn create_rejects_overlong_names() {
    let mut service = AdminService::new();
    let error = service
        .create(create_request(&"x".repeat(51), BasicStatus::new(100, 50, 50, 50)))
        .unwrap_err();
    assert_eq!(
        error.problems().collect::<Vec<_>>(),
        Vec::from(["Species name must be 50 characters or less"])
    );
}

#[test]
fn create_rejects_duplicate_names() {
    let mut service = AdminService::new();
    service
        .create(create_request("Flame Dragon", BasicStatus::new(150, 120, 80, 70)))
        .unwrap();
    let error = service
        .create(create_request("flame dragon", BasicStatus::new(1, 1, 1, 1)))
        .unwrap_err();
    assert_eq!(
        error.problems().collect::<Vec<_>>(),
        Vec::from(["Species with this name already exists"])
    );
    assert_eq!(service.len(), 1);
}

#[test]
fn adopts_an_existing_catalog() {
    let service = AdminService::from_catalog(SpeciesCatalog::with_samples());
    assert_eq!(service.len(), 5);
    assert_matches!(service.get("Forest Wolf"), Some(species) => {
        assert_eq!(species.version, 1);
        assert_eq!(species.rarity, Rarity::Common);
    });
    assert_matches!(service.get("nobody"), None);
}

#[test]
fn update_bumps_version() {
    let mut service = AdminService::new();
    let created = service
        .create(create_request("Flame Dragon", BasicStatus::new(150, 120, 80, 70)))
        .unwrap();

    let updated = service
        .update(UpdateSpeciesRequest {
            id: created.id.clone(),
            version: created.version,
            name: created.name.clone(),
            description: "Now with more flames".to_owned(),
            basic_status: BasicStatus::new(160, 125, 80, 70),
            weakness: created.weakness,
            strength: created.strength,
            rarity: created.rarity,
            category: created.category,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(updated.version, 2);
    assert_eq!(updated.basic_status.max_hp, 160);
    assert_eq!(updated.description, "Now with more flames");
}

#[test]
fn update_rejects_stale_versions() {
    let mut service = AdminService::new();
    let created = service
        .create(create_request("Flame Dragon", BasicStatus::new(150, 120, 80, 70)))
        .unwrap();

    let request = UpdateSpeciesRequest {
        id: created.id.clone(),
        version: created.version,
        name: created.name.clone(),
        basic_status: created.basic_status,
        weakness: created.weakness,
        strength: created.strength,
        ..Default::default()
    };
    service.update(request.clone()).unwrap();

    // Replaying the same request now carries a stale version.
    let error = service.update(request).unwrap_err();
    assert_eq!(
        error.problems().collect::<Vec<_>>(),
        Vec::from(["Version mismatch: expected 2, got 1"])
    );
    assert_eq!(service.get("Flame Dragon").unwrap().version, 2);
}

#[test]
fn update_rejects_unknown_species() {
    let mut service = AdminService::new();
    let error = service
        .update(UpdateSpeciesRequest {
            id: "nobody".to_owned(),
            version: 1,
            name: "Nobody".to_owned(),
            basic_status: BasicStatus::new(1, 1, 1, 1),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(
        error.problems().collect::<Vec<_>>(),
        Vec::from(["Species not found: nobody"])
    );
}

#[test]
fn update_can_rename_but_not_collide() {
    let mut service = AdminService::new();
    let dragon = service
        .create(create_request("Flame Dragon", BasicStatus::new(150, 120, 80, 70)))
        .unwrap();
    service
        .create(create_request("Forest Wolf", BasicStatus::new(80, 75, 55, 90)))
        .unwrap();

    let error = service
        .update(UpdateSpeciesRequest {
            id: dragon.id.clone(),
            version: dragon.version,
            name: "Forest Wolf".to_owned(),
            basic_status: dragon.basic_status,
            weakness: dragon.weakness,
            strength: dragon.strength,
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(
        error.problems().collect::<Vec<_>>(),
        Vec::from(["Species with this name already exists"])
    );

    let renamed = service
        .update(UpdateSpeciesRequest {
            id: dragon.id.clone(),
            version: dragon.version,
            name: "Ember Dragon".to_owned(),
            basic_status: dragon.basic_status,
            weakness: dragon.weakness,
            strength: dragon.strength,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(renamed.id, "emberdragon");
    assert_eq!(renamed.version, 2);
    assert!(service.get("Flame Dragon").is_none());
    assert!(service.catalog().contains("Ember Dragon"));
}

#[test]
fn deletes_by_id_or_name() {
    let mut service = AdminService::from_catalog(SpeciesCatalog::with_samples());
    assert!(service.delete("Forest Wolf"));
    assert!(!service.delete("Forest Wolf"));
    assert_eq!(service.len(), 4);
    assert!(service.get("Forest Wolf").is_none());
}

fn seeded_service(count: usize) -> AdminService {
    let mut service = AdminService::new();
    for i in 0..count {
        service
            .create(CreateSpeciesRequest {
                name: format!("Species {i:02}"),
                basic_status: BasicStatus::new(100 + i as u16, 50 + i as u16, 50, 50),
                weakness: if i % 2 == 0 {
                    ElementTag::Fire
                } else {
                    ElementTag::Water
                },
                strength: ElementTag::Earth,
                ..Default::default()
            })
            .unwrap();
    }
    service
}

#[test]
fn search_paginates() {
    let service = seeded_service(25);
    let response = service.search(&SearchRequest {
        limit: 10,
        ..Default::default()
    });
    assert_eq!(response.total_count, 25);
    assert_eq!(response.total_pages, 3);
    assert_eq!(response.current_page, 1);
    assert_eq!(response.species.len(), 10);
    assert!(response.has_next);
    assert!(!response.has_previous);

    let last = service.search(&SearchRequest {
        limit: 10,
        page: 3,
        ..Default::default()
    });
    assert_eq!(last.species.len(), 5);
    assert!(!last.has_next);
    assert!(last.has_previous);

    let beyond = service.search(&SearchRequest {
        limit: 10,
        page: 9,
        ..Default::default()
    });
    assert!(beyond.species.is_empty());
}

#[test]
fn search_filters_by_tag_and_hp() {
    let service = seeded_service(10);
    let weak_to_fire = service.search(&SearchRequest {
        weakness: Some(ElementTag::Fire),
        ..Default::default()
    });
    assert_eq!(weak_to_fire.total_count, 5);

    let bulky = service.search(&SearchRequest {
        min_hp: Some(105),
        max_hp: Some(107),
        ..Default::default()
    });
    assert_eq!(
        bulky
            .species
            .iter()
            .map(|species| species.name.as_str())
            .collect::<Vec<_>>(),
        Vec::from(["Species 05", "Species 06", "Species 07"])
    );
}

#[test]
fn search_matches_name_substrings_case_insensitively() {
    let service = AdminService::from_catalog(SpeciesCatalog::with_samples());
    let response = service.search(&SearchRequest {
        name_query: Some("DRAG".to_owned()),
        ..Default::default()
    });
    assert_eq!(response.total_count, 1);
    assert_eq!(response.species[0].name, "Flame Dragon");
}

#[test]
fn search_sorts_by_stat_descending() {
    let service = AdminService::from_catalog(SpeciesCatalog::with_samples());
    let response = service.search(&SearchRequest {
        sort_by: SortKey::Hp,
        ascending: false,
        ..Default::default()
    });
    assert_eq!(
        response
            .species
            .iter()
            .map(|species| species.name.as_str())
            .collect::<Vec<_>>(),
        Vec::from([
            "Crystal Golem",
            "Flame Dragon",
            "Ice Bear",
            "Thunder Bird",
            "Forest Wolf",
        ])
    );
}
