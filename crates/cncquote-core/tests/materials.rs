use cncquote_core::data::materials::*;
use cncquote_core::CatalogError;

#[test]
fn test_standard_catalog_has_six_materials() {
    let catalog = standard_catalog();
    assert_eq!(catalog.len(), 6);
    assert_eq!(
        catalog.names(),
        vec!["aluminum", "brass", "copper", "plastic", "steel", "wood"]
    );
}

#[test]
fn test_standard_catalog_profiles_are_valid() {
    let catalog = standard_catalog();
    for profile in catalog.iter() {
        assert!(profile.validate().is_ok(), "{} is invalid", profile.name);
        assert_eq!(profile.setup_time_min, DEFAULT_SETUP_TIME_MIN);
        assert_eq!(profile.tool_change_time_min, DEFAULT_TOOL_CHANGE_TIME_MIN);
    }
}

#[test]
fn test_standard_catalog_values() {
    let catalog = standard_catalog();

    let steel = catalog.get("steel").unwrap();
    assert_eq!(steel.feed_rate_mm_per_min, 300.0);
    assert_eq!(steel.density_cost_per_cm3, 0.08);
    assert_eq!(steel.machine_rate_per_hour, 45.0);

    let wood = catalog.get("wood").unwrap();
    assert_eq!(wood.feed_rate_mm_per_min, 1200.0);
    assert_eq!(wood.machine_rate_per_hour, 30.0);

    let copper = catalog.get("copper").unwrap();
    assert_eq!(copper.density_cost_per_cm3, 0.20);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let catalog = standard_catalog();
    assert!(catalog.get("Aluminum").is_some());
    assert!(catalog.get(" BRASS ").is_some());
    assert_eq!(catalog.require("Plastic").unwrap().name, "plastic");
}

#[test]
fn test_unknown_material_is_an_error() {
    let catalog = standard_catalog();
    let err = catalog.require("unobtainium").unwrap_err();
    match err {
        CatalogError::UnknownMaterial { name, available } => {
            assert_eq!(name, "unobtainium");
            assert!(available.contains("steel"));
            assert!(available.contains("wood"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_add_material_replaces_existing() {
    let mut catalog = standard_catalog();
    let cheaper_steel = MaterialProfile::new("Steel", 320.0, 0.05, 45.0);

    let previous = catalog.add_material(cheaper_steel).unwrap();
    assert_eq!(previous.unwrap().density_cost_per_cm3, 0.08);
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.get("steel").unwrap().feed_rate_mm_per_min, 320.0);
}

#[test]
fn test_add_material_rejects_invalid_profile() {
    let mut catalog = MaterialCatalog::new();
    let err = catalog
        .add_material(MaterialProfile::new("foam", 900.0, -0.01, 30.0))
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidProfile(_)));
    assert!(catalog.is_empty());

    let err = catalog
        .add_material(MaterialProfile::new("  ", 900.0, 0.01, 30.0))
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidProfile(_)));
}

#[test]
fn test_with_material_builder() {
    let catalog = MaterialCatalog::new()
        .with_material(MaterialProfile::new("titanium", 150.0, 0.9, 80.0))
        .unwrap()
        .with_material(MaterialProfile::new("delrin", 900.0, 0.05, 35.0))
        .unwrap();
    assert_eq!(catalog.names(), vec!["delrin", "titanium"]);
}

#[test]
fn test_catalog_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MaterialCatalog>();
    assert_send_sync::<MaterialProfile>();
}
