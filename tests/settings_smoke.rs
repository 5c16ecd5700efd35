use granula_engine::materials::{MAT_SAND, MAT_WATER};
use granula_engine::{EngineSettings, World, WorldCore};

#[test]
fn settings_smoke_parses_and_has_core_invariants() {
    let json = r#"{
        "cellSize": 8,
        "gravity": 0.5,
        "tickRate": 30,
        "brushRadii": { "sand": 2 },
        "eraseRadius": 3,
        "seed": 1234
    }"#;

    let settings = EngineSettings::from_json(json).expect("settings should parse");
    assert_eq!(settings.cell_size, 8);
    assert_eq!(settings.gravity, 0.5);
    assert_eq!(settings.tick_rate, 30);
    assert_eq!(settings.erase_radius, 3);
    assert_eq!(settings.seed, 1234);

    // Overridden radius applies; unset materials keep their table defaults.
    assert_eq!(settings.brush_radius_for(MAT_SAND), 2);
    assert_eq!(settings.brush_radius_for(MAT_WATER), 5);

    // Radius 2 paints a 13-cell lattice disc away from the borders.
    let mut world = WorldCore::with_settings(64, 64, settings);
    let inserted = world.insert(32, 8, MAT_SAND).unwrap();
    assert_eq!(inserted, 13);
}

#[test]
fn facade_settings_load_resets_the_world() {
    let mut world = World::new(32, 32);
    world.insert(16, 8, MAT_SAND).unwrap();
    assert!(world.particle_count() > 0);

    world
        .load_settings_json(r#"{"tickRate": 120}"#.to_string())
        .unwrap();

    assert_eq!(world.particle_count(), 0);
    assert_eq!(world.tick_rate(), 120);
    assert_eq!(world.width(), 32);

    // The rest of the bundle fell back to defaults.
    assert_eq!(world.cell_size(), 4);
}

#[test]
fn core_rejects_bad_settings_and_materials() {
    let mut world = WorldCore::new(32, 32);
    assert!(world.load_settings_json("not json").is_err());
    assert!(world.insert(8, 8, 200).is_err());
    assert_eq!(world.particle_count(), 0);
}
