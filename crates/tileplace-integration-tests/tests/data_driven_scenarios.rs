//! Scenarios loaded from data directories and placed end to end.

use std::fs;
use std::path::{Path, PathBuf};

use tileplace_core::test_utils::*;
use tileplace_core::{Footprint, TileWorld};
use tileplace_data::{DataLoadError, load_scenario};
use tileplace_placement::{Placeable, PlacementContext, PlacementError};

fn make_test_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tileplace_integration_{suffix}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

/// A 6x3 courtyard with a wall through the middle row.
fn write_courtyard(dir: &Path) {
    fs::write(
        dir.join("world.ron"),
        r#"(
    cell_size: 32,
    layout: [
        "......",
        ".####.",
        "......",
    ],
)"#,
    )
    .unwrap();
    fs::write(
        dir.join("placement.toml"),
        r#"
strategy = { spiral = { max_radius = 3 } }
constraints = ["walkable", "not_occupied"]
"#,
    )
    .unwrap();
}

#[test]
fn courtyard_mixed_formats() {
    let dir = make_test_dir("courtyard");
    write_courtyard(&dir);
    fs::write(
        dir.join("objects.json"),
        r#"[
    {"id": "well", "preferred": {"cell": {"x": 2, "y": 1}}, "priority": 10},
    {"id": "bench", "preferred": {"cell": {"x": 0, "y": 0}}},
    {"id": "cart",
     "footprint": {"world": {"width": 64, "height": 32}},
     "preferred": {"world": {"x": 0, "y": 0}},
     "constraints": ["footprint_clear"]}
]"#,
    )
    .unwrap();

    let mut scenario = load_scenario(&dir).unwrap();
    assert_eq!(scenario.world().walkable_count(), 14);
    assert_eq!(scenario.objects().len(), 3);
    assert_eq!(
        scenario.object("cart").map(|o| o.footprint()),
        Some(Footprint::new(64, 32))
    );

    let mut controller = scenario.build_controller();
    let results = scenario.place_all(&mut controller);

    // The well wants a wall tile and spirals to the first open cell of
    // ring one. The cart skips blocks touching the well or the wall.
    assert_eq!(
        results,
        vec![Ok(cell_origin(1, 0)), Ok(cell_origin(0, 0)), Ok(cell_origin(2, 0))]
    );
    let index = controller.spatial_index();
    assert_eq!(index.validate(), Ok(()));
    assert_eq!(index.cells_of("cart").map(|r| r.area()), Some(2));
    assert!(scenario.objects().iter().all(|o| o.is_placed()));

    cleanup(&dir);
}

#[test]
fn toml_objects_with_bounded_search() {
    let dir = make_test_dir("bounded");
    write_courtyard(&dir);
    fs::write(
        dir.join("objects.toml"),
        r#"
[[objects]]
id = "lamp"
preferred = { cell = { x = 5, y = 2 } }
constraints = ["walkable", "not_occupied", { within_distance = { center = { x = 5, y = 2 }, max_distance = 0 } }]

[[objects]]
id = "lamp2"
preferred = { cell = { x = 5, y = 2 } }
constraints = ["walkable", "not_occupied", { within_distance = { center = { x = 5, y = 2 }, max_distance = 0 } }]
"#,
    )
    .unwrap();

    let mut scenario = load_scenario(&dir).unwrap();
    let mut controller = scenario.build_controller();
    let results = scenario.place_all(&mut controller);

    assert_eq!(results[0], Ok(cell_origin(5, 2)));
    assert_eq!(
        results[1],
        Err(PlacementError::NoValidPosition { id: "lamp2".into() })
    );
    assert_eq!(controller.registered_count(), 1);
    assert!(controller.grid_system().world().is_walkable(cell(5, 2)));

    cleanup(&dir);
}

#[test]
fn broken_directories_are_rejected() {
    let dir = make_test_dir("broken");
    fs::write(dir.join("world.json"), r#"{"cell_size": 16, "columns": 2, "rows": 2}"#).unwrap();
    fs::write(dir.join("world.toml"), "cell_size = 16\ncolumns = 2\nrows = 2\n").unwrap();
    assert!(matches!(
        load_scenario(&dir),
        Err(DataLoadError::ConflictingFormats { .. })
    ));

    fs::remove_file(dir.join("world.toml")).unwrap();
    fs::write(dir.join("objects.json"), r#"[{"id": "x", "footprint": {"cells": {"columns": 0, "rows": 1}}}]"#)
        .unwrap();
    let err = load_scenario(&dir).unwrap_err();
    assert!(matches!(err, DataLoadError::InvalidValue { .. }));
    assert!(err.to_string().contains("objects.json"));

    fs::write(dir.join("objects.json"), r#"[{"id": "x", "priority": "high"}]"#).unwrap();
    assert!(matches!(
        load_scenario(&dir),
        Err(DataLoadError::Parse { .. })
    ));

    cleanup(&dir);
}
