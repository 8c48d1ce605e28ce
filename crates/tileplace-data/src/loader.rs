//! Resolution pipeline: reads data files, validates them, builds a scenario.
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and
//! deserialization helpers, plus [`load_scenario`] which ties them together.

use crate::scenario::Scenario;
use crate::schema::{
    CellSizeData, ConstraintData, FootprintData, ObjectData, PlacementData, PositionData,
    StrategyData, WorldData,
};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tileplace_core::{CellSize, Footprint, GridPosition, ObjectId, TileMap, TileWorld, WorldPosition};
use tileplace_placement::{
    ConstraintSet, FootprintClear, NotOccupied, PlaceableObject, PlacementConstraint,
    PlacementStrategy, RowMajorScan, SpiralSearch, Walkable, WithinDistance,
};
use tracing::{debug, info};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The file parsed but holds a value the scenario cannot use.
    #[error("invalid value in {file}: {detail}")]
    InvalidValue { file: PathBuf, detail: String },

    /// Two objects share an id.
    #[error("duplicate object id '{id}' in {file}")]
    DuplicateId { file: PathBuf, id: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn invalid(file: &Path, detail: impl Into<String>) -> DataLoadError {
    DataLoadError::InvalidValue {
        file: file.to_path_buf(),
        detail: detail.into(),
    }
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a data file with the given base name (without extension).
///
/// Looks for `{base_name}.ron`, `{base_name}.toml`, and `{base_name}.json`.
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// multiple formats exist for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for ext in ["ron", "toml", "json"] {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`find_data_file`], but returns an error if no file is found.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(path: &Path, detail: impl ToString) -> DataLoadError {
    DataLoadError::Parse {
        file: path.to_path_buf(),
        detail: detail.to_string(),
    }
}

/// Read a file and deserialize it according to its format (detected from extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Toml => toml::from_str(&content).map_err(|e| parse_error(path, e)),
    }
}

/// Deserialize a list from a file. For TOML files, extracts the array at the
/// given `toml_key` from a top-level table. For RON and JSON, deserializes
/// directly as `Vec<T>`.
pub fn deserialize_list<T: DeserializeOwned>(
    path: &Path,
    toml_key: &str,
) -> Result<Vec<T>, DataLoadError> {
    if detect_format(path)? != Format::Toml {
        return deserialize_file(path);
    }
    let content = std::fs::read_to_string(path)?;
    let table: toml::Value = toml::from_str(&content).map_err(|e| parse_error(path, e))?;
    let array = table
        .get(toml_key)
        .ok_or_else(|| parse_error(path, format!("missing key '{toml_key}' in TOML file")))?
        .clone();
    array
        .try_into()
        .map_err(|e: toml::de::Error| parse_error(path, e))
}

// ===========================================================================
// Resolution
// ===========================================================================

/// Build the tile map described by a world file.
pub fn resolve_world(data: &WorldData, file: &Path) -> Result<TileMap, DataLoadError> {
    let cell_size = resolve_cell_size(data.cell_size, file)?;

    let mut map = if data.layout.is_empty() {
        let (Some(columns), Some(rows)) = (data.columns, data.rows) else {
            return Err(invalid(file, "world needs either a layout or columns and rows"));
        };
        TileMap::new(cell_size, columns, rows)
    } else {
        let map = TileMap::from_rows(cell_size, data.layout.as_slice());
        for (name, given, actual) in [
            ("columns", data.columns, map.columns()),
            ("rows", data.rows, map.rows()),
        ] {
            if let Some(given) = given.filter(|&g| g != actual) {
                return Err(invalid(
                    file,
                    format!("{name} is {given} but the layout has {actual}"),
                ));
            }
        }
        map
    };

    for cell in &data.blocked {
        if !map.set_walkable(*cell, false) {
            return Err(invalid(
                file,
                format!(
                    "blocked cell ({}, {}) is outside the {}x{} world",
                    cell.x,
                    cell.y,
                    map.columns(),
                    map.rows()
                ),
            ));
        }
    }
    Ok(map)
}

fn resolve_cell_size(data: CellSizeData, file: &Path) -> Result<CellSize, DataLoadError> {
    let (width, height) = match data {
        CellSizeData::Square(size) => (size, size),
        CellSizeData::Rect { width, height } => (width, height),
    };
    if width <= 0 || height <= 0 {
        return Err(invalid(
            file,
            format!("cell size must be positive, got {width}x{height}"),
        ));
    }
    Ok(CellSize::new(width, height))
}

/// Instantiate the configured search strategy.
pub fn build_strategy(data: StrategyData) -> Box<dyn PlacementStrategy> {
    match data {
        StrategyData::RowMajor => Box::new(RowMajorScan),
        StrategyData::Spiral { max_radius } => Box::new(SpiralSearch { max_radius }),
    }
}

/// Instantiate a constraint list, preserving its order.
pub fn build_constraints(data: &[ConstraintData]) -> ConstraintSet {
    data.iter()
        .map(|c| -> Box<dyn PlacementConstraint> {
            match c {
                ConstraintData::Walkable => Box::new(Walkable),
                ConstraintData::NotOccupied => Box::new(NotOccupied::new()),
                ConstraintData::FootprintClear => Box::new(FootprintClear::new()),
                ConstraintData::WithinDistance {
                    center,
                    max_distance,
                } => Box::new(WithinDistance::new(*center, *max_distance)),
            }
        })
        .collect()
}

/// Turn an object definition into a placeable, converting cell units with
/// the world's cell size.
pub fn resolve_object(
    data: &ObjectData,
    cell_size: CellSize,
    file: &Path,
) -> Result<PlaceableObject, DataLoadError> {
    if data.id.is_empty() {
        return Err(invalid(file, "object id must not be empty"));
    }

    let footprint = match data.footprint {
        None => Footprint::unit(),
        Some(FootprintData::Cells { columns, rows }) if columns > 0 && rows > 0 => {
            Footprint::cells(columns, rows, cell_size)
        }
        Some(FootprintData::World { width, height }) if width > 0 && height > 0 => {
            Footprint::new(width, height)
        }
        Some(other) => {
            return Err(invalid(
                file,
                format!("footprint of '{}' must be positive, got {other:?}", data.id),
            ));
        }
    };

    let preferred = data.preferred.map(|p| match p {
        PositionData::Cell { x, y } => cell_size.grid_to_world(GridPosition::new(x, y)),
        PositionData::World { x, y } => WorldPosition::new(x, y),
    });

    let mut object = PlaceableObject::new(data.id.as_str())
        .with_footprint(footprint)
        .with_priority(data.priority);
    if let Some(preferred) = preferred {
        object = object.with_preferred_position(preferred);
    }
    if let Some(constraints) = &data.constraints {
        object = object.with_constraints(build_constraints(constraints));
    }
    Ok(object)
}

// ===========================================================================
// Scenario loading
// ===========================================================================

/// Load a scenario from a directory.
///
/// `world.*` is required. `placement.*` falls back to a row-major scan with
/// the standard constraints, and a missing `objects.*` yields an empty
/// scenario.
pub fn load_scenario(dir: &Path) -> Result<Scenario, DataLoadError> {
    let world_file = require_data_file(dir, "world")?;
    let world_data: WorldData = deserialize_file(&world_file)?;
    let world = resolve_world(&world_data, &world_file)?;
    debug!(file = %world_file.display(), columns = world.columns(), rows = world.rows(), "world loaded");

    let placement = match find_data_file(dir, "placement")? {
        Some(file) => deserialize_file::<PlacementData>(&file)?,
        None => PlacementData::default(),
    };

    let mut objects = Vec::new();
    if let Some(file) = find_data_file(dir, "objects")? {
        let data: Vec<ObjectData> = deserialize_list(&file, "objects")?;
        let mut seen = BTreeSet::new();
        for entry in &data {
            if !seen.insert(ObjectId::new(entry.id.as_str())) {
                return Err(DataLoadError::DuplicateId {
                    file: file.clone(),
                    id: entry.id.clone(),
                });
            }
            objects.push(resolve_object(entry, world.cell_size(), &file)?);
        }
    }

    info!(
        dir = %dir.display(),
        columns = world.columns(),
        rows = world.rows(),
        objects = objects.len(),
        "scenario loaded"
    );
    Ok(Scenario::new(world, placement, objects))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tileplace_core::test_utils::*;
    use tracing_test::traced_test;

    /// Create a temporary directory with a unique name for test isolation.
    fn make_test_dir(suffix: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tileplace_data_test_{suffix}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Clean up a test directory.
    fn cleanup(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    fn world(cell: CellSizeData, columns: Option<u32>, rows: Option<u32>, layout: &[&str]) -> WorldData {
        WorldData {
            cell_size: cell,
            columns,
            rows,
            layout: layout.iter().map(|s| s.to_string()).collect(),
            blocked: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // detect_format / find_data_file
    // -----------------------------------------------------------------------

    #[test]
    fn detect_format_by_extension() {
        assert_eq!(detect_format(Path::new("world.ron")).unwrap(), Format::Ron);
        assert_eq!(detect_format(Path::new("world.toml")).unwrap(), Format::Toml);
        assert_eq!(detect_format(Path::new("world.json")).unwrap(), Format::Json);
    }

    #[test]
    fn detect_format_unsupported() {
        assert!(matches!(
            detect_format(Path::new("world.yaml")),
            Err(DataLoadError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            detect_format(Path::new("world")),
            Err(DataLoadError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn find_data_file_found_and_missing() {
        let dir = make_test_dir("find");
        assert_eq!(find_data_file(&dir, "world").unwrap(), None);

        fs::write(dir.join("world.toml"), "").unwrap();
        assert_eq!(
            find_data_file(&dir, "world").unwrap(),
            Some(dir.join("world.toml"))
        );

        cleanup(&dir);
    }

    #[test]
    fn find_data_file_conflict() {
        let dir = make_test_dir("find_conflict");
        fs::write(dir.join("objects.ron"), "[]").unwrap();
        fs::write(dir.join("objects.json"), "[]").unwrap();

        let result = find_data_file(&dir, "objects");
        assert!(matches!(
            result,
            Err(DataLoadError::ConflictingFormats { .. })
        ));

        cleanup(&dir);
    }

    #[test]
    fn require_data_file_missing() {
        let dir = make_test_dir("require_missing");

        let result = require_data_file(&dir, "world");
        assert!(matches!(
            result,
            Err(DataLoadError::MissingRequired { ref file, .. }) if file == "world"
        ));

        cleanup(&dir);
    }

    // -----------------------------------------------------------------------
    // deserialize_file / deserialize_list
    // -----------------------------------------------------------------------

    #[test]
    fn deserialize_world_in_each_format() {
        let dir = make_test_dir("deser_world");
        let ron_path = dir.join("a.ron");
        fs::write(&ron_path, "(cell_size: 32, columns: Some(4), rows: Some(3))").unwrap();
        let json_path = dir.join("b.json");
        fs::write(&json_path, r#"{"cell_size": {"width": 16, "height": 8}, "columns": 4, "rows": 3}"#).unwrap();
        let toml_path = dir.join("c.toml");
        fs::write(&toml_path, "cell_size = 32\nlayout = [\"..#\", \"...\"]\nblocked = [{ x = 0, y = 1 }]\n").unwrap();

        let ron: WorldData = deserialize_file(&ron_path).unwrap();
        assert_eq!(ron.cell_size, CellSizeData::Square(32));
        assert_eq!((ron.columns, ron.rows), (Some(4), Some(3)));

        let json: WorldData = deserialize_file(&json_path).unwrap();
        assert_eq!(json.cell_size, CellSizeData::Rect { width: 16, height: 8 });

        let toml: WorldData = deserialize_file(&toml_path).unwrap();
        assert_eq!(toml.layout.len(), 2);
        assert_eq!(toml.blocked, vec![GridPosition::new(0, 1)]);

        cleanup(&dir);
    }

    #[test]
    fn deserialize_placement_settings() {
        let dir = make_test_dir("deser_placement");
        let json_path = dir.join("placement.json");
        fs::write(
            &json_path,
            r#"{"strategy": {"spiral": {"max_radius": 4}},
                "constraints": ["walkable", "footprint_clear",
                    {"within_distance": {"center": {"x": 2, "y": 3}, "max_distance": 5}}]}"#,
        )
        .unwrap();
        let toml_path = dir.join("placement.toml");
        fs::write(&toml_path, "strategy = \"row_major\"\n").unwrap();

        let json: PlacementData = deserialize_file(&json_path).unwrap();
        assert_eq!(json.strategy, StrategyData::Spiral { max_radius: Some(4) });
        assert_eq!(
            json.constraints,
            vec![
                ConstraintData::Walkable,
                ConstraintData::FootprintClear,
                ConstraintData::WithinDistance {
                    center: GridPosition::new(2, 3),
                    max_distance: 5
                },
            ]
        );

        // Omitted constraints fall back to the standard pair.
        let toml: PlacementData = deserialize_file(&toml_path).unwrap();
        assert_eq!(toml, PlacementData::default());

        cleanup(&dir);
    }

    #[test]
    fn deserialize_list_toml_and_ron() {
        let dir = make_test_dir("list");
        let toml_path = dir.join("objects.toml");
        fs::write(
            &toml_path,
            r#"
[[objects]]
id = "tree_01"
priority = 2
footprint = { cells = { columns = 2, rows = 1 } }

[[objects]]
id = "rock"
preferred = { cell = { x = 3, y = 4 } }
"#,
        )
        .unwrap();
        let ron_path = dir.join("objects.ron");
        fs::write(
            &ron_path,
            r#"[(id: "well", footprint: Some(world(width: 40, height: 40)), constraints: Some([walkable]))]"#,
        )
        .unwrap();

        let toml: Vec<ObjectData> = deserialize_list(&toml_path, "objects").unwrap();
        assert_eq!(toml.len(), 2);
        assert_eq!(toml[0].footprint, Some(FootprintData::Cells { columns: 2, rows: 1 }));
        assert_eq!(toml[1].preferred, Some(PositionData::Cell { x: 3, y: 4 }));
        assert_eq!(toml[1].priority, 0);

        let ron: Vec<ObjectData> = deserialize_list(&ron_path, "objects").unwrap();
        assert_eq!(ron[0].constraints, Some(vec![ConstraintData::Walkable]));

        cleanup(&dir);
    }

    #[test]
    fn deserialize_list_toml_missing_key() {
        let dir = make_test_dir("list_missing_key");
        let path = dir.join("objects.toml");
        fs::write(&path, r#"foo = "bar""#).unwrap();

        let result: Result<Vec<ObjectData>, _> = deserialize_list(&path, "objects");
        assert!(matches!(result, Err(DataLoadError::Parse { .. })));

        cleanup(&dir);
    }

    #[test]
    fn deserialize_file_parse_error() {
        let dir = make_test_dir("parse_err");
        let path = dir.join("world.ron");
        fs::write(&path, "this is not valid RON {{{").unwrap();

        let result: Result<WorldData, _> = deserialize_file(&path);
        assert!(matches!(result, Err(DataLoadError::Parse { ref file, .. }) if file == &path));

        cleanup(&dir);
    }

    // -----------------------------------------------------------------------
    // Resolution
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_world_from_dimensions() {
        let mut data = world(CellSizeData::Square(32), Some(4), Some(3), &[]);
        data.blocked = vec![GridPosition::new(1, 1)];
        let map = resolve_world(&data, Path::new("world.ron")).unwrap();
        assert_eq!((map.columns(), map.rows()), (4, 3));
        assert_eq!(map.cell_size(), tile());
        assert!(!map.is_walkable(cell(1, 1)));
        assert_eq!(map.walkable_count(), 11);
    }

    #[test]
    fn resolve_world_from_layout() {
        let data = world(CellSizeData::Square(32), None, Some(2), &["..#", "#.."]);
        let map = resolve_world(&data, Path::new("world.ron")).unwrap();
        assert_eq!(map, map_from_rows(&["..#", "#.."]));
    }

    #[test]
    fn resolve_world_rejects_bad_values() {
        let file = Path::new("world.ron");
        let cases = [
            world(CellSizeData::Square(0), Some(2), Some(2), &[]),
            world(CellSizeData::Rect { width: 32, height: -1 }, Some(2), Some(2), &[]),
            world(CellSizeData::Square(32), Some(2), None, &[]),
            world(CellSizeData::Square(32), Some(5), None, &["..", ".."]),
        ];
        for data in &cases {
            assert!(
                matches!(resolve_world(data, file), Err(DataLoadError::InvalidValue { .. })),
                "{data:?} should be rejected"
            );
        }

        let mut outside = world(CellSizeData::Square(32), Some(2), Some(2), &[]);
        outside.blocked = vec![GridPosition::new(2, 0)];
        let err = resolve_world(&outside, file).unwrap_err();
        assert!(err.to_string().contains("(2, 0)"));
    }

    #[test]
    fn build_constraints_keeps_order() {
        let set = build_constraints(&[
            ConstraintData::NotOccupied,
            ConstraintData::WithinDistance {
                center: GridPosition::new(1, 2),
                max_distance: 3,
            },
        ]);
        assert_eq!(
            set.descriptions(),
            vec![
                "position must not be occupied".to_string(),
                "position must be within 3 cells of (1, 2)".to_string(),
            ]
        );
    }

    #[test]
    fn resolve_object_converts_cell_units() {
        use tileplace_placement::Placeable;

        let data = ObjectData {
            id: "house".to_string(),
            footprint: Some(FootprintData::Cells { columns: 2, rows: 3 }),
            preferred: Some(PositionData::Cell { x: 1, y: 2 }),
            priority: 7,
            constraints: Some(vec![ConstraintData::FootprintClear]),
        };
        let obj = resolve_object(&data, tile(), Path::new("objects.ron")).unwrap();
        assert_eq!(obj.id(), "house");
        assert_eq!(obj.footprint(), tiles(2, 3));
        assert_eq!(obj.preferred_position(), Some(cell_origin(1, 2)));
        assert_eq!(obj.priority(), 7);
        assert_eq!(obj.constraints().map(ConstraintSet::len), Some(1));
        assert_eq!(obj.position(), None);
    }

    #[test]
    fn resolve_object_rejects_empty_footprint_and_id() {
        let file = Path::new("objects.ron");
        let mut data = ObjectData {
            id: "flat".to_string(),
            footprint: Some(FootprintData::World { width: 0, height: 10 }),
            preferred: None,
            priority: 0,
            constraints: None,
        };
        assert!(matches!(
            resolve_object(&data, tile(), file),
            Err(DataLoadError::InvalidValue { .. })
        ));

        data.footprint = None;
        data.id.clear();
        assert!(matches!(
            resolve_object(&data, tile(), file),
            Err(DataLoadError::InvalidValue { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // load_scenario
    // -----------------------------------------------------------------------

    #[test]
    #[traced_test]
    fn load_scenario_minimal() {
        let dir = make_test_dir("scenario_minimal");
        fs::write(dir.join("world.json"), r#"{"cell_size": 32, "columns": 3, "rows": 2}"#).unwrap();

        let scenario = load_scenario(&dir).unwrap();
        assert_eq!(scenario.world().columns(), 3);
        assert!(scenario.objects().is_empty());
        assert_eq!(scenario.placement(), &PlacementData::default());
        assert!(logs_contain("scenario loaded"));

        cleanup(&dir);
    }

    #[test]
    fn load_scenario_requires_world() {
        let dir = make_test_dir("scenario_no_world");
        fs::write(dir.join("objects.json"), "[]").unwrap();

        assert!(matches!(
            load_scenario(&dir),
            Err(DataLoadError::MissingRequired { .. })
        ));

        cleanup(&dir);
    }

    #[test]
    fn load_scenario_rejects_duplicate_ids() {
        let dir = make_test_dir("scenario_dup");
        fs::write(dir.join("world.json"), r#"{"cell_size": 32, "columns": 3, "rows": 2}"#).unwrap();
        fs::write(dir.join("objects.json"), r#"[{"id": "a"}, {"id": "b"}, {"id": "a"}]"#).unwrap();

        let result = load_scenario(&dir);
        assert!(matches!(
            result,
            Err(DataLoadError::DuplicateId { ref id, .. }) if id == "a"
        ));

        cleanup(&dir);
    }

    // -----------------------------------------------------------------------
    // Error display messages
    // -----------------------------------------------------------------------

    #[test]
    fn error_display_messages() {
        let e = DataLoadError::MissingRequired {
            file: "world".to_string(),
            dir: PathBuf::from("/data"),
        };
        assert!(format!("{e}").contains("world"));
        assert!(format!("{e}").contains("/data"));

        let e = DataLoadError::InvalidValue {
            file: PathBuf::from("world.ron"),
            detail: "cell size must be positive".to_string(),
        };
        let msg = format!("{e}");
        assert!(msg.contains("world.ron"));
        assert!(msg.contains("cell size must be positive"));

        let e = DataLoadError::DuplicateId {
            file: PathBuf::from("objects.ron"),
            id: "tree_01".to_string(),
        };
        assert!(format!("{e}").contains("tree_01"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let data_err: DataLoadError = io_err.into();
        assert!(matches!(data_err, DataLoadError::Io(_)));
        assert!(format!("{data_err}").contains("file not found"));
    }
}
