use geo_tables::builders::{ArcBuilder, NodeBuilder};
use geo_tables::models::{Arc, Location, Node};
use geo_tables::readers::import_table;
use geo_tables::table::{init_table, TableKind};
use geo_tables::writers::TableExporter;
use geo_tables::{compute_boundary, convert_distance, convert_speed};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn route() -> Vec<Location> {
    vec![
        Location::new(39.9526, -75.1652),
        Location::new(40.2206, -74.7597),
        Location::new(40.7128, -74.0060),
        Location::new(40.7357, -74.1724),
    ]
}

#[test]
fn test_documented_examples() {
    let nodes = NodeBuilder::new()
        .with_node_name("stop")
        .with_incrementing_names(1)
        .build(&[Location::new(40.0, -75.0), Location::new(41.0, -76.0)], None)
        .unwrap();

    let summary: Vec<(u32, &str)> = nodes
        .iter()
        .map(|n| (n.id, n.node_name.as_str()))
        .collect();
    assert_eq!(summary, vec![(1, "stop1"), (2, "stop2")]);

    assert!((convert_distance(1.0, "mi", "km").unwrap() - 1.609344).abs() < 1e-9);
    assert!((convert_speed(60.0, "mi", "h", "km", "h").unwrap() - 96.56).abs() < 0.01);
}

#[test]
fn test_append_from_exported_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("tables").join("nodes.csv");
    let path_str = path.to_str().unwrap();

    let first = NodeBuilder::new()
        .with_node_name("customer")
        .with_node_type("delivery")
        .build(&route()[..2], None)
        .unwrap();

    let exporter = TableExporter::new().with_output_message(false);
    assert!(exporter.export(&first, path_str));

    let prior = import_table::<Node>(&path).unwrap();
    assert_eq!(prior, first);

    let extended = NodeBuilder::new()
        .with_node_name("depot")
        .build(&route()[2..], Some(&prior))
        .unwrap();

    let ids: Vec<u32> = extended.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(&extended.rows()[..2], first.rows());
    assert_eq!(extended.rows()[3].node_type, None);
}

#[test]
fn test_arcs_follow_sequence_and_frame_map() {
    let seq = route();
    let arcs = ArcBuilder::new().build(&seq, None).unwrap();
    assert_eq!(arcs.len(), seq.len() - 1);

    for (arc, pair) in arcs.iter().zip(seq.windows(2)) {
        assert_eq!(
            (arc.start_lat, arc.start_lon, arc.end_lat, arc.end_lon),
            (pair[0].lat, pair[0].lon, pair[1].lat, pair[1].lon)
        );
    }

    let nodes = NodeBuilder::new().build(&seq, None).unwrap();
    let boundary = compute_boundary(Some(&nodes), Some(&arcs), None).unwrap();

    for loc in &seq {
        assert!(boundary.contains(loc));
    }
    let [south_east, north_west] = boundary.corners();
    assert!(south_east[0] < north_west[0]);
    assert!(south_east[1] > north_west[1]);
}

#[test]
fn test_arcs_round_trip_through_csv() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("arcs.csv");

    let arcs = ArcBuilder::new().with_arrows(false).build(&route(), None).unwrap();
    let exporter = TableExporter::new().with_output_message(false);
    exporter.try_export(&arcs, path.to_str().unwrap()).unwrap();

    let imported = import_table::<Arc>(&path).unwrap();
    assert_eq!(imported, arcs);
}

#[test]
fn test_empty_tables_export_schema_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("assignments.csv");

    let table = init_table("Assignments").unwrap();
    assert_eq!(table.kind(), TableKind::Assignments);

    let exporter = TableExporter::new().with_output_message(false);
    assert!(exporter.export_any(&table, path.to_str().unwrap()));

    let contents = std::fs::read_to_string(&path).unwrap();
    let header = contents.lines().next().unwrap();
    let expected = format!(",{}", TableKind::Assignments.columns().join(","));
    assert_eq!(header, expected);
    assert_eq!(contents.lines().count(), 1);

    assert!(init_table("routes").is_err());
}
