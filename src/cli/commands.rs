use serde_json::json;
use std::path::Path;
use tracing::{debug, info, Level};

use crate::analyzers::compute_boundary;
use crate::builders::{ArcBuilder, NodeBuilder};
use crate::cli::args::{Cli, Commands, Conversion};
use crate::error::{GeoTableError, Result};
use crate::models::{Arc, Location, Node};
use crate::readers::{import_table, LocationReader};
use crate::settings::Settings;
use crate::snap::NearestVertexSnapper;
use crate::table::{init_table, Table, TableKind, TableRow};
use crate::units::{convert_distance, convert_speed, convert_time};
use crate::utils::filename::generate_default_table_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::TableExporter;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // A subscriber may already be installed when embedded; keep that one
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn output_path(output: Option<String>, kind: TableKind) -> String {
    output.unwrap_or_else(|| {
        generate_default_table_filename(kind)
            .to_string_lossy()
            .into_owned()
    })
}

fn write_table<R: TableRow>(
    exporter: &TableExporter,
    table: &Table<R>,
    output: Option<String>,
    quiet: bool,
) -> Result<()> {
    let path = output_path(output, R::KIND);
    let progress = ProgressReporter::new_spinner(&format!("Writing {}...", path), quiet);

    if exporter.export(table, &path) {
        progress.finish_with_message(&format!("Wrote {} {}", table.len(), table.kind()));
        Ok(())
    } else {
        progress.finish_with_message("Export failed");
        Err(GeoTableError::ExportFailed(path))
    }
}

fn read_optional_table<R: TableRow>(path: Option<&Path>) -> Result<Option<Table<R>>> {
    match path {
        Some(path) => {
            let table = import_table::<R>(path)?;
            debug!("Loaded {} existing {} from {}", table.len(), R::KIND, path.display());
            Ok(Some(table))
        }
        None => Ok(None),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;
    let exporter = TableExporter::from_settings(&settings);
    let reader = LocationReader::new();

    match cli.command {
        Commands::Nodes {
            input,
            output,
            append,
            node_name,
            node_type,
            start_id,
            increment_name,
            increment_start,
            snap_network,
            leaflet_color,
            cesium_color,
            icon_text,
        } => {
            let locations = reader.read_locations(&input)?;
            info!("Read {} locations from {}", locations.len(), input.display());

            let prior = read_optional_table::<Node>(append.as_deref())?;

            let mut leaflet = settings.nodes.leaflet.clone();
            let mut cesium = settings.nodes.cesium.clone();
            if let Some(color) = leaflet_color {
                leaflet.color = color;
            }
            if let Some(color) = cesium_color {
                cesium.color = color;
            }
            if let Some(text) = icon_text {
                leaflet.text = Some(text.clone());
                cesium.text = Some(text);
            }

            let snapper = match snap_network {
                Some(path) => Some(NearestVertexSnapper::new(reader.read_locations(&path)?)),
                None => None,
            };

            let mut builder = NodeBuilder::from_settings(&settings)
                .with_leaflet_style(leaflet)
                .with_cesium_style(cesium)
                .with_node_name(node_name)
                .with_start_id(start_id);
            if let Some(node_type) = node_type {
                builder = builder.with_node_type(node_type);
            }
            if increment_name {
                builder = builder.with_incrementing_names(increment_start);
            }
            if let Some(ref snapper) = snapper {
                builder = builder.with_snapper(snapper);
            }

            let silent = cli.quiet || snapper.is_none();
            let progress = ProgressReporter::new_spinner("Snapping and building nodes...", silent);
            let nodes = builder.build(&locations, prior.as_ref())?;
            progress.finish_with_message(&format!("Built {} nodes", nodes.len()));

            write_table(&exporter, &nodes, output, cli.quiet)?;
        }

        Commands::Arcs {
            input,
            output,
            append,
            start_id,
            no_arrows,
            leaflet_color,
            leaflet_style,
            cesium_color,
            cesium_style,
        } => {
            let locations = reader.read_locations(&input)?;
            let prior = read_optional_table::<Arc>(append.as_deref())?;

            let mut leaflet = settings.arcs.leaflet.clone();
            let mut cesium = settings.arcs.cesium.clone();
            if let Some(color) = leaflet_color {
                leaflet.color = color;
            }
            if let Some(style) = leaflet_style {
                leaflet.style = style.parse()?;
            }
            if let Some(color) = cesium_color {
                cesium.color = color;
            }
            if let Some(style) = cesium_style {
                cesium.style = style.parse()?;
            }

            let mut builder = ArcBuilder::from_settings(&settings)
                .with_leaflet_style(leaflet)
                .with_cesium_style(cesium)
                .with_start_id(start_id);
            if no_arrows {
                builder = builder.with_arrows(false);
            }

            let arcs = builder.build(&locations, prior.as_ref())?;
            info!("Built {} arcs from {} locations", arcs.len(), locations.len());

            write_table(&exporter, &arcs, output, cli.quiet)?;
        }

        Commands::Init { kind, output } => {
            let table = init_table(&kind)?;
            let path = output_path(output, table.kind());

            if !exporter.export_any(&table, &path) {
                return Err(GeoTableError::ExportFailed(path));
            }
        }

        Commands::Bounds {
            nodes,
            arcs,
            locations,
        } => {
            let nodes = read_optional_table::<Node>(nodes.as_deref())?;
            let arcs = read_optional_table::<Arc>(arcs.as_deref())?;
            let locations: Option<Vec<Location>> = match locations {
                Some(path) => Some(reader.read_locations(&path)?),
                None => None,
            };

            let boundary =
                compute_boundary(nodes.as_ref(), arcs.as_ref(), locations.as_deref())?;

            let report = json!({
                "corners": boundary.corners(),
                "boundary": boundary,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Convert { conversion } => {
            let converted = match conversion {
                Conversion::Distance { value, from, to } => {
                    format!("{} {}", convert_distance(value, &from, &to)?, to)
                }
                Conversion::Time { value, from, to } => {
                    format!("{} {}", convert_time(value, &from, &to)?, to)
                }
                Conversion::Speed {
                    value,
                    from_distance,
                    from_time,
                    to_distance,
                    to_time,
                } => {
                    let speed =
                        convert_speed(value, &from_distance, &from_time, &to_distance, &to_time)?;
                    format!("{} {}/{}", speed, to_distance, to_time)
                }
            };
            println!("{}", converted);
        }
    }

    Ok(())
}

