use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geo-tables")]
#[command(about = "Build node and arc tables, convert units and frame map views")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress spinners")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Settings file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a Nodes table from a location file
    Nodes {
        #[arg(short, long, help = "Location file with lat,lon[,alt] columns")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV path [default: output/nodes-{YYMMDD}.csv]"
        )]
        output: Option<String>,

        #[arg(short, long, help = "Existing Nodes table to extend")]
        append: Option<PathBuf>,

        #[arg(long, default_value = "")]
        node_name: String,

        #[arg(long)]
        node_type: Option<String>,

        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start_id: u32,

        #[arg(long, help = "Suffix node names with a running counter")]
        increment_name: bool,

        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        increment_start: i64,

        #[arg(long, help = "Snap locations to the nearest point of this location file")]
        snap_network: Option<PathBuf>,

        #[arg(long)]
        leaflet_color: Option<String>,

        #[arg(long)]
        cesium_color: Option<String>,

        #[arg(long, help = "Icon text for both renderers [default: node id]")]
        icon_text: Option<String>,
    },

    /// Build an Arcs table joining consecutive locations of a file
    Arcs {
        #[arg(short, long, help = "Location file with lat,lon columns, in travel order")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV path [default: output/arcs-{YYMMDD}.csv]"
        )]
        output: Option<String>,

        #[arg(short, long, help = "Existing Arcs table to extend")]
        append: Option<PathBuf>,

        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start_id: u32,

        #[arg(long, help = "Draw arcs without arrows")]
        no_arrows: bool,

        #[arg(long)]
        leaflet_color: Option<String>,

        #[arg(long, help = "solid, dotted or dashed")]
        leaflet_style: Option<String>,

        #[arg(long)]
        cesium_color: Option<String>,

        #[arg(long, help = "solid, dotted or dashed")]
        cesium_style: Option<String>,
    },

    /// Write an empty table of the given kind
    Init {
        #[arg(short, long, help = "nodes, arcs or assignments")]
        kind: String,

        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the padded map boundary of tables and location files as JSON
    Bounds {
        #[arg(long)]
        nodes: Option<PathBuf>,

        #[arg(long)]
        arcs: Option<PathBuf>,

        #[arg(long)]
        locations: Option<PathBuf>,
    },

    /// Convert distances, times or speeds
    Convert {
        #[command(subcommand)]
        conversion: Conversion,
    },
}

#[derive(Subcommand)]
pub enum Conversion {
    /// Units: m, km, mi, ft, yard, nmi
    Distance {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },

    /// Units: s, min, h
    Time {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },

    /// Speed as distance per time, e.g. `60 mi h km h`
    Speed {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from_distance: String,
        from_time: String,
        to_distance: String,
        to_time: String,
    },
}
