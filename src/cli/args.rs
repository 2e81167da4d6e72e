use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "station-mapper")]
#[command(about = "Render station locations onto a georeferenced map")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stamp a marker for every station onto the map image
    Render {
        #[arg(short, long, help = "Input map bitmap")]
        map: PathBuf,

        #[arg(short, long, help = "Bounding box config file")]
        bounds: PathBuf,

        #[arg(short, long, help = "Station list CSV file")]
        stations: PathBuf,

        #[arg(
            short,
            long,
            help = "Output image path [default: output/station-map-{YYMMDD}.bmp]"
        )]
        output: Option<PathBuf>,

        #[arg(long, default_value = "255,0,0", help = "Marker color as R,G,B")]
        color: String,
    },

    /// Find the station nearest to a coordinate
    Nearest {
        #[arg(short, long, help = "Station list CSV file")]
        stations: PathBuf,

        #[arg(long, allow_negative_numbers = true, help = "Query latitude in degrees")]
        lat: f64,

        #[arg(long, allow_negative_numbers = true, help = "Query longitude in degrees")]
        lon: f64,

        #[arg(long, default_value = "false", help = "Emit the result as JSON")]
        json: bool,
    },

    /// Print the library version
    Version,
}
