use std::fs::File;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use geoshape3d::{
    crs::Crs,
    elevation::{interpolate_z, Interpolation},
    geometry::{Line3, LineString3, Point, Point3},
    intersection::{ElevationPolicy, IntersectionOptions},
    io::{
        geojson::{read_linestrings_geojson, write_intersections_geojson, write_linestrings_geojson},
        read_linestrings_csv, write_linestrings_csv,
    },
    ProjProjector,
};

fn init_logging() {
    if let Ok(path) = std::env::var("GEOSHAPE3D_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

fn is_geojson(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".geojson") || lower.ends_with(".json")
}

/// Reads line-strings from CSV or GeoJSON depending on the file extension.
fn read_linestrings(path: &str, crs: &Crs) -> std::io::Result<Vec<LineString3>> {
    if is_geojson(path) {
        read_linestrings_geojson(path, crs)
    } else {
        read_linestrings_csv(path, crs)
    }
}

fn read_first_linestring(path: &str, crs: &Crs) -> std::io::Result<LineString3> {
    read_linestrings(path, crs)?.into_iter().next().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, "no line-string found")
    })
}

fn write_linestrings(path: &str, linestrings: &[LineString3]) -> std::io::Result<()> {
    if is_geojson(path) {
        write_linestrings_geojson(path, linestrings)
    } else {
        write_linestrings_csv(path, linestrings)
    }
}

/// Command line interface for 3D line-string analysis.
#[derive(Parser)]
#[command(name = "geoshape3d_cli", version)]
struct Cli {
    /// EPSG code for the working coordinate system
    #[arg(long, default_value_t = 4326, global = true)]
    epsg: u32,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Intersect the first line-strings of two files (CSV x,y,z or GeoJSON).
    Intersect {
        a: String,
        b: String,
        /// JSON file with intersection options
        #[arg(long)]
        config: Option<String>,
        #[arg(long)]
        tolerance: Option<f64>,
        #[arg(long)]
        z_tolerance: Option<f64>,
        /// Only report crossings where both elevations agree
        #[arg(long)]
        require_match: bool,
        /// Fail on vertical segments instead of using their start elevation
        #[arg(long)]
        strict: bool,
        /// Report intersection points in this EPSG code
        #[arg(long)]
        report_epsg: Option<u32>,
        /// Also write the intersections to a GeoJSON file
        #[arg(long)]
        output: Option<String>,
    },
    /// Reproject line-strings from the working CRS to another CRS.
    Transform {
        input: String,
        output: String,
        #[arg(long)]
        to: u32,
    },
    /// Convert line-strings from CSV to GeoJSON.
    ExportGeojson { input: String, output: String },
    /// Convert line-strings from GeoJSON to CSV.
    ImportGeojson { input: String, output: String },
    /// Interpolate the elevation at (x, y) on the segment from 1 to 2.
    #[command(allow_negative_numbers = true)]
    Interpolate {
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
        x: f64,
        y: f64,
        #[arg(long)]
        strict: bool,
    },
}

fn load_options(
    config: Option<String>,
    tolerance: Option<f64>,
    z_tolerance: Option<f64>,
    require_match: bool,
    strict: bool,
) -> std::io::Result<IntersectionOptions> {
    let mut options = match config {
        Some(path) => IntersectionOptions::load(&path)?,
        None => IntersectionOptions::default(),
    };
    if let Some(t) = tolerance {
        options.tolerance = t;
    }
    if let Some(t) = z_tolerance {
        options.z_tolerance = t;
    }
    if require_match {
        options.policy = ElevationPolicy::RequireMatch;
    }
    if strict {
        options.interpolation = Interpolation::Strict;
    }
    Ok(options)
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let working_crs = Crs::from_epsg(cli.epsg);
    log::info!("Using CRS: {}", working_crs);
    match cli.command {
        Commands::Intersect {
            a,
            b,
            config,
            tolerance,
            z_tolerance,
            require_match,
            strict,
            report_epsg,
            output,
        } => {
            let options = match load_options(config, tolerance, z_tolerance, require_match, strict)
            {
                Ok(o) => o,
                Err(e) => {
                    eprintln!("Error reading config: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let (line_a, line_b) = match (
                read_first_linestring(&a, &working_crs),
                read_first_linestring(&b, &working_crs),
            ) {
                (Ok(la), Ok(lb)) => (la, lb),
                (Err(e), _) => {
                    eprintln!("Error reading {}: {}", a, e);
                    return ExitCode::FAILURE;
                }
                (_, Err(e)) => {
                    eprintln!("Error reading {}: {}", b, e);
                    return ExitCode::FAILURE;
                }
            };
            let mut result = match line_a.intersection(&line_b, &options) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error intersecting: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let mut report_crs = line_a.crs().clone();
            if let Some(code) = report_epsg {
                let target = Crs::from_epsg(code);
                match result.transform(line_a.crs(), &target, &ProjProjector) {
                    Ok(r) => {
                        result = r;
                        report_crs = target;
                    }
                    Err(e) => {
                        eprintln!("Error transforming: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            if result.is_empty() {
                println!("No intersection");
            }
            for hit in &result {
                println!(
                    "Intersection: {:.3},{:.3} z_a={:.3} z_b={:.3} ({})",
                    hit.point.x,
                    hit.point.y,
                    hit.z_a,
                    hit.z_b,
                    if hit.is_3d { "3D" } else { "planar crossing" }
                );
            }
            if let Some(path) = output {
                match write_intersections_geojson(&path, &result, &report_crs) {
                    Ok(()) => println!("Wrote {}", path),
                    Err(e) => {
                        eprintln!("Error writing {}: {}", path, e);
                        return ExitCode::FAILURE;
                    }
                }
            }
        }
        Commands::Transform { input, output, to } => {
            let target = Crs::from_epsg(to);
            let lines = match read_linestrings(&input, &working_crs) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading {}: {}", input, e);
                    return ExitCode::FAILURE;
                }
            };
            let transformed: Result<Vec<_>, _> = lines.iter().map(|l| l.transform(&target)).collect();
            match transformed {
                Ok(out) => match write_linestrings(&output, &out) {
                    Ok(()) => println!("Wrote {}", output),
                    Err(e) => {
                        eprintln!("Error writing {}: {}", output, e);
                        return ExitCode::FAILURE;
                    }
                },
                Err(e) => {
                    eprintln!("Error transforming: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Commands::ExportGeojson { input, output } => {
            match read_linestrings_csv(&input, &working_crs) {
                Ok(lines) => match write_linestrings_geojson(&output, &lines) {
                    Ok(()) => println!("Wrote {}", output),
                    Err(e) => {
                        eprintln!("Error writing {}: {}", output, e);
                        return ExitCode::FAILURE;
                    }
                },
                Err(e) => {
                    eprintln!("Error reading {}: {}", input, e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Commands::ImportGeojson { input, output } => {
            match read_linestrings_geojson(&input, &working_crs) {
                Ok(lines) => match write_linestrings_csv(&output, &lines) {
                    Ok(()) => println!("Wrote {}", output),
                    Err(e) => {
                        eprintln!("Error writing {}: {}", output, e);
                        return ExitCode::FAILURE;
                    }
                },
                Err(e) => {
                    eprintln!("Error reading {}: {}", input, e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Commands::Interpolate {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
            x,
            y,
            strict,
        } => {
            let segment = Line3::new(Point3::new(x1, y1, z1), Point3::new(x2, y2, z2));
            let mode = if strict {
                Interpolation::Strict
            } else {
                Interpolation::Lenient
            };
            match interpolate_z(&segment, Point::new(x, y), mode) {
                Ok(z) => println!("Elevation: {:.3}", z),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }
    ExitCode::SUCCESS
}
