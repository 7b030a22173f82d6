use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use supercell_lattice::config::SYMMETRY_TOLERANCE;
use supercell_lattice::lattice::{
    body_centered_cubic_lattice, face_centered_cubic_lattice, hexagonal_lattice,
    simple_cubic_lattice, tetragonal_lattice, Lattice3D,
};
use supercell_lattice::supercell::{HermiteCounter, SupercellEnumerator};
use supercell_lattice::Result;

#[derive(Parser)]
#[command(name = "supercell-lattice")]
#[command(about = "Symmetry-unique supercell enumeration for 3D crystal lattices")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate symmetry-unique supercells volume by volume
    Enumerate {
        /// Lattice type (cubic, fcc, bcc, hexagonal, tetragonal)
        #[arg(short, long, default_value = "cubic")]
        lattice: String,

        /// Lattice parameter a
        #[arg(short, long, default_value = "1.0")]
        a: f64,

        /// Lattice parameter c (hexagonal and tetragonal)
        #[arg(short, long, default_value = "1.0")]
        c: f64,

        /// First volume to enumerate
        #[arg(long, default_value = "1")]
        min: i64,

        /// Last volume to enumerate (inclusive)
        #[arg(long, default_value = "4")]
        max: i64,

        /// Print each transformation matrix
        #[arg(long)]
        matrices: bool,
    },
    /// List every Hermite normal form of one determinant
    Hnf {
        /// Determinant of the matrices
        #[arg(long)]
        det: i64,

        /// Matrix dimension
        #[arg(long, default_value = "3")]
        dim: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Enumerate {
            lattice,
            a,
            c,
            min,
            max,
            matrices,
        } => enumerate(&lattice, a, c, min, max, matrices),
        Commands::Hnf { det, dim } => list_hnfs(det, dim),
    }
}

fn build_lattice(name: &str, a: f64, c: f64) -> Result<Lattice3D> {
    match name {
        "cubic" => simple_cubic_lattice(a),
        "fcc" => face_centered_cubic_lattice(a),
        "bcc" => body_centered_cubic_lattice(a),
        "hexagonal" => hexagonal_lattice(a, c),
        "tetragonal" => tetragonal_lattice(a, c),
        other => anyhow::bail!("Unknown lattice type '{}'.", other),
    }
}

fn enumerate(lattice: &str, a: f64, c: f64, min: i64, max: i64, matrices: bool) -> Result<()> {
    let unit = build_lattice(lattice, a, c)?;
    let enumerator = SupercellEnumerator::new(unit, SYMMETRY_TOLERANCE, min, max + 1)?;
    info!(
        "{} lattice, point group of order {}",
        lattice,
        enumerator.point_group().len()
    );

    let mut volume = 0;
    let mut count = 0usize;
    let mut total = 0usize;
    for (v, m) in enumerator.begin() {
        if v != volume {
            if volume != 0 {
                println!("volume {:>4}: {} unique supercells", volume, count);
            }
            volume = v;
            count = 0;
        }
        count += 1;
        total += 1;
        if matrices {
            println!("{}", m);
        }
    }
    if volume != 0 {
        println!("volume {:>4}: {} unique supercells", volume, count);
    }
    println!("total: {} unique supercells", total);
    Ok(())
}

fn list_hnfs(det: i64, dim: usize) -> Result<()> {
    let mut counter = HermiteCounter::new(det, dim)?;
    let mut total = 0usize;
    while counter.valid() {
        println!("{}", counter.current());
        total += 1;
        counter.advance();
    }
    info!("{} matrices of determinant {} in dimension {}", total, det, dim);
    Ok(())
}
