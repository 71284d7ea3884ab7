use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Args, Parser, Subcommand};
use orbital_core::{
    config::{self, ConfigMolecule, ConfigOrbitalEnergies},
    molecule::Molecule,
    occupancy::total_electrons,
    units::EnergyUnit,
    OrbitalAnalysis, Tolerance,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: OrbitalCommand,

    /// Print debug logs. RUST_LOG takes precedence if it is set
    #[arg(long, short, action = ArgAction::SetTrue, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum OrbitalCommand {
    /// Fill orbitals with electrons and report the HOMO and LUMO
    #[command(name = "occupancy")]
    Occupancy {
        /// A json file with the orbital energies, either a list of numbers in Hartree or
        /// an object with "unit" and "energies"
        #[arg(long, short)]
        energies: PathBuf,
        #[command(flatten)]
        electrons: ElectronSource,
        /// The charge of the molecule, overrides the one in the molecule file
        #[arg(long, short, requires = "molecule", allow_hyphen_values = true)]
        charge: Option<i32>,
        /// Orbitals closer in energy than this, in Hartree, are considered degenerate
        #[arg(long, short, default_value_t = Tolerance::DEFAULT.get())]
        tolerance: f64,
        /// Print the result as json
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ElectronSource {
    /// The total number of electrons
    #[arg(long, short = 'n', allow_hyphen_values = true)]
    electrons: Option<i64>,
    /// A path to a molecule; its electron count is the sum of the atomic numbers
    /// minus its charge
    #[arg(long, short)]
    molecule: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut logger = pretty_env_logger::formatted_builder();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    match args.command {
        OrbitalCommand::Occupancy {
            energies,
            electrons,
            charge,
            tolerance,
            json,
        } => {
            let tolerance = Tolerance::new(tolerance)?;
            let energies = load_energies(&energies)?;
            let n_electrons = electron_count(electrons, charge)?;
            log::info!(
                "assigning {n_electrons} electrons to {} orbitals",
                energies.len()
            );

            let analysis = OrbitalAnalysis::new(&energies, n_electrons, tolerance);

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_table(&energies, &analysis);
            }
        }
    }

    Ok(())
}

fn load_energies(path: &Path) -> anyhow::Result<Vec<f64>> {
    let energies: ConfigOrbitalEnergies = config::load(path)
        .with_context(|| format!("could not read orbital energies from {}", path.display()))?;
    let energies = energies.into_hartree();

    if let Some(energy) = energies.iter().find(|energy| !energy.is_finite()) {
        bail!("orbital energy {energy} in {} is not finite", path.display());
    }
    Ok(energies)
}

fn electron_count(source: ElectronSource, charge: Option<i32>) -> anyhow::Result<i64> {
    match source {
        ElectronSource {
            electrons: Some(n_electrons),
            ..
        } => Ok(n_electrons),
        ElectronSource {
            molecule: Some(path),
            ..
        } => {
            let molecule: ConfigMolecule = config::load(&path)
                .with_context(|| format!("could not read molecule from {}", path.display()))?;
            let mut molecule = Molecule::try_from(molecule)
                .with_context(|| format!("invalid molecule in {}", path.display()))?;
            if let Some(charge) = charge {
                molecule = molecule.with_charge(charge);
            }

            log::debug!(
                "{} atoms with charge {}",
                molecule.atoms().len(),
                molecule.charge()
            );
            Ok(molecule.n_electrons())
        }
        _ => bail!("either an electron count or a molecule is required"),
    }
}

fn print_table(energies: &[f64], analysis: &OrbitalAnalysis) {
    println!(
        "{:>5} {:>14} {:>12} {:>5}",
        "index", "energy (Eh)", "energy (eV)", "occ"
    );

    for (index, (&energy, &occupancy)) in energies.iter().zip(analysis.occupancies()).enumerate()
    {
        let label = match (
            analysis.homo().contains(&index),
            analysis.lumo().contains(&index),
        ) {
            (true, true) => "HOMO/LUMO",
            (true, false) => "HOMO",
            (false, true) => "LUMO",
            (false, false) => "",
        };

        println!(
            "{index:>5} {energy:>14.6} {:>12.2} {occupancy:>5} {label}",
            EnergyUnit::ElectronVolt.from_hartree(energy)
        );
    }

    println!(
        "electrons: {}, occupied orbitals: {}, singly occupied: {}",
        total_electrons(analysis.occupancies()),
        analysis.n_occupied(),
        analysis.n_singly_occupied()
    );
    match analysis.gap(energies) {
        Some(gap) => println!(
            "homo-lumo gap: {:.2} eV",
            EnergyUnit::ElectronVolt.from_hartree(gap)
        ),
        None => println!("homo-lumo gap: n/a"),
    }
}
