use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use wellpath_calculator::export::summary::{self, NamedValue, TrajectorySummary};
use wellpath_calculator::planner::{PlanRequest, plan_well};
use wellpath_calculator::profiles::{HProfile, JProfile, SProfile, WellProfile};
use wellpath_calculator::report::TrajectoryReport;
use wellpath_calculator::units::UnitSystem;

/// Solve one directional well profile and print its trajectory report.
#[derive(Parser, Debug)]
#[command(author, version, about = "Directional well trajectory calculator")]
struct Cli {
    /// Measurement system for inputs and reported results
    #[arg(long, value_enum, default_value_t = Units::Field)]
    units: Units,

    /// Well name echoed into the report and exported artifacts
    #[arg(long, default_value = "well-1")]
    well: String,

    /// Optional JSON summary artifact path
    #[arg(long)]
    export: Option<PathBuf>,

    #[command(subcommand)]
    profile: ProfileCommand,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Units {
    Field,
    Metric,
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Build-and-hold (J-type) well
    J {
        /// Target true vertical depth
        #[arg(long)]
        tvd: f64,
        /// Kick-off point depth
        #[arg(long)]
        kop: f64,
        /// Build-up rate in degrees per 100 ft (field) or 30 m (metric)
        #[arg(long)]
        build_rate: f64,
        /// Target horizontal displacement
        #[arg(long)]
        displacement: f64,
    },
    /// Build, hold, and drop (S-type) well
    S {
        /// Target true vertical depth
        #[arg(long)]
        tvd: f64,
        /// Kick-off point depth
        #[arg(long)]
        kop: f64,
        /// Build-up rate in degrees per 100 ft (field) or 30 m (metric)
        #[arg(long)]
        build_rate: f64,
        /// Drop-off rate back to vertical, same basis
        #[arg(long)]
        drop_rate: f64,
        /// Target horizontal displacement
        #[arg(long)]
        displacement: f64,
    },
    /// Double-build horizontal (H-type) well
    H {
        /// Target true vertical depth of the horizontal section
        #[arg(long)]
        tvd: f64,
        /// Kick-off point depth
        #[arg(long)]
        kop: f64,
        /// Build-up rate of the first arc, degrees per 100 ft or 30 m
        #[arg(long)]
        build_rate: f64,
        /// Build-up rate of the landing arc, same basis
        #[arg(long)]
        landing_rate: f64,
        /// Target horizontal displacement at the landing point
        #[arg(long)]
        displacement: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let units = match cli.units {
        Units::Field => UnitSystem::Field,
        Units::Metric => UnitSystem::Metric,
    };
    let profile = match cli.profile {
        ProfileCommand::J {
            tvd,
            kop,
            build_rate,
            displacement,
        } => WellProfile::J(JProfile {
            tvd,
            kop,
            build_rate,
            displacement,
        }),
        ProfileCommand::S {
            tvd,
            kop,
            build_rate,
            drop_rate,
            displacement,
        } => WellProfile::S(SProfile {
            tvd,
            kop,
            build_rate,
            drop_rate,
            displacement,
        }),
        ProfileCommand::H {
            tvd,
            kop,
            build_rate,
            landing_rate,
            displacement,
        } => WellProfile::H(HProfile {
            tvd,
            kop,
            build_rate,
            landing_rate,
            displacement,
        }),
    };

    let request = PlanRequest {
        well: cli.well,
        units,
        profile,
    };
    let plan = plan_well(&request)?;
    let report = TrajectoryReport::new(&plan.well, &plan.trajectory, plan.units);
    print!("{report}");

    if let Some(path) = cli.export.as_deref() {
        let summary = TrajectorySummary {
            well: plan.well.clone(),
            profile: plan.profile.tag().to_string(),
            units: plan.units.name().to_string(),
            values: report
                .lines
                .iter()
                .map(|line| NamedValue {
                    name: line.label.to_string(),
                    value: line.value,
                    unit: line.unit.to_string(),
                })
                .collect(),
        };
        summary::write_json(path, &summary)?;
        println!("Saved trajectory summary to {}", path.display());
    }

    Ok(())
}
