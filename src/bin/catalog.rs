use std::io::Write;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use wellpath_calculator::config::load_wells;
use wellpath_calculator::export::summary;
use wellpath_calculator::planner::{PlanRequest, WellPlan, plan_well};
use wellpath_calculator::profiles::Trajectory;
use wellpath_calculator::scenario::find_well;

/// Solve every well in a catalog and export a trajectory summary CSV.
#[derive(Parser, Debug)]
#[command(author, version, about = "Batch trajectory runner over a well catalog")]
struct Cli {
    /// Well catalog: YAML file, TOML file, or directory of TOML records
    #[arg(long, default_value = "configs/wells.yaml")]
    wells: PathBuf,

    /// Solve only the named well instead of the whole catalog
    #[arg(long)]
    well: Option<String>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/trajectories.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut wells = load_wells(&cli.wells)?;
    if wells.is_empty() {
        return Err(anyhow!("no wells found in {}", cli.wells.display()));
    }
    if let Some(name) = cli.well.as_deref() {
        let selected = find_well(&wells, name)?.clone();
        wells = vec![selected];
    }

    let mut writer = summary::writer_for_path(&cli.output)?;
    summary::write_header(writer.as_mut())?;

    let mut solved = 0usize;
    let mut skipped = 0usize;
    for config in &wells {
        let request = match PlanRequest::try_from(config) {
            Ok(request) => request,
            Err(err) => {
                eprintln!("Skipping '{}': {}", config.name, err);
                skipped += 1;
                continue;
            }
        };
        let plan = match plan_well(&request) {
            Ok(plan) => plan,
            Err(err) => {
                eprintln!("Skipping '{}': {}", config.name, err);
                skipped += 1;
                continue;
            }
        };

        record_for_plan(&plan).write_to(writer.as_mut())?;
        println!(
            "{}: {} profile, inclination {:.2} degrees, total MD {:.2} {}",
            plan.well,
            plan.profile.tag(),
            plan.trajectory.inclination_deg(),
            plan.trajectory.md_total(),
            plan.units.length_label(),
        );
        solved += 1;
    }

    writer.flush()?;
    println!("Solved {solved} wells ({skipped} skipped)");

    Ok(())
}

fn record_for_plan(plan: &WellPlan) -> summary::Record<'_> {
    let mut record = summary::Record {
        well: &plan.well,
        profile: plan.profile.tag(),
        units: plan.units.name(),
        inclination_deg: plan.trajectory.inclination_deg(),
        tvd_eob: 0.0,
        md_eob: 0.0,
        displacement_eob: 0.0,
        tangent_length: 0.0,
        md_sod: None,
        tvd_sod: None,
        displacement_sod: None,
        md_sob2: None,
        md_total: plan.trajectory.md_total(),
    };
    match &plan.trajectory {
        Trajectory::J(t) => {
            record.tvd_eob = t.tvd_eob;
            record.md_eob = t.md_eob;
            record.displacement_eob = t.displacement_eob;
            record.tangent_length = t.tangent_length;
        }
        Trajectory::S(t) => {
            record.tvd_eob = t.tvd_eob;
            record.md_eob = t.md_eob;
            record.displacement_eob = t.displacement_eob;
            record.tangent_length = t.tangent_length;
            record.md_sod = Some(t.md_sod);
            record.tvd_sod = Some(t.tvd_sod);
            record.displacement_sod = Some(t.displacement_sod);
        }
        Trajectory::H(t) => {
            record.tvd_eob = t.tvd_eob;
            record.md_eob = t.md_eob;
            record.displacement_eob = t.displacement_eob;
            record.tangent_length = t.tangent_length;
            record.md_sob2 = Some(t.md_sob2);
        }
    }
    record
}
