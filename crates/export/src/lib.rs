//! Export helpers for CSV and JSON artifacts.

pub mod summary {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    const HEADER: &str = "well,profile,units,inclination_deg,tvd_eob,md_eob,displacement_eob,tangent_length,md_sod,tvd_sod,displacement_sod,md_sob2,md_total";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard trajectory summary CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted for one solved well. Transition points a profile does
    /// not have stay `None` and serialize as empty cells.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub well: &'a str,
        pub profile: &'a str,
        pub units: &'a str,
        pub inclination_deg: f64,
        pub tvd_eob: f64,
        pub md_eob: f64,
        pub displacement_eob: f64,
        pub tangent_length: f64,
        pub md_sod: Option<f64>,
        pub tvd_sod: Option<f64>,
        pub displacement_sod: Option<f64>,
        pub md_sob2: Option<f64>,
        pub md_total: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{},{:.3},{:.3},{:.3},{:.3},{:.3},{},{},{},{},{:.3}",
                self.well,
                self.profile,
                self.units,
                self.inclination_deg,
                self.tvd_eob,
                self.md_eob,
                self.displacement_eob,
                self.tangent_length,
                optional_cell(self.md_sod),
                optional_cell(self.tvd_sod),
                optional_cell(self.displacement_sod),
                optional_cell(self.md_sob2),
                self.md_total,
            )
        }
    }

    fn optional_cell(value: Option<f64>) -> String {
        value.map(|v| format!("{:.3}", v)).unwrap_or_default()
    }

    /// One labelled quantity in a summary artifact.
    #[derive(Debug, Clone, Serialize)]
    pub struct NamedValue {
        pub name: String,
        pub value: f64,
        pub unit: String,
    }

    /// Named values exported in the JSON sidecar for one solved well.
    #[derive(Debug, Clone, Serialize)]
    pub struct TrajectorySummary {
        pub well: String,
        pub profile: String,
        pub units: String,
        pub values: Vec<NamedValue>,
    }

    /// Write the JSON summary sidecar, creating parent directories as needed.
    pub fn write_json(path: &Path, summary: &TrajectorySummary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}

pub mod survey {
    //! Interface contract toward external 3D path visualization.
    //!
    //! The solvers produce discrete transition points, not interpolated
    //! station lists; whoever densifies a path into stations emits rows in
    //! this shape so downstream plotting tools can group them by well.

    use std::io::{self, Write};

    use serde::Serialize;

    const HEADER: &str = "dispns,dispew,tvd,well";

    /// One survey point on a rendered well path.
    #[derive(Debug, Clone, Serialize)]
    pub struct TrajectoryRow {
        /// North/south displacement.
        pub dispns: f64,
        /// East/west displacement.
        pub dispew: f64,
        /// True vertical depth.
        pub tvd: f64,
        /// Well identifier grouping rows into one path.
        pub well: String,
    }

    /// Write the survey CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Write rows in the standard column order.
    pub fn write_rows(writer: &mut dyn Write, rows: &[TrajectoryRow]) -> io::Result<()> {
        for row in rows {
            writeln!(
                writer,
                "{:.3},{:.3},{:.3},{}",
                row.dispns, row.dispew, row.tvd, row.well
            )?;
        }
        Ok(())
    }
}
