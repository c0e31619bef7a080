//! Command-line interface for counting preimages of grid files and random images

use crate::algorithm::brute_force::brute_force_count;
use crate::algorithm::solver::{CounterConfig, Orientation, PreimageCounter};
use crate::io::configuration::{
    DEFAULT_DENSITY, DEFAULT_SEED, MAX_BRUTE_FORCE_CELLS, PNG_EXTENSION, TEXT_EXTENSIONS,
};
use crate::io::error::{PreimageError, Result, file_system_error, invalid_parameter};
use crate::io::grid_file::{load_grid, save_png_grid};
use crate::io::progress::ProgressManager;
use crate::io::random::{parse_dimensions, random_image};
use crate::spatial::BoolImage;
use clap::Parser;
use num_bigint::BigUint;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridpreimage")]
#[command(
    author,
    version,
    about = "Count boolean grids that collapse to a given image under the single-cell 2x2 rule"
)]
/// Command-line arguments for the preimage counter
// Independent switches for verification and output control
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Grid file (text or PNG) or directory of grid files
    #[arg(value_name = "TARGET", required_unless_present = "random")]
    pub target: Option<PathBuf>,

    /// Count a random image of the given size instead, e.g. 3x8
    #[arg(short, long, value_name = "ROWSxCOLS", conflicts_with = "target")]
    pub random: Option<String>,

    /// Random seed for reproducible random images
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Probability that a random image cell is set
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Which image dimension to walk row by row
    #[arg(short, long, value_enum, default_value_t = Orientation::Narrowest)]
    pub orientation: Orientation,

    /// Cross-check each count by exhaustive search (small images only)
    #[arg(short, long)]
    pub verify: bool,

    /// Write the random image to this PNG path
    #[arg(long, value_name = "PATH", requires = "random", conflicts_with = "target")]
    pub save: Option<PathBuf>,

    /// Print each image before its count
    #[arg(long)]
    pub show: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Counter settings selected on the command line
    pub const fn counter_config(&self) -> CounterConfig {
        CounterConfig {
            orientation: self.orientation,
        }
    }
}

/// Where an image to count comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Grid file on disk
    File(PathBuf),
    /// Seeded random image
    Random {
        /// Image rows
        rows: usize,
        /// Image columns
        cols: usize,
    },
}

impl InputSource {
    /// Display name used in reports
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .unwrap_or(path.as_os_str())
                .to_string_lossy()
                .to_string(),
            Self::Random { rows, cols } => format!("random {rows}x{cols}"),
        }
    }
}

/// Result of counting one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountReport {
    /// Display name of the input
    pub name: String,
    /// The counted image
    pub image: BoolImage,
    /// Number of preimages
    pub count: BigUint,
    /// Whether the count was confirmed by exhaustive search
    pub verified: bool,
}

/// Orchestrates counting of every requested input with progress tracking
pub struct CountProcessor {
    cli: Cli,
    counter: PreimageCounter,
    progress_manager: Option<ProgressManager>,
}

impl CountProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let counter = PreimageCounter::new(cli.counter_config());

        Self {
            cli,
            counter,
            progress_manager,
        }
    }

    /// Count every input and print one line per input
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be loaded, counted or verified
    // Counts are the program's output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        let show = self.cli.show;
        self.run(|report| {
            if show {
                println!("{}", report.image);
            }
            let suffix = if report.verified { " (verified)" } else { "" };
            println!("{}: {}{suffix}", report.name, report.count);
        })
        .map(|_| ())
    }

    /// Count every input, handing each report to `on_report` as it completes
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be loaded, counted or verified
    pub fn run<F>(&mut self, mut on_report: F) -> Result<Vec<CountReport>>
    where
        F: FnMut(&CountReport),
    {
        let inputs = self.collect_inputs()?;
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(inputs.len());
        }

        let mut reports = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            let report = self.count_input(input, index)?;
            on_report(&report);
            reports.push(report);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    /// Resolve the command line into inputs
    ///
    /// # Errors
    ///
    /// Returns an error for malformed dimensions, an unusable target path or
    /// a save path without a random image
    pub fn collect_inputs(&self) -> Result<Vec<InputSource>> {
        if let (Some(save), None) = (&self.cli.save, &self.cli.random) {
            return Err(invalid_parameter(
                "save",
                &save.display(),
                &"only random images can be saved; pass --random",
            ));
        }

        if let Some(ref dimensions) = self.cli.random {
            let (rows, cols) = parse_dimensions(dimensions)?;
            return Ok(vec![InputSource::Random { rows, cols }]);
        }

        let Some(ref target) = self.cli.target else {
            return Err(invalid_parameter(
                "target",
                &"<none>",
                &"a grid file, directory or --random is required",
            ));
        };

        if target.is_file() {
            Ok(vec![InputSource::File(target.clone())])
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(target).map_err(|e| file_system_error(target, "read directory", e))?;
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(target, "read directory entry", e))?
                    .path();
                if path.is_file() && is_grid_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files.into_iter().map(InputSource::File).collect())
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a grid file or a directory",
            ))
        }
    }

    fn load_input(&self, input: &InputSource) -> Result<BoolImage> {
        match input {
            InputSource::File(path) => load_grid(path),
            InputSource::Random { rows, cols } => {
                let image = random_image(*rows, *cols, self.cli.density, self.cli.seed)?;
                if let Some(ref save_path) = self.cli.save {
                    save_png_grid(&image, save_path)?;
                }
                Ok(image)
            }
        }
    }

    fn count_input(&self, input: &InputSource, index: usize) -> Result<CountReport> {
        let name = input.name();
        let image = self.load_input(input)?;
        log::info!(
            "{name}: {}x{} image with {} set cells",
            image.rows(),
            image.cols(),
            image.count_set()
        );

        let traversal_rows = self.counter.oriented(&image).rows();
        if let Some(ref pm) = self.progress_manager {
            pm.start_input(index, &name, traversal_rows);
        }

        let count = self.counter.count_with_progress(&image, |progress| {
            if let Some(ref pm) = self.progress_manager {
                pm.update_row(index, progress);
            }
        })?;

        let verified = if self.cli.verify {
            verify_count(&image, &count)?
        } else {
            false
        };

        if let Some(ref pm) = self.progress_manager {
            pm.complete_input(index, &count.to_string());
        }

        Ok(CountReport {
            name,
            image,
            count,
            verified,
        })
    }
}

/// Compare a count against exhaustive search when the image is small enough
///
/// Returns `Ok(false)` when the image is too large to enumerate.
///
/// # Errors
///
/// Returns `VerificationFailed` when the counts disagree
pub fn verify_count(image: &BoolImage, count: &BigUint) -> Result<bool> {
    let cells = (image.rows() + 1) * (image.cols() + 1);
    if cells > MAX_BRUTE_FORCE_CELLS {
        log::warn!(
            "skipping verification: preimage has {cells} cells, limit is {MAX_BRUTE_FORCE_CELLS}"
        );
        return Ok(false);
    }

    let expected = brute_force_count(image)?;
    if &expected == count {
        Ok(true)
    } else {
        Err(PreimageError::VerificationFailed {
            transfer: count.to_string(),
            brute_force: expected.to_string(),
        })
    }
}

/// Whether a directory entry looks like a grid file
pub fn is_grid_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ext.eq_ignore_ascii_case(PNG_EXTENSION)
                || TEXT_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
