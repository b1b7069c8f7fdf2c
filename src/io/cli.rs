//! Command-line interface for batch timetable generation from catalog files

use crate::algorithm::executor::{GenerationConfig, TimetableGenerator};
use crate::io::catalog::load_catalog;
use crate::io::configuration::{
    CATALOG_EXTENSIONS, DEFAULT_DAYS, DEFAULT_LUNCH_SLOT, DEFAULT_SECTIONS, DEFAULT_SLOTS_PER_DAY,
    MAX_FACULTIES,
};
use crate::io::error::{Result, WithPath, path_error};
use crate::io::progress::{ProgressManager, StepUpdate};
use crate::io::report::{workload_path, write_reports};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "timetabler")]
#[command(
    author,
    version,
    about = "Generate weekly section timetables using a randomized greedy placement"
)]
/// Command-line arguments for the timetable generator
pub struct Cli {
    /// Catalog file or directory of catalogs to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation (defaults to the current time)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of sections to schedule
    #[arg(long, default_value_t = DEFAULT_SECTIONS)]
    pub sections: usize,

    /// Teaching days per week
    #[arg(long, default_value_t = DEFAULT_DAYS)]
    pub days: usize,

    /// Slots per day, lunch included
    #[arg(long, default_value_t = DEFAULT_SLOTS_PER_DAY)]
    pub slots: usize,

    /// 0-based index of the lunch slot
    #[arg(short, long, default_value_t = DEFAULT_LUNCH_SLOT)]
    pub lunch_slot: usize,

    /// Maximum distinct faculty names
    #[arg(short, long, default_value_t = MAX_FACULTIES)]
    pub faculty_capacity: usize,

    /// Directory for reports (defaults to the catalog's directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process catalogs even if reports exist
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing reports should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Explicit seed, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| {
                    elapsed
                        .as_secs()
                        .wrapping_mul(1_000_000_000)
                        .wrapping_add(u64::from(elapsed.subsec_nanos()))
                })
        })
    }

    /// Run parameters for one catalog
    pub const fn generation_config(&self, seed: u64) -> GenerationConfig {
        GenerationConfig {
            sections: self.sections,
            days: self.days,
            slots_per_day: self.slots,
            lunch_slot: self.lunch_slot,
            faculty_capacity: self.faculty_capacity,
            seed,
        }
    }
}

/// Whether a path has a catalog extension
pub fn is_catalog_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CATALOG_EXTENSIONS.contains(&ext))
}

/// Orchestrates batch processing of catalog files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    seed: u64,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let seed = cli.resolve_seed();

        Self {
            cli,
            seed,
            progress_manager,
        }
    }

    /// Seed shared by every catalog of this batch
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Process catalogs according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, catalog reading, generation or
    /// report writing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        tracing::info!(catalogs = files.len(), seed = self.seed, "processing");

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_catalog_file(target) {
                return Err(path_error(target, "Target file must be a .txt or .csv catalog"));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if path.is_file() && is_catalog_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error(
                target,
                "Target must be a catalog file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = workload_path(&self.output_dir(input_path), &Self::stem(input_path));
        if output_path.exists() {
            tracing::info!(catalog = %input_path.display(), "skipping, reports exist");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let catalog = load_catalog(input_path)?;
        if catalog.is_empty() {
            tracing::warn!(catalog = %input_path.display(), "no subjects, skipping");
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_catalog(index);
            }
            return Ok(());
        }

        let config = self.cli.generation_config(self.seed);
        let mut generator = TimetableGenerator::new(&catalog, config)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_catalog(index, input_path, generator.total_steps());
        }

        loop {
            let more = generator.step();
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_step(
                    index,
                    StepUpdate {
                        completed: generator.completed_steps(),
                        subject: generator.last_subject().map(|subject| subject.name.as_str()),
                        failures: generator.failures().len(),
                    },
                );
            }
            if !more {
                break;
            }
        }

        let result = generator.into_result();
        let written = write_reports(
            &result,
            &catalog,
            &self.output_dir(input_path),
            &Self::stem(input_path),
        )?;

        tracing::info!(
            catalog = %input_path.display(),
            reports = written.len(),
            failures = result.failures.len(),
            "reports written"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_catalog(index);
        }

        Ok(())
    }

    fn output_dir(&self, input_path: &Path) -> PathBuf {
        self.cli.output.clone().unwrap_or_else(|| {
            input_path
                .parent()
                .map_or_else(PathBuf::new, Path::to_path_buf)
        })
    }

    fn stem(input_path: &Path) -> String {
        input_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}
