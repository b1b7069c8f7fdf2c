//! Terminal progress for batch runs: one bar per catalog showing the subject
//! being placed and the unplaced occurrences so far

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static CATALOG_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>16}} [{{bar:{PROGRESS_BAR_WIDTH}.green/white}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {pos}/{len} catalogs [{bar:40.green/white}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// What a run reports after each generation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepUpdate<'a> {
    /// Steps finished so far
    pub completed: usize,
    /// Subject attempted by the last step, if any
    pub subject: Option<&'a str>,
    /// Occurrences abandoned so far
    pub failures: usize,
}

/// Display state of one catalog's run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProgress {
    /// File name of the catalog
    pub name: String,
    /// Steps finished
    pub completed: usize,
    /// Steps the run takes
    pub total: usize,
    /// Last subject attempted
    pub subject: Option<String>,
    /// Occurrences abandoned so far
    pub failures: usize,
    /// Whether reports were written
    pub done: bool,
}

impl CatalogProgress {
    const fn new(name: String, total: usize) -> Self {
        Self {
            name,
            completed: 0,
            total,
            subject: None,
            failures: 0,
            done: false,
        }
    }

    /// Bar message: step count, current activity and unplaced count
    pub fn message(&self) -> String {
        let activity = if self.done {
            "done"
        } else if self.completed >= self.total && self.total > 0 {
            "backfill"
        } else {
            self.subject.as_deref().unwrap_or("starting")
        };

        let unplaced = if self.failures > 0 {
            format!(" ({} unplaced)", self.failures)
        } else {
            String::new()
        };
        format!("{}/{} {activity}{unplaced}", self.completed, self.total)
    }
}

/// Progress display for a batch of catalogs
///
/// At most [`MAX_INDIVIDUAL_PROGRESS_BARS`] catalog bars are shown, always
/// the most recently started ones. Larger batches get an extra batch bar
/// carrying the running total of unplaced occurrences.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    bars: Vec<ProgressBar>,
    catalogs: Vec<Option<CatalogProgress>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            bars: Vec::new(),
            catalogs: Vec::new(),
        }
    }

    /// Prepare bars for `catalog_count` catalogs
    pub fn initialize(&mut self, catalog_count: usize) {
        self.catalogs = vec![None; catalog_count];

        if catalog_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(u64::try_from(catalog_count).unwrap_or(u64::MAX));
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..catalog_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(CATALOG_STYLE.clone());
            self.bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of catalogs the manager was initialized for
    pub const fn catalog_count(&self) -> usize {
        self.catalogs.len()
    }

    /// Current display state of a started catalog
    pub fn catalog(&self, index: usize) -> Option<&CatalogProgress> {
        self.catalogs.get(index).and_then(Option::as_ref)
    }

    /// Unplaced occurrences across every started catalog
    pub fn total_failures(&self) -> usize {
        self.catalogs.iter().flatten().map(|catalog| catalog.failures).sum()
    }

    /// Begin tracking a catalog whose run takes `total_steps` steps
    pub fn start_catalog(&mut self, index: usize, path: &Path, total_steps: usize) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if index >= self.catalogs.len() {
            self.catalogs.resize(index + 1, None);
        }
        if let Some(slot) = self.catalogs.get_mut(index) {
            *slot = Some(CatalogProgress::new(name, total_steps));
        }
        self.redraw();
    }

    /// Record the state of a catalog's run after a step
    ///
    /// Updates for catalogs that were never started are ignored.
    pub fn update_step(&mut self, index: usize, update: StepUpdate<'_>) {
        let Some(catalog) = self.catalogs.get_mut(index).and_then(Option::as_mut) else {
            return;
        };

        catalog.completed = update.completed.min(catalog.total);
        if let Some(subject) = update.subject {
            catalog.subject = Some(subject.to_string());
        }
        catalog.failures = update.failures;
        self.redraw();
    }

    /// Mark a catalog finished, started or not
    pub fn complete_catalog(&mut self, index: usize) {
        if let Some(catalog) = self.catalogs.get_mut(index).and_then(Option::as_mut) {
            catalog.completed = catalog.total;
            catalog.done = true;
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        self.redraw();
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message(format!("{} unplaced", self.total_failures()));
        }
        let _ = self.multi_progress.clear();
    }

    fn redraw(&self) {
        let started: Vec<&CatalogProgress> = self.catalogs.iter().flatten().collect();
        let visible = started
            .get(started.len().saturating_sub(self.bars.len())..)
            .unwrap_or(&[]);

        for (bar, catalog) in self.bars.iter().zip(visible) {
            bar.set_length(u64::try_from(catalog.total).unwrap_or(u64::MAX));
            bar.set_position(u64::try_from(catalog.completed).unwrap_or(u64::MAX));
            bar.set_prefix(catalog.name.clone());
            bar.set_message(catalog.message());
        }

        for bar in self.bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_prefix(String::new());
            bar.set_message(String::new());
        }

        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.set_message(format!("{} unplaced", self.total_failures()));
        }
    }
}
