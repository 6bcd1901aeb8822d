pub mod pack;
pub mod report;
pub mod sample;
pub mod suite;
mod utils;

use utils::get_absolute_paths;
use pack::CodeWidth;
use report::{Outcome, Report};
use sample::{Mode, Sample};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use compressor::{Code, Compressor, CompressorError};

use std::sync::mpsc::channel;
use thiserror::Error;
use tracing::{debug, info, warn};
use workerpool::Pool;
use workerpool::thunk::{Thunk, ThunkWorker};


#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Compressor(#[from] CompressorError),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(String),

    #[error("code {code} does not fit in {width} bytes")]
    CodeOverflow { code: Code, width: usize },

    #[error("{len} bytes of packed codes is not a multiple of {width}")]
    TruncatedCodes { len: usize, width: usize },

    #[error("round trip of {0} did not reproduce the input")]
    Mismatch(String),

    #[error("{0} is already compressed")]
    AlreadyCompressed(String),

    #[error("{0} has no codes to decompress")]
    NotCompressed(String),
}

/// Runs samples through compress and decompress on a worker pool.
pub struct Harness {
    n_workers: usize,
    width: CodeWidth,
    compressor: Arc<dyn Compressor>,
    pub samples: Vec<Sample>,
}

impl Harness {
    pub fn new(n_workers: usize, width: CodeWidth, compressor: Arc<dyn Compressor>) -> Self {
        Self {
            n_workers: n_workers.max(1),
            width,
            compressor,
            samples: Vec::new(),
        }
    }

    pub fn add_sample(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Queues every regular file under `dir` as a byte-mode sample.
    pub fn add_dir(&mut self, dir: &Path) -> Result<usize, HarnessError> {
        let paths = get_absolute_paths(dir).map_err(|source| HarnessError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let n_files = paths.len();

        for path in paths {
            self.samples.push(Sample::from_file(&path, Mode::Bytes)?);
        }

        info!("Queued {} files from {}", n_files, dir.display());
        Ok(n_files)
    }

    /// Drains the queued samples and returns one report per sample, in the
    /// order they were queued. A sample whose worker panicked has no report.
    pub fn run(&mut self) -> Vec<Report> {
        let workers = Pool::<ThunkWorker<Report>>::new(self.n_workers);
        let n_jobs = self.samples.len();

        info!("Total samples: {}", n_jobs);

        let (tx, rx) = channel();
        for (index, sample) in std::mem::take(&mut self.samples).into_iter().enumerate() {
            let compressor = self.compressor.clone();
            let width = self.width;

            debug!("Samples sent: {}/{}", index + 1, n_jobs);

            workers.execute_to(tx.clone(), Thunk::of(move || {
                worker_round_trip(index, sample, compressor, width)
            }));
        }
        drop(tx);

        let mut reports: Vec<Report> = rx.iter()
            .take(n_jobs)
            .inspect(|report| {
                match &report.outcome {
                    Outcome::Passed { code_count } => {
                        debug!("Finished {}: {} bytes -> {} codes", report.name, report.length, code_count);
                    }
                    Outcome::Failed(e) => {
                        warn!("Round trip of {} failed: {}", report.name, e);
                    }
                }
            })
            .collect();

        if reports.len() < n_jobs {
            warn!("Only {} of {} samples reported back", reports.len(), n_jobs);
        }

        reports.sort_by_key(|report| report.index);
        reports
    }
}

fn worker_round_trip(index: usize, sample: Sample, compressor: Arc<dyn Compressor>, width: CodeWidth) -> Report {
    let name = sample.name.clone();
    let length = sample.size();

    let outcome = sample
        .compress(compressor.clone())
        .and_then(|sample| {
            sample.verify(compressor)?;
            Ok(sample.code_count())
        });

    Report {
        index,
        name,
        length,
        width,
        outcome: match outcome {
            Ok(code_count) => Outcome::Passed { code_count },
            Err(e) => Outcome::Failed(e.to_string()),
        },
    }
}
