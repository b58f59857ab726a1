//! Job execution, sequential or on a fixed pool of worker threads.
//!
//! Jobs are independent: they share only the read-only downloader and write
//! to disjoint files, so the parallel path needs no coordination beyond the
//! final join.

use std::path::PathBuf;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{error, info};

use crate::download::{DownloadJob, TileDownloader};
use crate::error::{FetchError, FetchResult};
use crate::http::HttpClient;

/// Outcome of a fully successful execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Number of jobs that completed
    pub completed: usize,
    /// Files written, grouped by job in input order
    pub files: Vec<PathBuf>,
}

/// Runs download jobs to completion.
///
/// - `workers <= 1`: jobs run one after another in input order and the first
///   failure stops the run.
/// - `workers > 1`: jobs are spread over a dedicated pool of exactly
///   `workers` threads. Completion order is unspecified and a failing job
///   does not cancel the others; once every job has finished, the first
///   failure in input order is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobExecutor {
    workers: usize,
}

impl JobExecutor {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    pub fn is_parallel(&self) -> bool {
        self.workers > 1
    }

    /// Execute every job with `downloader`.
    pub fn execute<C: HttpClient>(
        &self,
        jobs: &[DownloadJob],
        downloader: &TileDownloader<C>,
    ) -> FetchResult<ExecutionReport> {
        if self.is_parallel() {
            self.execute_parallel(jobs, downloader)
        } else {
            Self::execute_sequential(jobs, downloader)
        }
    }

    fn execute_sequential<C: HttpClient>(
        jobs: &[DownloadJob],
        downloader: &TileDownloader<C>,
    ) -> FetchResult<ExecutionReport> {
        let mut report = ExecutionReport::default();
        for job in jobs {
            let files = run_job(downloader, job)?;
            report.completed += 1;
            report.files.extend(files);
        }
        Ok(report)
    }

    fn execute_parallel<C: HttpClient>(
        &self,
        jobs: &[DownloadJob],
        downloader: &TileDownloader<C>,
    ) -> FetchResult<ExecutionReport> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("download-worker-{}", i))
            .build()
            .map_err(|e| FetchError::WorkerPool(e.to_string()))?;

        info!(workers = self.workers, jobs = jobs.len(), "Starting worker pool");

        let results: Vec<FetchResult<Vec<PathBuf>>> = pool.install(|| {
            jobs.par_iter()
                .map(|job| run_job(downloader, job))
                .collect()
        });

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            error!(failed = failed, total = jobs.len(), "Download jobs failed");
        }

        let mut report = ExecutionReport::default();
        for result in results {
            report.files.extend(result?);
            report.completed += 1;
        }
        Ok(report)
    }
}

/// Run one job, logging its failure before handing the error back.
fn run_job<C: HttpClient>(
    downloader: &TileDownloader<C>,
    job: &DownloadJob,
) -> FetchResult<Vec<PathBuf>> {
    downloader.download(job).inspect_err(|e| {
        error!(
            tile = %job.tile,
            band = job.band,
            epoch = job.epoch,
            error = %e,
            "Download job failed"
        );
    })
}
