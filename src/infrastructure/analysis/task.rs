use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval};

use crate::errors::AnalysisError;
use crate::entities::skill::NewSkill;
use crate::settings::AppConfig;

use super::extractor::{ResumeDocument, SkillExtractor};

/// Outcome of a finished analysis run. Nothing is written anywhere by the
/// task itself; feeding `skills` into a catalog is the caller's decision.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub file_name: String,
    pub skills: Vec<NewSkill>,
    pub elapsed: Duration,
    pub completed_at: DateTime<Utc>,
}

/// A time-bounded, cancellable simulated analysis run. Progress advances
/// on a fixed tick until it reaches 100, then the extractor produces the
/// report. Cancelling aborts the run and discards the pending delivery
/// with no side effects.
pub struct AnalysisTask {
    progress: watch::Receiver<u8>,
    handle: JoinHandle<Result<AnalysisReport, AnalysisError>>,
}

impl AnalysisTask {
    pub fn spawn(
        config: &AppConfig,
        extractor: Arc<dyn SkillExtractor>,
        document: ResumeDocument,
    ) -> Self {
        let (tx, rx) = watch::channel(0u8);
        let tick = config.analysis_tick();
        let step = config.analysis_progress_step;

        let handle = tokio::spawn(async move {
            let started = Instant::now();
            let mut ticker = interval(tick);
            // the first interval tick resolves immediately
            ticker.tick().await;

            let mut progress = 0u8;
            while progress < 100 {
                ticker.tick().await;
                progress = progress.saturating_add(step).min(100);
                let _ = tx.send(progress);
                tracing::trace!(file = %document.file_name, progress, "Analysis progress");
            }

            let skills = extractor.extract_skills(&document).await?;
            let elapsed = started.elapsed();

            tracing::info!(
                file = %document.file_name,
                count = skills.len(),
                "Resume analyzed in {}",
                humantime::format_duration(Duration::from_millis(elapsed.as_millis() as u64))
            );

            Ok(AnalysisReport {
                file_name: document.file_name,
                skills,
                elapsed,
                completed_at: Utc::now(),
            })
        });

        AnalysisTask {
            progress: rx,
            handle,
        }
    }

    /// Watch side of the progress counter (0 to 100).
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }

    /// Aborts the run. Awaiting the task afterwards yields
    /// [`AnalysisError::Cancelled`]; no report is delivered.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Waits for the run to finish and returns its report.
    pub async fn await_report(self) -> Result<AnalysisReport, AnalysisError> {
        self.handle.await?
    }
}
