use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use log::{error, info, warn};
use crate::models::conversion::BatchReport;
use crate::models::document::{ConversionJob, HostKind};
use crate::service::session::AutomationSession;
use crate::service::traits::i_automation::{AutomationHost, AutomationRuntime};
use crate::utils::utils::ProgressManager;

enum Outcome {
    Converted,
    OpenFailed,
    ExportFailed,
}

/// 批次轉換的核心：持有兩個自動化工作階段，依序處理每個檔案。
///
/// 開啟或匯出失敗只影響該檔案；工作階段無法啟動則整個批次失敗。
pub struct ConversionController<'a, R: AutomationRuntime> {
    runtime: &'a R,
}

impl<'a, R: AutomationRuntime> ConversionController<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        ConversionController { runtime }
    }

    pub fn convert(
        &self,
        sources: &[PathBuf],
        destination_dir: &Path,
        progress: &ProgressManager,
    ) -> io::Result<BatchReport> {
        // 兩個主機一律啟動，即使清單中只有其中一種文件
        let mut word = AutomationSession::start(self.runtime, HostKind::WordProcessor)?;
        let mut presentation = AutomationSession::start(self.runtime, HostKind::Presentation)?;

        let mut report = BatchReport { discovered: sources.len(), ..BatchReport::default() };
        let mut destinations = HashSet::new();

        for source in sources {
            let job = match ConversionJob::plan(source, destination_dir) {
                Some(job) => job,
                None => {
                    warn!("Unsupported file type: {}", source.display());
                    continue;
                }
            };
            if !destinations.insert(job.destination().to_path_buf()) {
                warn!(
                    "{} maps to an existing output {}, overwriting",
                    source.display(),
                    job.destination().display()
                );
            }

            info!("Converting: {}", source.display());
            report.attempted += 1;
            progress.update(report.attempted as u64, source);

            let outcome = match job.kind().host() {
                Some(HostKind::WordProcessor) => convert_job(&mut word, &job),
                Some(HostKind::Presentation) => convert_job(&mut presentation, &job),
                None => continue,
            };
            match outcome {
                Outcome::Converted => report.converted += 1,
                Outcome::OpenFailed => report.open_failed += 1,
                Outcome::ExportFailed => report.export_failed += 1,
            }
            progress.advance();
        }

        if let Err(e) = presentation.shutdown() {
            error!("Error quitting PowerPoint: {}", e);
        }
        if let Err(e) = word.shutdown() {
            error!("Error quitting Word: {}", e);
        }

        info!(
            "Batch finished: {} discovered, {} attempted, {} converted, {} failed",
            report.discovered,
            report.attempted,
            report.converted,
            report.failed()
        );
        Ok(report)
    }
}

fn document_label(kind: HostKind) -> &'static str {
    match kind {
        HostKind::WordProcessor => "document",
        HostKind::Presentation => "presentation",
    }
}

/// 開啟 → 匯出 → 關閉；只要文件成功開啟就一定會嘗試關閉
fn convert_job<H: AutomationHost>(session: &mut AutomationSession<H>, job: &ConversionJob) -> Outcome {
    let label = document_label(session.kind());
    let document = match session.open_document(job.source()) {
        Ok(document) => document,
        Err(e) => {
            error!("Error opening {} {}: {}", label, job.source().display(), e);
            return Outcome::OpenFailed;
        }
    };

    let outcome = match session.export_as_pdf(&document, job.destination()) {
        Ok(()) => Outcome::Converted,
        Err(e) => {
            error!("Error saving {} {}: {}", label, job.source().display(), e);
            Outcome::ExportFailed
        }
    };

    if let Err(e) = session.close_document(document) {
        error!("Error closing {} {}: {}", label, job.source().display(), e);
    }
    outcome
}
