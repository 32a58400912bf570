use std::fs;
use std::io;
use log::{info, warn};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::models::file::FileCollectInput;
use crate::service::com::ComRuntime;
use crate::service::controller::ConversionController;
use crate::service::file::FileService;
use crate::service::traits::i_automation::AutomationRuntime;
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::utils::create_progress_bar;

pub struct ConversionFacade<'a, R: AutomationRuntime> {
    file_service: Box<dyn FileServiceTrait>,
    runtime: &'a R,
}

impl<'a, R: AutomationRuntime> ConversionFacade<'a, R> {
    pub fn new(file_service: Box<dyn FileServiceTrait>, runtime: &'a R) -> Self {
        ConversionFacade { file_service, runtime }
    }
}

impl<'a, R: AutomationRuntime> ConversionFacadeTrait for ConversionFacade<'a, R> {
    fn execute_conversion(&self, input: ConversionInput) -> io::Result<ConversionOutput> {
        let file_output = self.file_service.collect_files(FileCollectInput {
            input_path: input.input_path.clone(),
            exclude_patterns: input.exclude.clone(),
        })?;

        let total_files = file_output.files.len();
        println!("== {} files found ==", total_files);
        if !file_output.unsupported.is_empty() {
            info!("{} unsupported files skipped", file_output.unsupported.len());
        }

        fs::create_dir_all(&input.output_dir).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Error creating directory {}: {}", input.output_dir.display(), e),
            )
        })?;

        if total_files == 0 {
            warn!("No Word or PowerPoint files found under {}", input.input_path.display());
        }

        println!("Converting...");
        let pb = create_progress_bar(total_files as u64, input.no_progress);
        let report = ConversionController::new(self.runtime).convert(&file_output.files, &input.output_dir, &pb)?;
        pb.finish(&report);

        Ok(ConversionOutput {
            output_path: input.output_dir,
            report,
        })
    }
}

/// 轉換執行適配器：取得 COM 執行環境並在整個批次期間持有
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        let runtime = ComRuntime::initialize()?;
        run_with_runtime(&runtime, config)
    }
}

pub fn run_with_runtime<R: AutomationRuntime>(runtime: &R, config: AppConfig) -> io::Result<ConversionOutput> {
    info!(
        "Converting documents under {} into {}",
        config.input.display(),
        config.output.display()
    );
    let facade: Box<dyn ConversionFacadeTrait + '_> =
        Box::new(ConversionFacade::new(Box::new(FileService::new()), runtime));
    facade.execute_conversion(ConversionInput {
        input_path: config.input,
        output_dir: config.output,
        exclude: config.exclude,
        no_progress: config.no_progress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use crate::models::conversion::BatchReport;
    use crate::models::document::HostKind;
    use crate::service::mock::{Event, MockRuntime};

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    fn config(dir: &Path) -> AppConfig {
        AppConfig {
            input: dir.to_path_buf(),
            output: dir.join("PDF"),
            exclude: None,
            no_progress: true,
        }
    }

    #[test]
    fn writes_one_flat_pdf_per_document() {
        let dir = tempfile::tempdir().unwrap();
        for rel in ["a.docx", "x/b.docx", "x/y/c.docx", "d.pptx", "x/e.pptx", "notes.txt"] {
            touch(dir.path(), rel);
        }
        let runtime = MockRuntime::new().write_output();
        let output = run_with_runtime(&runtime, config(dir.path())).unwrap();

        assert_eq!(output.report.discovered, 5);
        assert_eq!(output.report.converted, 5);
        let mut written: Vec<String> = fs::read_dir(dir.path().join("PDF"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        written.sort();
        assert_eq!(written, vec!["a.pdf", "b.pdf", "c.pdf", "d.pdf", "e.pdf"]);
        assert!(output.summary().contains("Converted 5 of 5 files, 0 failed"));
    }

    #[test]
    fn failed_open_leaves_no_output_and_batch_continues() {
        let dir = tempfile::tempdir().unwrap();
        for rel in ["a.docx", "b.docx", "c.pptx"] {
            touch(dir.path(), rel);
        }
        let runtime = MockRuntime::new().write_output().fail_open("a.docx");
        let output = run_with_runtime(&runtime, config(dir.path())).unwrap();

        assert_eq!(output.report.open_failed, 1);
        assert!(!dir.path().join("PDF/a.pdf").exists());
        assert!(dir.path().join("PDF/b.pdf").exists());
        assert!(dir.path().join("PDF/c.pdf").exists());
    }

    #[test]
    fn empty_input_still_starts_and_stops_both_hosts() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = MockRuntime::new();
        let output = run_with_runtime(&runtime, config(dir.path())).unwrap();

        assert_eq!(output.report, BatchReport::default());
        assert!(dir.path().join("PDF").is_dir());
        assert_eq!(runtime.count(&Event::Quit(HostKind::WordProcessor)), 1);
        assert_eq!(runtime.count(&Event::Quit(HostKind::Presentation)), 1);
    }

    #[test]
    fn walk_failure_is_fatal_before_hosts_start() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = MockRuntime::new();
        let mut config = config(dir.path());
        config.input = dir.path().join("missing");
        assert!(run_with_runtime(&runtime, config).is_err());
        assert!(runtime.events().is_empty());
    }
}
