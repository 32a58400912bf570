use std::path::PathBuf;

#[derive(Clone)]
pub struct ConversionInput {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub exclude: Option<Vec<String>>,
    pub no_progress: bool,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub output_path: PathBuf,
    pub report: BatchReport,
}

impl ConversionOutput {
    pub fn summary(&self) -> String {
        format!(
            "Converted {} of {} files, {} failed. Output: {}",
            self.report.converted,
            self.report.discovered,
            self.report.failed(),
            self.output_path.display()
        )
    }
}

/// 一次批次轉換的統計，僅供日誌與結尾摘要使用
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub discovered: usize,
    pub attempted: usize,
    pub converted: usize,
    pub open_failed: usize,
    pub export_failed: usize,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.open_failed + self.export_failed
    }
}
