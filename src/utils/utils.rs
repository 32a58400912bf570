use std::io;
use std::path::Path;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use regex::RegexSet;
use crate::models::conversion::BatchReport;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("logger setup failed: {}", e)))
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    /// 顯示目前處理中的檔案
    pub fn update(&self, index: u64, file: &Path) {
        if self.no_progress {
            return;
        }
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.display().to_string());
        self.pb.set_message(format!("Converting {}/{}: {}", index, self.pb.length().unwrap_or(0), name));
    }

    #[cfg(test)]
    pub fn message(&self) -> String {
        self.pb.message()
    }

    pub fn advance(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self, report: &BatchReport) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(format!(
            "Done: {} converted, {} failed in {:.1}s",
            report.converted,
            report.failed(),
            self.start.elapsed().as_secs_f64()
        ));
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}

/// 將 `*` 萬用字元模式轉為正規表示式集合，無效時回退為空集
pub fn create_regex_set(patterns: &[String]) -> RegexSet {
    let patterns: Vec<_> = patterns
        .iter()
        .map(|p| format!("^{}$", regex::escape(p).replace("\\*", ".*")))
        .collect();

    RegexSet::new(&patterns).unwrap_or_else(|e| {
        log::warn!("Invalid exclude pattern: {}, nothing will be excluded", e);
        RegexSet::empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_patterns_match_whole_file_names() {
        let set = create_regex_set(&["~$*".to_string(), "*.tmp.docx".to_string()]);
        assert!(set.is_match("~$report.docx"));
        assert!(set.is_match("draft.tmp.docx"));
        assert!(!set.is_match("report.docx"));
        assert!(!set.is_match("draftXtmp.docx"));
    }

    #[test]
    fn empty_pattern_list_matches_nothing() {
        let set = create_regex_set(&[]);
        assert!(!set.is_match("anything.docx"));
    }
}
