use std::io;
use std::path::Path;
use log::{debug, info};
use walkdir::WalkDir;
use crate::models::document::{classify, DocumentKind};
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::utils::create_regex_set;

/// 檔案服務，遞迴收集可轉換的 Word 與 PowerPoint 檔案
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    /// 依檔名排序走訪輸入目錄，只看副檔名，不讀取內容。
    /// 走訪錯誤會直接回傳，由呼叫端視為致命錯誤。
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput> {
        let exclude_set = create_regex_set(&input.exclude_patterns.unwrap_or_default());
        let mut output = FileCollectOutput {
            files: Vec::new(),
            unsupported: Vec::new(),
            excluded: 0,
        };

        for entry in WalkDir::new(&input.input_path).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| input.input_path.clone());
                io::Error::new(io::ErrorKind::Other, format!("Error walking {}: {}", path.display(), e))
            })?;
            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            let name = entry.file_name().to_string_lossy();
            if exclude_set.is_match(&name) {
                debug!("Excluded by pattern: {}", path.display());
                output.excluded += 1;
                continue;
            }

            match classify(path) {
                DocumentKind::Unsupported => {
                    info!("Unsupported file type: {}", path.display());
                    output.unsupported.push(path.to_path_buf());
                }
                _ => output.files.push(path.to_path_buf()),
            }
        }

        Ok(output)
    }
}
