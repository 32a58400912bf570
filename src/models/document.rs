use std::path::{Path, PathBuf};

/// 依副檔名推斷的文件類別
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DocumentKind {
    WordDocument,
    PresentationDocument,
    Unsupported,
}

/// 自動化主機類別，每種可轉換的文件恰好對應一種
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HostKind {
    WordProcessor,
    Presentation,
}

impl DocumentKind {
    pub fn host(self) -> Option<HostKind> {
        match self {
            DocumentKind::WordDocument => Some(HostKind::WordProcessor),
            DocumentKind::PresentationDocument => Some(HostKind::Presentation),
            DocumentKind::Unsupported => None,
        }
    }
}

impl HostKind {
    pub fn name(self) -> &'static str {
        match self {
            HostKind::WordProcessor => "Word",
            HostKind::Presentation => "PowerPoint",
        }
    }
}

/// 依副檔名（不分大小寫）分類檔案
pub fn classify(path: &Path) -> DocumentKind {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "doc" | "docx" => DocumentKind::WordDocument,
        "ppt" | "pptx" => DocumentKind::PresentationDocument,
        _ => DocumentKind::Unsupported,
    }
}

/// 單一檔案的轉換工作：來源、類別與輸出路徑
#[derive(Clone, PartialEq, Debug)]
pub struct ConversionJob {
    source: PathBuf,
    kind: DocumentKind,
    destination: PathBuf,
}

impl ConversionJob {
    /// 為來源檔案建立轉換工作，不支援的類型回傳 None。
    /// 輸出檔名為去除副檔名後加上 ".pdf"，直接放在輸出目錄下。
    pub fn plan(source: &Path, destination_dir: &Path) -> Option<Self> {
        let kind = classify(source);
        kind.host()?;
        let mut name = source.file_stem()?.to_os_string();
        name.push(".pdf");
        Some(ConversionJob {
            source: source.to_path_buf(),
            kind,
            destination: destination_dir.join(name),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_supported_extensions_case_insensitively() {
        for name in ["a.doc", "a.docx", "A.DOC", "b.DocX"] {
            assert_eq!(classify(Path::new(name)), DocumentKind::WordDocument, "{}", name);
        }
        for name in ["a.ppt", "a.pptx", "A.PPT", "b.PptX"] {
            assert_eq!(classify(Path::new(name)), DocumentKind::PresentationDocument, "{}", name);
        }
    }

    #[test]
    fn everything_else_is_unsupported() {
        for name in ["a.txt", "a.pdf", "a.xlsx", "docx", "a.docx.bak", "a.", ".docx"] {
            assert_eq!(classify(Path::new(name)), DocumentKind::Unsupported, "{}", name);
        }
    }

    #[test]
    fn destination_is_flat_under_output_dir() {
        let job = ConversionJob::plan(Path::new("/in/deep/nested/Report.DOCX"), Path::new("/out")).unwrap();
        assert_eq!(job.destination(), Path::new("/out/Report.pdf"));
        assert_eq!(job.kind(), DocumentKind::WordDocument);
        assert_eq!(job.source(), Path::new("/in/deep/nested/Report.DOCX"));

        let job = ConversionJob::plan(Path::new("/in/q3.v2.pptx"), Path::new("/out")).unwrap();
        assert_eq!(job.destination(), Path::new("/out/q3.v2.pdf"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_stem_is_kept_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let source = Path::new("/in").join(OsStr::from_bytes(b"r\xe9sum\xe9.docx"));
        let job = ConversionJob::plan(&source, Path::new("/out")).unwrap();
        assert_eq!(
            job.destination().file_name().unwrap().as_bytes(),
            b"r\xe9sum\xe9.pdf"
        );
    }

    #[test]
    fn unsupported_paths_produce_no_job() {
        assert!(ConversionJob::plan(Path::new("/in/notes.txt"), Path::new("/out")).is_none());
    }

    #[test]
    fn kinds_map_to_hosts() {
        assert_eq!(DocumentKind::WordDocument.host(), Some(HostKind::WordProcessor));
        assert_eq!(DocumentKind::PresentationDocument.host(), Some(HostKind::Presentation));
        assert_eq!(DocumentKind::Unsupported.host(), None);
    }
}
