//! Office 自動化主機：Windows 上透過 COM 驅動 Word 與 PowerPoint

#[cfg(windows)]
mod dispatch;

#[cfg(windows)]
pub use dispatch::{ComHost, ComRuntime};

#[cfg(not(windows))]
pub use unavailable::{ComHost, ComRuntime};

/// Word `wdFormatPDF`
pub const WD_FORMAT_PDF: i32 = 17;
/// PowerPoint `ppSaveAsPDF`
pub const PP_SAVE_AS_PDF: i32 = 32;

/// 組合自動化例外訊息；主機未提供說明時使用 HRESULT 的訊息
pub fn exception_message(member: &str, source: &str, description: &str, fallback: &str) -> String {
    let description = description.trim();
    let detail = if description.is_empty() { fallback.trim() } else { description };
    match source.trim() {
        "" => format!("{} failed: {}", member, detail),
        source => format!("{} failed: {} ({})", member, detail, source),
    }
}


#[cfg(not(windows))]
mod unavailable {
    use std::io;
    use std::path::Path;
    use crate::models::document::HostKind;
    use crate::service::traits::i_automation::{AutomationHost, AutomationRuntime};

    /// 非 Windows 平台沒有 Office 自動化介面
    pub struct ComRuntime {
        _private: (),
    }

    impl ComRuntime {
        pub fn initialize() -> io::Result<Self> {
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "Office automation requires Windows with Word and PowerPoint installed",
            ))
        }
    }

    impl AutomationRuntime for ComRuntime {
        type Host = ComHost;

        fn launch(&self, kind: HostKind) -> io::Result<ComHost> {
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("{} automation is not available on this platform", kind.name()),
            ))
        }
    }

    pub enum ComHost {}

    impl AutomationHost for ComHost {
        type Document = ();

        fn kind(&self) -> HostKind {
            match *self {}
        }

        fn set_visible(&mut self, _visible: bool) -> io::Result<()> {
            match *self {}
        }

        fn attach_documents(&mut self) -> io::Result<()> {
            match *self {}
        }

        fn open(&mut self, _path: &Path) -> io::Result<()> {
            match *self {}
        }

        fn save_as_pdf(&mut self, _document: &(), _destination: &Path) -> io::Result<()> {
            match *self {}
        }

        fn close(&mut self, _document: ()) -> io::Result<()> {
            match *self {}
        }

        fn release_documents(&mut self) {
            match *self {}
        }

        fn quit(&mut self) -> io::Result<()> {
            match *self {}
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn initialize_reports_unsupported_platform() {
            let err = ComRuntime::initialize().err().unwrap();
            assert_eq!(err.kind(), io::ErrorKind::Unsupported);
        }
    }
}
