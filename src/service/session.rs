use std::io;
use std::path::Path;
use log::{error, info};
use crate::models::document::HostKind;
use crate::service::traits::i_automation::{AutomationHost, AutomationRuntime};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    Started,
    DocumentOpen,
    ShutDown,
}

/// 與單一自動化主機的連線，負責啟動、隱藏視窗與結束。
///
/// 每個工作階段在批次結束時恰好關閉一次；若在明確呼叫 `shutdown` 之前被丟棄
/// （例如另一個工作階段啟動失敗），由 `Drop` 代為關閉。
pub struct AutomationSession<H: AutomationHost> {
    host: H,
    state: SessionState,
}

impl<H: AutomationHost> AutomationSession<H> {
    /// 啟動主機、關閉可見性並取得文件集合。失敗時整個批次無法進行。
    pub fn start<R>(runtime: &R, kind: HostKind) -> io::Result<Self>
    where
        R: AutomationRuntime<Host = H>,
    {
        let host = runtime.launch(kind).map_err(|e| {
            io::Error::new(e.kind(), format!("Error creating {} application object: {}", kind.name(), e))
        })?;
        let mut session = AutomationSession { host, state: SessionState::Started };
        session.host.set_visible(false).map_err(|e| {
            io::Error::new(e.kind(), format!("Error hiding {} window: {}", kind.name(), e))
        })?;
        session.host.attach_documents().map_err(|e| {
            io::Error::new(e.kind(), format!("Error querying {} document collection: {}", kind.name(), e))
        })?;
        info!("{} session started", kind.name());
        Ok(session)
    }

    pub fn kind(&self) -> HostKind {
        self.host.kind()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn open_document(&mut self, path: &Path) -> io::Result<H::Document> {
        self.expect_state(SessionState::Started, "open a document")?;
        let document = self.host.open(path)?;
        self.state = SessionState::DocumentOpen;
        Ok(document)
    }

    pub fn export_as_pdf(&mut self, document: &H::Document, destination: &Path) -> io::Result<()> {
        self.expect_state(SessionState::DocumentOpen, "export a document")?;
        self.host.save_as_pdf(document, destination)
    }

    /// 關閉文件；無論結果如何，工作階段都回到閒置狀態
    pub fn close_document(&mut self, document: H::Document) -> io::Result<()> {
        self.expect_state(SessionState::DocumentOpen, "close a document")?;
        self.state = SessionState::Started;
        self.host.close(document)
    }

    /// 釋放文件集合、結束應用程式並釋放主機控制代碼
    pub fn shutdown(mut self) -> io::Result<()> {
        self.release()
    }

    fn release(&mut self) -> io::Result<()> {
        self.state = SessionState::ShutDown;
        self.host.release_documents();
        let result = self.host.quit();
        info!("{} session shut down", self.host.kind().name());
        result
    }

    fn expect_state(&self, expected: SessionState, action: &str) -> io::Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("cannot {} while {} session is {:?}", action, self.host.kind().name(), self.state),
            ))
        }
    }
}

impl<H: AutomationHost> Drop for AutomationSession<H> {
    fn drop(&mut self) {
        if self.state == SessionState::ShutDown {
            return;
        }
        if let Err(e) = self.release() {
            error!("Error quitting {}: {}", self.host.kind().name(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mock::{Event, MockRuntime};

    #[test]
    fn start_hides_window_and_attaches_collection() {
        let runtime = MockRuntime::new();
        let session = AutomationSession::start(&runtime, HostKind::WordProcessor).unwrap();
        assert_eq!(session.state(), SessionState::Started);
        assert_eq!(
            runtime.events(),
            vec![
                Event::Launch(HostKind::WordProcessor),
                Event::SetVisible(HostKind::WordProcessor, false),
                Event::Attach(HostKind::WordProcessor),
            ]
        );
    }

    #[test]
    fn shutdown_releases_then_quits_once() {
        let runtime = MockRuntime::new();
        let session = AutomationSession::start(&runtime, HostKind::Presentation).unwrap();
        session.shutdown().unwrap();
        assert_eq!(runtime.count(&Event::Release(HostKind::Presentation)), 1);
        assert_eq!(runtime.count(&Event::Quit(HostKind::Presentation)), 1);
        let events = runtime.events();
        assert_eq!(
            &events[events.len() - 2..],
            &[Event::Release(HostKind::Presentation), Event::Quit(HostKind::Presentation)]
        );
    }

    #[test]
    fn dropping_a_started_session_quits_the_host() {
        let runtime = MockRuntime::new();
        {
            let _session = AutomationSession::start(&runtime, HostKind::WordProcessor).unwrap();
        }
        assert_eq!(runtime.count(&Event::Quit(HostKind::WordProcessor)), 1);
    }

    #[test]
    fn failed_attach_still_quits_the_launched_host() {
        let runtime = MockRuntime::new().fail_attach(HostKind::Presentation);
        let err = AutomationSession::start(&runtime, HostKind::Presentation).err().unwrap();
        assert!(err.to_string().contains("PowerPoint"));
        assert_eq!(runtime.count(&Event::Quit(HostKind::Presentation)), 1);
    }

    #[test]
    fn failed_launch_is_reported() {
        let runtime = MockRuntime::new().fail_launch(HostKind::WordProcessor);
        let err = AutomationSession::start(&runtime, HostKind::WordProcessor).err().unwrap();
        assert!(err.to_string().contains("Error creating Word application object"));
        assert_eq!(runtime.count(&Event::Quit(HostKind::WordProcessor)), 0);
    }

    #[test]
    fn document_lifecycle_returns_session_to_idle() {
        let runtime = MockRuntime::new();
        let mut session = AutomationSession::start(&runtime, HostKind::WordProcessor).unwrap();
        let doc = session.open_document(Path::new("a.docx")).unwrap();
        assert_eq!(session.state(), SessionState::DocumentOpen);
        assert!(session.open_document(Path::new("b.docx")).is_err());
        session.export_as_pdf(&doc, Path::new("out/a.pdf")).unwrap();
        session.close_document(doc).unwrap();
        assert_eq!(session.state(), SessionState::Started);
        session.shutdown().unwrap();
    }
}
