//! 測試用的自動化執行環境，記錄每一次主機呼叫並可注入失敗
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use crate::models::document::HostKind;
use crate::service::traits::i_automation::{AutomationHost, AutomationRuntime};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event {
    Launch(HostKind),
    SetVisible(HostKind, bool),
    Attach(HostKind),
    Open(HostKind, PathBuf),
    SaveAs(HostKind, PathBuf, PathBuf),
    Close(HostKind, PathBuf),
    Release(HostKind),
    Quit(HostKind),
}

#[derive(Default)]
struct Failures {
    launch: Vec<HostKind>,
    attach: Vec<HostKind>,
    open: Vec<String>,
    export: Vec<String>,
    close: Vec<String>,
    write_output: bool,
}

pub struct MockRuntime {
    events: Rc<RefCell<Vec<Event>>>,
    failures: Rc<Failures>,
}

impl MockRuntime {
    pub fn new() -> Self {
        MockRuntime {
            events: Rc::new(RefCell::new(Vec::new())),
            failures: Rc::new(Failures::default()),
        }
    }

    fn configure(mut self, f: impl FnOnce(&mut Failures)) -> Self {
        f(Rc::get_mut(&mut self.failures).expect("configure before launching hosts"));
        self
    }

    pub fn fail_launch(self, kind: HostKind) -> Self {
        self.configure(|f| f.launch.push(kind))
    }

    pub fn fail_attach(self, kind: HostKind) -> Self {
        self.configure(|f| f.attach.push(kind))
    }

    /// 依檔名讓開啟失敗
    pub fn fail_open(self, file_name: &str) -> Self {
        self.configure(|f| f.open.push(file_name.to_string()))
    }

    /// 依檔名讓匯出失敗
    pub fn fail_export(self, file_name: &str) -> Self {
        self.configure(|f| f.export.push(file_name.to_string()))
    }

    /// 依檔名讓關閉失敗
    pub fn fail_close(self, file_name: &str) -> Self {
        self.configure(|f| f.close.push(file_name.to_string()))
    }

    /// 匯出成功時實際寫出目的檔
    pub fn write_output(self) -> Self {
        self.configure(|f| f.write_output = true)
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default()
}

impl AutomationRuntime for MockRuntime {
    type Host = MockHost;

    fn launch(&self, kind: HostKind) -> io::Result<MockHost> {
        self.events.borrow_mut().push(Event::Launch(kind));
        if self.failures.launch.contains(&kind) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "class not registered"));
        }
        Ok(MockHost {
            kind,
            events: Rc::clone(&self.events),
            failures: Rc::clone(&self.failures),
        })
    }
}

pub struct MockHost {
    kind: HostKind,
    events: Rc<RefCell<Vec<Event>>>,
    failures: Rc<Failures>,
}

impl MockHost {
    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl AutomationHost for MockHost {
    type Document = PathBuf;

    fn kind(&self) -> HostKind {
        self.kind
    }

    fn set_visible(&mut self, visible: bool) -> io::Result<()> {
        self.record(Event::SetVisible(self.kind, visible));
        Ok(())
    }

    fn attach_documents(&mut self) -> io::Result<()> {
        self.record(Event::Attach(self.kind));
        if self.failures.attach.contains(&self.kind) {
            return Err(io::Error::new(io::ErrorKind::Other, "member not found"));
        }
        Ok(())
    }

    fn open(&mut self, path: &Path) -> io::Result<PathBuf> {
        self.record(Event::Open(self.kind, path.to_path_buf()));
        if self.failures.open.contains(&file_name(path)) {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "file is corrupt"));
        }
        Ok(path.to_path_buf())
    }

    fn save_as_pdf(&mut self, document: &PathBuf, destination: &Path) -> io::Result<()> {
        self.record(Event::SaveAs(self.kind, document.clone(), destination.to_path_buf()));
        if self.failures.export.contains(&file_name(document)) {
            return Err(io::Error::new(io::ErrorKind::Other, "export failed"));
        }
        if self.failures.write_output {
            fs::write(destination, b"%PDF-1.7\n")?;
        }
        Ok(())
    }

    fn close(&mut self, document: PathBuf) -> io::Result<()> {
        let failed = self.failures.close.contains(&file_name(&document));
        self.record(Event::Close(self.kind, document));
        if failed {
            return Err(io::Error::new(io::ErrorKind::Other, "document is busy"));
        }
        Ok(())
    }

    fn release_documents(&mut self) {
        self.record(Event::Release(self.kind));
    }

    fn quit(&mut self) -> io::Result<()> {
        self.record(Event::Quit(self.kind));
        Ok(())
    }
}
