use std::io;
use std::path::Path;
use crate::models::document::HostKind;

// 自動化主機接口，封裝對單一文件編輯應用程式的操作
pub trait AutomationHost {
    /// 已開啟文件的控制代碼
    type Document;

    /// 主機類別
    fn kind(&self) -> HostKind;

    /// 設定應用程式視窗是否可見
    fn set_visible(&mut self, visible: bool) -> io::Result<()>;

    /// 取得文件集合（Documents / Presentations）
    fn attach_documents(&mut self) -> io::Result<()>;

    /// 透過文件集合開啟檔案
    fn open(&mut self, path: &Path) -> io::Result<Self::Document>;

    /// 以主機原生的 PDF 格式代碼另存新檔
    fn save_as_pdf(&mut self, document: &Self::Document, destination: &Path) -> io::Result<()>;

    /// 關閉文件，不保留未儲存的變更
    fn close(&mut self, document: Self::Document) -> io::Result<()>;

    /// 釋放文件集合
    fn release_documents(&mut self);

    /// 結束應用程式
    fn quit(&mut self) -> io::Result<()>;
}

// 自動化執行環境接口：整個行程範圍的自動化子系統，離開作用域時釋放
pub trait AutomationRuntime {
    type Host: AutomationHost;

    /// 啟動指定類別的主機應用程式
    fn launch(&self, kind: HostKind) -> io::Result<Self::Host>;
}
