use std::io;
use crate::models::conversion::{ConversionInput, ConversionOutput};

// Facade 接口，負責協調批次轉換流程
pub trait ConversionFacadeTrait {
    /// 收集檔案、建立輸出目錄並執行批次轉換
    /// # 參數
    /// - input: 轉換所需的輸入參數
    /// # 回傳
    /// - 成功時返回轉換統計；走訪、建立目錄或啟動自動化主機失敗時返回 IO 錯誤
    fn execute_conversion(&self, input: ConversionInput) -> io::Result<ConversionOutput>;
}
