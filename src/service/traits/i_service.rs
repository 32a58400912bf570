use std::io;
use crate::models::file::{FileCollectInput, FileCollectOutput};

// File 服務接口，負責檔案收集
pub trait FileServiceTrait {
    /// 遞迴收集可轉換的檔案
    /// # 參數
    /// - input: 檔案收集的輸入參數
    /// # 回傳
    /// - 成功時返回可轉換與不支援的檔案列表，走訪失敗時返回 IO 錯誤
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput>;
}
