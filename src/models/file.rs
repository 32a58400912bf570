use std::path::PathBuf;

#[derive(Clone)]
pub struct FileCollectInput {
    pub input_path: PathBuf,
    pub exclude_patterns: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    /// 可轉換的檔案，依檔名排序的走訪順序
    pub files: Vec<PathBuf>,
    /// 因副檔名不支援而略過的檔案
    pub unsupported: Vec<PathBuf>,
    /// 被排除模式略過的檔案數
    pub excluded: usize,
}
