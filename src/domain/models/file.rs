#[derive(Debug, Clone)]
pub struct FileData {
    pub content: Vec<u8>,
    pub filename: String,
}

impl FileData {
    pub fn new(content: Vec<u8>, filename: String) -> Self {
        Self { content, filename }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Where a saved upload ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    pub filename: String,
    pub url: String,
    pub size: u64,
}
