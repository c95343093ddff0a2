use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_root: PathBuf,
    pub container_name: String,
    pub listen_addr: String,
    pub max_document_size_bytes: u64,
    pub supported_types: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            storage_root: std::env::var("STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/data/documents")),
            container_name: std::env::var("STORAGE_CONTAINER")
                .unwrap_or_else(|_| "documents".to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            max_document_size_bytes: std::env::var("MAX_DOCUMENT_SIZE_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5 * 1024 * 1024),
            supported_types: std::env::var("SUPPORTED_TYPES")
                .map(|s| {
                    s.split(',')
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| vec!["application/pdf".to_string()]),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if self.container_name.is_empty() {
            return Err("STORAGE_CONTAINER cannot be empty".to_string());
        }

        if self.container_name.contains('/') || self.container_name.contains('\\') {
            return Err("STORAGE_CONTAINER must be a plain directory name".to_string());
        }

        if self.max_document_size_bytes == 0 {
            return Err("MAX_DOCUMENT_SIZE_BYTES must be positive".to_string());
        }

        if self.supported_types.is_empty() {
            return Err("SUPPORTED_TYPES must list at least one content type".to_string());
        }

        Ok(())
    }
}
