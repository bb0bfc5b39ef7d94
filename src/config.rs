pub const DEFAULT_ENDPOINT: &str = "https://geneanalysisapp.azurewebsites.net";
pub const ENDPOINT_ENV: &str = "GENE_UPLOADER_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the analysis service, without the `/api/...` path.
    pub endpoint: String,
}

impl Config {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
