use crate::auth::CredentialStore;

pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/aishvipareek/ECDanalysis/refs/heads/main/energy-consumption-2020-1.csv";

/// Everything the dashboard needs to start. Built once in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// CSV fetched for the static visualization after login.
    pub data_url: String,
    pub credentials: CredentialStore,
    /// Rows shown in the preview of each uploaded file.
    pub preview_rows: usize,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            credentials: CredentialStore::default(),
            preview_rows: 5,
            window_size: [1100.0, 760.0],
            min_window_size: [640.0, 420.0],
        }
    }
}

impl AppConfig {
    pub fn with_data_url(mut self, data_url: impl Into<String>) -> Self {
        self.data_url = data_url.into();
        self
    }

    pub fn with_credentials(mut self, credentials: CredentialStore) -> Self {
        self.credentials = credentials;
        self
    }
}
