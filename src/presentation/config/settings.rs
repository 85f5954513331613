use std::env;

/// Process configuration, read from the environment once at startup
/// and passed down explicitly. Nothing here is re-read at runtime.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub buckets: BucketSettings,
    pub llm: LlmSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct BucketSettings {
    pub source_bucket: String,
    pub source_prefix: String,
    pub destination_bucket: String,
    pub destination_prefix: String,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_root: String,
    pub gcs_service_account_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageProviderSetting {
    Local,
    Gcs,
}

impl TryFrom<String> for StorageProviderSetting {
    type Error = SettingsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "gcs" => Ok(Self::Gcs),
            other => Err(SettingsError::InvalidVar {
                name: "STORAGE_PROVIDER".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let provider = StorageProviderSetting::try_from(
            env::var("STORAGE_PROVIDER").unwrap_or_else(|_| "gcs".to_string()),
        )?;

        Ok(Self {
            server: ServerSettings {
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            storage: StorageSettings {
                provider,
                local_root: env::var("LOCAL_STORAGE_ROOT").unwrap_or_else(|_| "./data".to_string()),
                gcs_service_account_key: env::var("GOOGLE_SA_KEY").ok(),
            },
            buckets: BucketSettings {
                source_bucket: env::var("SOURCE_BUCKET")
                    .unwrap_or_else(|_| "pdf_summarize".to_string()),
                source_prefix: env::var("SOURCE_PREFIX").unwrap_or_else(|_| "pdfs/".to_string()),
                destination_bucket: env::var("DEST_BUCKET")
                    .unwrap_or_else(|_| "pdf_summarize_results".to_string()),
                destination_prefix: env::var("DEST_PREFIX")
                    .unwrap_or_else(|_| "summaries/".to_string()),
            },
            llm: LlmSettings {
                api_key: env::var("GEMINI_API_KEY")
                    .map_err(|_| SettingsError::MissingVar("GEMINI_API_KEY".to_string()))?,
                model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing environment variable: {0}")]
    MissingVar(String),
    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: String, value: String },
}
