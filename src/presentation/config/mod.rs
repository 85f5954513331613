mod settings;

pub use settings::{
    BucketSettings, LlmSettings, ServerSettings, Settings, SettingsError, StorageProviderSetting,
    StorageSettings,
};
