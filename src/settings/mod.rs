mod descriptions;
mod export;
mod folder_settings;
mod import;
mod provider;

pub use descriptions::SETTINGS_VERSION;
pub use descriptions::SettingDescription;
pub use descriptions::SettingsDescriptions;
pub use descriptions::VersionedSetting;
pub use export::ExportError;
pub use export::FolderSettingsExport;
pub use folder_settings::FolderSettings;
pub use import::ImportError;
pub use import::ImportSummary;
pub use import::import_folder_settings;
pub use provider::FolderSettingsProvider;
