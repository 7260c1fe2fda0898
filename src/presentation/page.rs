// Process-wide page configuration, set once at startup
use crate::infrastructure::config::PageSettings;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageConfigError {
    #[error("page configuration is already set")]
    AlreadyConfigured,
}

#[derive(Debug)]
pub struct PageConfig {
    settings: OnceLock<PageSettings>,
}

impl PageConfig {
    pub const fn new() -> Self {
        Self {
            settings: OnceLock::new(),
        }
    }

    /// Only the first call takes effect.
    pub fn configure(&self, settings: PageSettings) -> Result<(), PageConfigError> {
        self.settings
            .set(settings)
            .map_err(|_| PageConfigError::AlreadyConfigured)
    }

    /// Falls back to (and locks in) the defaults if nothing was configured.
    pub fn settings(&self) -> &PageSettings {
        self.settings.get_or_init(PageSettings::default)
    }
}

static PAGE: PageConfig = PageConfig::new();

pub fn configure_page(settings: PageSettings) -> Result<(), PageConfigError> {
    PAGE.configure(settings)
}

pub fn page_settings() -> &'static PageSettings {
    PAGE.settings()
}
