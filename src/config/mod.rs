mod settings;

pub use settings::{CalendarConfig, DispatchConfig, LoggingConfig, Settings, SocialMediaConfig};
