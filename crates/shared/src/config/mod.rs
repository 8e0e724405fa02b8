mod cors;
mod myconfig;

pub use self::cors::AllowedOrigins;
pub use self::myconfig::{Config, EmailConfig};
