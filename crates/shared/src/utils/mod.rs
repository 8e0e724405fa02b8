mod gracefullshutdown;
mod logs;
mod otel;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::otel::{Telemetry, TelemetryProviders};
