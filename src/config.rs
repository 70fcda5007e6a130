//! Configuration for a [Store](crate::Store): how it identifies
//! itself, and what it logs for each dispatched action.

/// The level at which a [Store](crate::Store) logs dispatched
/// actions and the state transitions they cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    Trace,
    Debug,
    Warn,
    Info,
}

impl LogLevel {
    /// The [log::Level] to use with the `log` macros.
    pub fn level(&self) -> log::Level {
        match self {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StoreConfig {
    name: String,
    log_level: LogLevel,
    log_state: bool,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            name: String::from("store"),
            log_level: LogLevel::default(),
            log_state: true,
        }
    }

    /// The name which prefixes every log message of the store, to
    /// tell several stores apart.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the level at which dispatched actions are logged.
    pub fn log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Whether to log the previous and next state alongside each
    /// dispatched action.
    pub fn log_state(mut self, log_state: bool) -> Self {
        self.log_state = log_state;
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn logs_state(&self) -> bool {
        self.log_state
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
