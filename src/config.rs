//! Configuration for the session reader
//!
//! Centralized configuration with sensible defaults.

/// Configuration for an [`SnssReader`](crate::SnssReader)
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Drop frames whose kind has no payload decoder instead of emitting
    /// `Command::Unknown` for them
    pub skip_unknown: bool,

    /// Stop cleanly after this many commands have been emitted
    pub max_commands: Option<usize>,

    // -------------------------------------------------------------------------
    // I/O Configuration
    // -------------------------------------------------------------------------
    /// Capacity of the buffered reader wrapped around the input (in bytes)
    pub buffer_capacity: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            skip_unknown: false,
            max_commands: None,
            buffer_capacity: 64 * 1024, // 64 KB
        }
    }
}

impl ReaderConfig {
    /// Create a new config builder
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }
}

/// Builder for ReaderConfig
#[derive(Default)]
pub struct ReaderConfigBuilder {
    config: ReaderConfig,
}

impl ReaderConfigBuilder {
    /// Skip (or emit) commands of kinds without a payload decoder
    pub fn skip_unknown(mut self, skip: bool) -> Self {
        self.config.skip_unknown = skip;
        self
    }

    /// Limit the number of commands emitted
    pub fn max_commands(mut self, limit: usize) -> Self {
        self.config.max_commands = Some(limit);
        self
    }

    /// Set the input buffer capacity (in bytes)
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.config.buffer_capacity = capacity;
        self
    }

    pub fn build(self) -> ReaderConfig {
        self.config
    }
}
