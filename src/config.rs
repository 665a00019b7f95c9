//! Configuration for conversion.

/// Default bound on the number of consonants in one conjunct.
///
/// Bengali conjuncts in running text top out at three consonants (ন্ত্র, ক্ষ্ম); four
/// leaves room for a reph-bearing three-consonant stack.
pub const DEFAULT_MAX_CONJUNCT_CONSONANTS: usize = 4;

/// Conversion configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Maximum consonants joined by virama that the reordering engine treats as one
    /// cluster core. This is the bounded lookahead for mark relocation.
    pub max_conjunct_consonants: usize,

    /// Log the output of every pipeline stage at trace level.
    pub trace_stages: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            max_conjunct_consonants: DEFAULT_MAX_CONJUNCT_CONSONANTS,
            trace_stages: false,
        }
    }

    /// Set the conjunct bound. Values below 1 are raised to 1.
    pub fn with_max_conjunct_consonants(mut self, max: usize) -> Self {
        self.max_conjunct_consonants = max.max(1);
        self
    }

    /// Enable per-stage trace logging.
    pub fn with_trace_stages(mut self, enable: bool) -> Self {
        self.trace_stages = enable;
        self
    }
}
