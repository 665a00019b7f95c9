//! Conversion pipelines: a fixed list of stages per direction.
//!
//! ```text
//! Bijoy text                          Unicode text
//!     ↓                                   ↓
//! [pre-normalization table]           [pre-normalization table]
//! [core table]                        [duplicate-cleanup table]
//! [duplicate-cleanup table]           [reorder, inverse]
//! [reorder, forward]                  [core table]
//! [post-normalization table]          [post-normalization table]
//!     ↓                                   ↓
//! Unicode text                        Bijoy text
//! ```
//!
//! Each stage is a pure function of its input string. The stage lists are the only place
//! that knows the order, so changing it never touches the stages themselves.

use crate::config::ConverterConfig;
use crate::converter::ConversionDirection;
use crate::mapping::{apply, tables, TableRole};
use crate::text::reorder::{reorder_with, ReorderMode};
use std::fmt;

/// One step of a conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Apply the built-in table with this role
    Substitute(TableRole),
    /// Reorder clusters
    Reorder(ReorderMode),
}

impl Stage {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Substitute(role) => role.as_str(),
            Stage::Reorder(ReorderMode::Forward) => "reorder-forward",
            Stage::Reorder(ReorderMode::Inverse) => "reorder-inverse",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const LEGACY_TO_LOGICAL: [Stage; 5] = [
    Stage::Substitute(TableRole::PreNormalization),
    Stage::Substitute(TableRole::Core),
    Stage::Substitute(TableRole::DuplicateCleanup),
    Stage::Reorder(ReorderMode::Forward),
    Stage::Substitute(TableRole::PostNormalization),
];

const LOGICAL_TO_LEGACY: [Stage; 5] = [
    Stage::Substitute(TableRole::PreNormalization),
    Stage::Substitute(TableRole::DuplicateCleanup),
    Stage::Reorder(ReorderMode::Inverse),
    Stage::Substitute(TableRole::Core),
    Stage::Substitute(TableRole::PostNormalization),
];

/// The stage list for a direction.
pub fn stages(direction: ConversionDirection) -> &'static [Stage] {
    match direction {
        ConversionDirection::LegacyToLogical => &LEGACY_TO_LOGICAL,
        ConversionDirection::LogicalToLegacy => &LOGICAL_TO_LEGACY,
    }
}

/// Runs the stages of one direction over a string.
#[derive(Debug, Clone)]
pub struct ConversionPipeline {
    direction: ConversionDirection,
    config: ConverterConfig,
}

impl ConversionPipeline {
    /// Create a pipeline with default configuration.
    pub fn new(direction: ConversionDirection) -> Self {
        Self::with_config(direction, ConverterConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(direction: ConversionDirection, config: ConverterConfig) -> Self {
        Self { direction, config }
    }

    /// Direction this pipeline converts in.
    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Stages in execution order.
    pub fn stages(&self) -> &'static [Stage] {
        stages(self.direction)
    }

    /// Run every stage in order.
    pub fn run(&self, text: &str) -> String {
        let mut current = text.to_string();

        for &stage in self.stages() {
            current = self.run_stage(stage, &current);

            log::trace!(
                "{} stage {}: {} chars",
                self.direction,
                stage,
                current.chars().count()
            );
            if self.config.trace_stages {
                log::trace!("{} stage {} output: {:?}", self.direction, stage, current);
            }
        }

        current
    }

    /// Run a single stage.
    pub fn run_stage(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::Substitute(role) => apply(tables::table(self.direction, role), text),
            Stage::Reorder(mode) => reorder_with(text, mode, &self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_legacy_to_logical() {
        let names: Vec<&str> = stages(ConversionDirection::LegacyToLogical)
            .iter()
            .map(Stage::name)
            .collect();
        assert_eq!(
            names,
            vec![
                "pre-normalization",
                "core",
                "duplicate-cleanup",
                "reorder-forward",
                "post-normalization"
            ]
        );
    }

    #[test]
    fn test_stage_order_logical_to_legacy() {
        let names: Vec<&str> = stages(ConversionDirection::LogicalToLegacy)
            .iter()
            .map(Stage::name)
            .collect();
        assert_eq!(
            names,
            vec![
                "pre-normalization",
                "duplicate-cleanup",
                "reorder-inverse",
                "core",
                "post-normalization"
            ]
        );
    }

    #[test]
    fn test_run_stage_core_only() {
        let pipeline = ConversionPipeline::new(ConversionDirection::LegacyToLogical);
        // Without the reorder the visual mark stays in front
        assert_eq!(
            pipeline.run_stage(Stage::Substitute(TableRole::Core), "wK"),
            "\u{E0BF}ক"
        );
        assert_eq!(pipeline.run("wK"), "কি");
    }

    #[test]
    fn test_run_empty() {
        for direction in ConversionDirection::ALL {
            assert_eq!(ConversionPipeline::new(direction).run(""), "");
        }
    }

    #[test]
    fn test_trace_stages_does_not_change_output() {
        let plain = ConversionPipeline::new(ConversionDirection::LogicalToLegacy);
        let traced = ConversionPipeline::with_config(
            ConversionDirection::LogicalToLegacy,
            ConverterConfig::new().with_trace_stages(true),
        );
        assert_eq!(plain.run("প্রেম"), traced.run("প্রেম"));
        assert!(traced.config().trace_stages);
    }
}
