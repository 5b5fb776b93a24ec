//! Ordered application of rewrite rules
//!
//! A `Pipeline` holds a list of stages. Each stage is applied to every tree
//! produced so far: single-output rules map trees one to one, fan-out rules
//! may multiply them. The result is the set of trees alive after the last
//! stage.

use crate::error::{Result, RewriteError};
use crate::rules::{
    CombineParticles, RemoveAuxiliaries, RemoveBareCCs, RemoveDeterminers, RemoveSuperlatives,
    UndoPassivization,
};
use crate::split::{SplitAppositives, SplitConjunctions};
use crate::transform::{FanOutTransformer, Transformer, TreeSet};
use crate::tree::DependencyTree;
use log::{debug, warn};

/// Pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Fail with `TooManyTrees` when a stage leaves more trees than this
    pub max_trees: Option<usize>,
    /// Drop trees whose wh-phrase is ambiguous instead of failing the run
    pub skip_ambiguous: bool,
}

impl PipelineConfig {
    pub fn with_max_trees(mut self, limit: usize) -> Self {
        self.max_trees = Some(limit);
        self
    }

    pub fn with_skip_ambiguous(mut self, skip: bool) -> Self {
        self.skip_ambiguous = skip;
        self
    }
}

/// One step of a pipeline
pub enum Stage {
    Rewrite(Box<dyn Transformer + Send + Sync>),
    Split(Box<dyn FanOutTransformer + Send + Sync>),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Rewrite(rule) => rule.name(),
            Stage::Split(rule) => rule.name(),
        }
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Rewrite(_) => f.debug_tuple("Rewrite").field(&self.name()).finish(),
            Stage::Split(_) => f.debug_tuple("Split").field(&self.name()).finish(),
        }
    }
}

/// Caller-ordered sequence of rewrite stages
#[derive(Debug, Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// The usual normalization order for declarative sentences
    pub fn standard() -> Self {
        Self::new()
            .rewrite(CombineParticles)
            .rewrite(UndoPassivization)
            .rewrite(RemoveAuxiliaries)
            .rewrite(RemoveDeterminers)
            .rewrite(RemoveSuperlatives)
            .rewrite(RemoveBareCCs)
            .split(SplitConjunctions::default())
            .split(SplitAppositives::default())
    }

    /// Append a single-output stage
    pub fn rewrite<T>(mut self, rule: T) -> Self
    where
        T: Transformer + Send + Sync + 'static,
    {
        self.stages.push(Stage::Rewrite(Box::new(rule)));
        self
    }

    /// Append a fan-out stage
    pub fn split<T>(mut self, rule: T) -> Self
    where
        T: FanOutTransformer + Send + Sync + 'static,
    {
        self.stages.push(Stage::Split(Box::new(rule)));
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(Stage::name).collect()
    }

    /// Run every stage in order, starting from `tree`
    pub fn run(&self, tree: &DependencyTree) -> Result<TreeSet> {
        let mut current = TreeSet::from_iter([tree.clone()]);

        for stage in &self.stages {
            let mut next = TreeSet::default();
            for tree in &current {
                match stage {
                    Stage::Rewrite(rule) => match rule.transform(tree) {
                        Ok(out) => {
                            next.insert(out);
                        }
                        Err(RewriteError::AmbiguousInput { count })
                            if self.config.skip_ambiguous =>
                        {
                            warn!(
                                "{}: skipping tree with {} wh-phrases: {}",
                                rule.name(),
                                count,
                                tree
                            );
                        }
                        Err(e) => return Err(e),
                    },
                    Stage::Split(rule) => next.extend(rule.split(tree)),
                }
            }

            debug!(
                "stage {}: {} -> {} trees",
                stage.name(),
                current.len(),
                next.len()
            );
            if let Some(limit) = self.config.max_trees {
                if next.len() > limit {
                    return Err(RewriteError::TooManyTrees { limit });
                }
            }
            current = next;
        }

        Ok(current)
    }
}
