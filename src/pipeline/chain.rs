// src/pipeline/chain.rs
use std::time::{Duration, Instant};

use crate::error::ProcessingError;
use crate::filters::Filter;
use crate::pipeline::config::{ErrorStrategy, PipelineConfig};
use crate::pipeline::document::Document;

/// Runtime statistics
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProcessingStats {
    /// Input documents fed to the chain
    pub documents_processed: usize,
    /// Documents emitted by the last stage
    pub documents_output: usize,
    /// Inputs that produced no output and no error
    pub documents_dropped: usize,
    /// Branches discarded because a stage failed
    pub errors: usize,
    pub processing_time: Duration,
}

/// Ordered list of filter stages driven one document at a time.
///
/// Each document a stage emits runs through all remaining stages before its
/// next sibling is considered, so outputs come out in the left-to-right order
/// of the fan-out tree.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
    config: PipelineConfig,
    stats: ProcessingStats,
}

impl FilterChain {
    pub fn new(config: PipelineConfig) -> Self {
        FilterChain {
            filters: Vec::new(),
            config,
            stats: ProcessingStats::default(),
        }
    }

    pub fn add_filter(&mut self, filter: Box<dyn Filter>) {
        tracing::trace!(step = filter.name(), position = self.filters.len(), "adding filter");
        self.filters.push(filter);
    }

    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run one input document through every stage.
    pub fn process_document(&mut self, doc: Document) -> Result<Vec<Document>, ProcessingError> {
        let start_time = Instant::now();
        let mut outputs = Vec::new();
        let mut errors = 0;

        let result = self.run_from(0, doc, &mut outputs, &mut errors);

        self.stats.documents_processed += 1;
        self.stats.errors += errors;
        self.stats.processing_time += start_time.elapsed();
        result?;

        if outputs.is_empty() && errors == 0 {
            self.stats.documents_dropped += 1;
        }
        self.stats.documents_output += outputs.len();
        Ok(outputs)
    }

    /// Run every document from `docs` and concatenate the outputs.
    pub fn process_documents<I>(&mut self, docs: I) -> Result<Vec<Document>, ProcessingError>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut outputs = Vec::new();
        for doc in docs {
            outputs.extend(self.process_document(doc)?);
        }

        tracing::debug!(
            processed = self.stats.documents_processed,
            output = self.stats.documents_output,
            dropped = self.stats.documents_dropped,
            errors = self.stats.errors,
            "chain run complete"
        );
        Ok(outputs)
    }

    fn run_from(
        &self,
        position: usize,
        doc: Document,
        outputs: &mut Vec<Document>,
        errors: &mut usize,
    ) -> Result<(), ProcessingError> {
        let Some(filter) = self.filters.get(position) else {
            outputs.push(doc);
            return Ok(());
        };

        match filter.process(doc) {
            Ok(emitted) => {
                tracing::trace!(step = filter.name(), position, emitted = emitted.len(), "stage done");
                for next in emitted {
                    self.run_from(position + 1, next, outputs, errors)?;
                }
                Ok(())
            }
            Err(err) => match self.config.error_strategy {
                ErrorStrategy::FailFast => {
                    *errors += 1;
                    Err(err)
                }
                ErrorStrategy::Skip => {
                    *errors += 1;
                    tracing::warn!(step = filter.name(), position, error = %err, "skipping document");
                    Ok(())
                }
            },
        }
    }

    /// Get current accumulated stats
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = ProcessingStats::default();
    }
}
