//! Batch processing types for parallel conversion.

use crate::types::{TranspileConfig, TranspileResult};
use napi_derive::napi;

/// Input for batch processing - one exported icon.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct IconInput {
    /// Caller-side identifier (typically the source file path).
    pub id: String,
    /// Node or file name to derive the component name from.
    pub name: String,
    /// Exported SVG markup.
    pub svg: String,
}

/// Result for a single icon in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct IconBatchResult {
    /// Identifier matching the input.
    pub id: String,
    /// Sanitized component name.
    pub identifier: String,
    /// `<identifier>.tsx`
    pub file_name: String,
    /// Generated module and warnings.
    pub result: TranspileResult,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of icons processed.
    pub total: u32,
    /// Number of icons whose markup produced warnings.
    pub with_warnings: u32,
    /// Number of icons without any `<path>` element.
    pub empty: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
    /// Transpile configuration to use for all icons.
    pub config: Option<TranspileConfig>,
}

/// Result of batch processing, in input order.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results for each input icon.
    pub results: Vec<IconBatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}
