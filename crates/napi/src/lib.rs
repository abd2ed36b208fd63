#![deny(missing_docs)]
//! Node.js bindings that surface iconcraft's Rust implementation.

use napi_derive::napi;

/// Batch processing types.
pub mod batch;
/// Conversions between NAPI objects and core types.
mod convert;
/// NAPI-exposed data structures.
pub mod types;
pub use batch::*;
use convert::{convert_transpiled, to_transpile_options};
pub use types::*;

/// Turns a design-tool node name into a component identifier.
///
/// Strips whitespace and a leading `As=` variant prefix.
#[napi(js_name = "sanitizeComponentName")]
pub fn sanitize_component_name_napi(name: String) -> String {
    iconcraft_core::sanitize_component_name(&name)
}

/// Checks whether a name can be used as a JavaScript binding name.
#[napi(js_name = "isValidIdentifier")]
pub fn is_valid_identifier_napi(name: String) -> bool {
    iconcraft_core::is_valid_identifier(&name)
}

/// Converts exported SVG markup into a recolorable React component module.
///
/// Never throws: markup without `<path>` elements yields an empty component.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { transpile } = require('iconcraft-napi');
///
/// const { code } = transpile('<path d="M0 0L1 1" fill="#000"/>', 'Star', { useAnimation: true });
/// // code contains `<motion.path d="M0 0L1 1" fill={color} {...props} />`
/// ```
#[napi]
pub fn transpile(svg: String, identifier: String, config: Option<TranspileConfig>) -> TranspileResult {
    let options = to_transpile_options(config.as_ref());
    convert_transpiled(iconcraft_react::transpile_with_diagnostics(
        &svg,
        &identifier,
        &options,
    ))
}

/// Converts many exported icons in parallel using Rayon.
///
/// Transpiling is pure, so icons are processed concurrently; results are
/// returned in input order. Component names are derived from each input's
/// `name` the same way the plugin derives them from node names.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { transpileBatch } = require('iconcraft-napi');
///
/// const inputs = [
///   { id: 'icons/star.svg', name: 'As=Star', svg: starSvg },
///   { id: 'icons/arrow.svg', name: 'Arrow Right', svg: arrowSvg },
/// ];
///
/// const result = transpileBatch(inputs, { maxThreads: 4 });
/// for (const icon of result.results) writeFileSync(icon.fileName, icon.result.code);
/// ```
#[napi(js_name = "transpileBatch")]
pub fn transpile_batch(
    inputs: Vec<IconInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    use iconcraft_react::plugin::{DEFAULT_COMPONENT_NAME, resolve_identifier};
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let transpile_options = to_transpile_options(opts.config.as_ref());

    // Configure thread pool if max_threads is specified
    let pool = if let Some(max_threads) = opts.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .map_err(|e| log::warn!("falling back to the global thread pool: {}", e))
            .ok()
    } else {
        None
    };

    let total = inputs.len() as u32;
    let with_warnings = AtomicU32::new(0);
    let empty = AtomicU32::new(0);

    let process_input = |input: IconInput| -> IconBatchResult {
        let identifier = resolve_identifier(&input.name, DEFAULT_COMPONENT_NAME);
        let transpiled =
            iconcraft_react::transpile_with_diagnostics(&input.svg, &identifier, &transpile_options);
        if transpiled.diagnostics.has_warnings() {
            with_warnings.fetch_add(1, Ordering::Relaxed);
        }
        if transpiled.fragment_count == 0 {
            empty.fetch_add(1, Ordering::Relaxed);
        }
        IconBatchResult {
            id: input.id,
            file_name: format!("{}.tsx", identifier),
            identifier,
            result: convert_transpiled(transpiled),
        }
    };

    let results: Vec<IconBatchResult> = if let Some(pool) = pool {
        pool.install(|| inputs.into_par_iter().map(process_input).collect())
    } else {
        inputs.into_par_iter().map(process_input).collect()
    };

    let elapsed = start.elapsed();

    Ok(BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            with_warnings: with_warnings.load(Ordering::Relaxed),
            empty: empty.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    })
}
