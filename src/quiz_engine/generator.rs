use tracing::debug;

use crate::quiz_engine::{
    error::QuizError,
    models::{Document, Generated, QuizConfig, SelectedItem},
    render::{render_slide_pair, render_title_slide},
    sampler::{effective_count, Sampler, SamplingStrategy},
    validator::parse_item,
};

/// Sample, validate and render a deck from an already loaded config.
///
/// `count` is the resolved request; it is clamped to the pool size, so zero
/// yields a title-only (or empty) document. Validation runs in selection
/// order, errors cite the position in the selection, and the first invalid
/// item aborts generation.
pub fn generate_document(
    config: &QuizConfig,
    count: f64,
    seed: Option<&str>,
) -> Result<Generated, QuizError> {
    let mut strategy = SamplingStrategy::from_seed(seed);
    let n = effective_count(count, config.items.len());

    let indexed: Vec<(usize, &serde_json::Value)> = config.items.iter().enumerate().collect();
    let picked = strategy.sample(&indexed, n);
    debug!(picked = picked.len(), total = config.items.len(), "sampled pool");

    let selection = picked
        .into_iter()
        .enumerate()
        .map(|(position, (pool_index, raw))| -> Result<SelectedItem, QuizError> {
            let item = parse_item(position, raw)?;
            Ok(SelectedItem { pool_index, item })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut parts = Vec::with_capacity(selection.len() + 1);
    let title = render_title_slide(config.title.as_deref());
    if !title.is_empty() {
        parts.push(title);
    }
    parts.extend(selection.iter().map(|s| render_slide_pair(&s.item)));

    Ok(Generated {
        document: Document(parts.join("\n")),
        title: config.title.clone(),
        selection,
        pool_size: config.items.len(),
        seed: if strategy.is_reproducible() { seed.map(str::to_string) } else { None },
    })
}
