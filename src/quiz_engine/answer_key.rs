use serde_json::{json, Value};

use crate::quiz_engine::models::Generated;

/// Answer key for a generated deck, in slide order.
///
/// Each entry names the slide number of its reveal slide (the title slide,
/// when present, is slide 1) so the presenter can jump straight to it.
pub fn to_answer_key(generated: &Generated) -> Value {
    let offset = usize::from(generated.title.is_some());
    let entries: Vec<Value> = generated
        .selection
        .iter()
        .enumerate()
        .map(|(i, selected)| {
            json!({
                "position":     i + 1,
                "reveal_slide": offset + 2 * i + 2,
                "pool_index":   selected.pool_index,
                "answer":       selected.item.answer,
                "group":        selected.item.show.is_group(),
                "units":        selected.item.show.units(),
            })
        })
        .collect();

    json!({
        "picked": generated.selection.len(),
        "total":  generated.pool_size,
        "title":  generated.title,
        "seed":   generated.seed,
        "items":  entries,
    })
}
