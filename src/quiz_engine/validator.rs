//! Boundary parse from raw `quiz.json` items into typed [`Item`]s.
//!
//! Checks run in a fixed order and stop at the first failure:
//! object-ness, then `answer`, then group shape, then per-unit kind and
//! required field. Kind inference happens here and nowhere else; everything
//! downstream matches on [`Unit`].

use serde_json::{Map, Value};

use crate::quiz_engine::{
    error::{ItemError, ItemErrorReason},
    helpers::field_text,
    models::{ImageUnit, Item, Show, TextUnit, Unit, UnitKind},
};

/// Resolve the kind of a unit: an explicit `type` wins, a missing or falsy
/// one (`null`, `""`, `false`, `0`) falls back to inference.
fn unit_kind(obj: &Map<String, Value>) -> Result<UnitKind, ItemErrorReason> {
    match obj.get("type") {
        Some(Value::String(s)) if !s.is_empty() => {
            UnitKind::parse(s).ok_or(ItemErrorReason::UnsupportedType)
        }
        None | Some(Value::Null) | Some(Value::String(_)) | Some(Value::Bool(false)) => {
            infer_kind(obj)
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => infer_kind(obj),
        Some(_) => Err(ItemErrorReason::UnsupportedType),
    }
}

/// `src` implies an image, `text` implies text.
fn infer_kind(obj: &Map<String, Value>) -> Result<UnitKind, ItemErrorReason> {
    if field_text(obj, "src").is_some() {
        Ok(UnitKind::Image)
    } else if field_text(obj, "text").is_some() {
        Ok(UnitKind::Text)
    } else {
        Err(ItemErrorReason::UnsupportedType)
    }
}

/// Parse one display unit (a plain item or a `show` member).
pub fn parse_unit(obj: &Map<String, Value>) -> Result<Unit, ItemErrorReason> {
    match unit_kind(obj)? {
        UnitKind::Image => {
            let src = field_text(obj, "src").ok_or(ItemErrorReason::MissingSrc)?;
            Ok(Unit::Image(ImageUnit {
                src,
                alt: field_text(obj, "alt").or_else(|| field_text(obj, "answer")),
                size_class: field_text(obj, "sizeClass"),
            }))
        }
        UnitKind::Text => {
            let text = field_text(obj, "text").ok_or(ItemErrorReason::MissingText)?;
            Ok(Unit::Text(TextUnit { text }))
        }
    }
}

/// Validate `value` as the selected item at position `index`.
///
/// Groups need a top-level `answer`; their members do not.
pub fn parse_item(index: usize, value: &Value) -> Result<Item, ItemError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ItemError::item(index, ItemErrorReason::NotAnObject))?;

    let answer = field_text(obj, "answer")
        .ok_or_else(|| ItemError::item(index, ItemErrorReason::MissingAnswer))?;

    // A non-array `show` is not a group; the item is read as a single unit.
    if let Some(Value::Array(members)) = obj.get("show") {
        if members.is_empty() {
            return Err(ItemError::item(index, ItemErrorReason::EmptyGroup));
        }
        let units = members
            .iter()
            .enumerate()
            .map(|(j, member)| {
                let sub = member
                    .as_object()
                    .ok_or(ItemErrorReason::NotAnObject)
                    .and_then(parse_unit);
                sub.map_err(|reason| ItemError::member(index, j, reason))
            })
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Item { answer, show: Show::Group(units) });
    }

    let unit = parse_unit(obj).map_err(|reason| ItemError::item(index, reason))?;
    Ok(Item { answer, show: Show::Single(unit) })
}
