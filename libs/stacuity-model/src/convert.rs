use std::any::type_name;
use std::sync::OnceLock;

use crate::error::ConversionError;
use crate::mapping::{self, RecordPlan, Rule};
use crate::reflect::{Reflect, ReflectMut, ReflectRef, Shaped};
use crate::schema::{Direction, ScalarKind};
use crate::value::{ScalarType, Value};

/// Dispatch a generic leaf function on the runtime scalar kind.
macro_rules! by_kind {
    ($kind:expr, $func:ident, $($arg:expr),*) => {
        match $kind {
            ScalarKind::Str => $func::<String>($($arg),*),
            ScalarKind::Int32 => $func::<i32>($($arg),*),
            ScalarKind::Bool => $func::<bool>($($arg),*),
        }
    };
}

/// Copy an API payload into its state model.
///
/// Present wire scalars become `Value::Known`; absent optional parts leave the
/// destination untouched. Fails before writing anything if the two types do
/// not line up.
pub fn convert_from_wire<W: Shaped, V: Shaped>(
    source: &W,
    destination: &mut V,
) -> Result<(), ConversionError> {
    convert(source, destination, Direction::FromWire)
}

/// Copy a state model into an API payload.
///
/// `Known` values are unwrapped; `Null` and `Unknown` become the zero value,
/// or `None` where the wire field is optional.
pub fn convert_to_wire<V: Shaped, W: Shaped>(
    source: &V,
    destination: &mut W,
) -> Result<(), ConversionError> {
    convert(source, destination, Direction::ToWire)
}

/// Convert `source` into `destination` in the given direction.
///
/// The plan for the type pair is resolved (or taken from the cache) first, so
/// shape and type errors surface before the destination is modified.
pub fn convert<S: Shaped, D: Shaped>(
    source: &S,
    destination: &mut D,
    direction: Direction,
) -> Result<(), ConversionError> {
    let rule = mapping::plan::<S, D>(direction)?;
    tracing::trace!(
        source = type_name::<S>(),
        destination = type_name::<D>(),
        %direction,
        "converting"
    );
    apply(&rule, source, destination)
}

/// Execute a resolved rule.
///
/// The rule was built from the static shapes of both sides, so a reflection
/// result that disagrees with it means a hand-written `Reflect` impl lies
/// about its shape; that case is reported as a shape mismatch.
pub fn apply(
    rule: &Rule,
    source: &dyn Reflect,
    destination: &mut dyn Reflect,
) -> Result<(), ConversionError> {
    match rule {
        Rule::Passthrough { kind, wrapped: false } => by_kind!(*kind, passthrough, source, destination),
        Rule::Passthrough { kind, wrapped: true } => {
            by_kind!(*kind, passthrough_wrapped, source, destination)
        }
        Rule::Wrap(kind) => by_kind!(*kind, wrap_known, source, destination),
        Rule::Unwrap(kind) => by_kind!(*kind, unwrap_known, source, destination),
        Rule::UnwrapOptional(kind) => by_kind!(*kind, unwrap_optional, source, destination),

        Rule::SkipAbsent(inner) => match source.reflect_ref() {
            ReflectRef::Optional(None) => Ok(()),
            ReflectRef::Optional(Some(present)) => apply(inner, present, destination),
            _ => Err(ConversionError::shape_mismatch("non-optional value", "optional rule")),
        },

        Rule::Allocate(inner) => match destination.reflect_mut() {
            ReflectMut::Optional(slot) => apply(inner, source, slot.get_or_insert_default()),
            _ => Err(ConversionError::shape_mismatch("optional rule", "non-optional value")),
        },

        Rule::Sequence(element) => {
            let (ReflectRef::Sequence(from), ReflectMut::Sequence(to)) =
                (source.reflect_ref(), destination.reflect_mut())
            else {
                return Err(ConversionError::shape_mismatch("sequence rule", "non-sequence value"));
            };
            to.clear();
            for index in 0..from.len() {
                let Some(item) = from.element(index) else {
                    break;
                };
                apply(element, item, to.push_default()).map_err(ConversionError::within_element)?;
            }
            Ok(())
        }

        Rule::Record(plan) => apply_record(plan, source, destination),
        Rule::Recursive(slot) => apply_record(resolved(slot)?, source, destination),
        Rule::Deferred(slot) => {
            let slot = slot.upgrade().ok_or_else(unresolved)?;
            apply_record(resolved(&slot)?, source, destination)
        }
    }
}

fn apply_record(
    plan: &RecordPlan,
    source: &dyn Reflect,
    destination: &mut dyn Reflect,
) -> Result<(), ConversionError> {
    let (ReflectRef::Record(from), ReflectMut::Record(to)) =
        (source.reflect_ref(), destination.reflect_mut())
    else {
        return Err(ConversionError::shape_mismatch(
            format!("record {}", plan.source),
            format!("record {}", plan.destination),
        ));
    };
    for field in &plan.fields {
        let (Some(value), Some(slot)) = (from.field(field.source), to.field_mut(field.destination))
        else {
            return Err(ConversionError::shape_mismatch(plan.source, plan.destination)
                .within_field(field.name));
        };
        apply(&field.rule, value, slot).map_err(|e| e.within_field(field.name))?;
    }
    Ok(())
}

fn resolved(slot: &OnceLock<RecordPlan>) -> Result<&RecordPlan, ConversionError> {
    slot.get().ok_or_else(unresolved)
}

// Only reachable with a rule tree taken apart from the plan that owns it.
fn unresolved() -> ConversionError {
    ConversionError::shape_mismatch("recursive record", "unresolved plan")
}

// ---------------------------------------------------------------------------
// Leaf conversions
// ---------------------------------------------------------------------------

fn leaves<'a, F: 'static, T: 'static>(
    source: &'a dyn Reflect,
    destination: &'a mut dyn Reflect,
) -> Result<(&'a F, &'a mut T), ConversionError> {
    match (
        source.as_any().downcast_ref::<F>(),
        destination.as_any_mut().downcast_mut::<T>(),
    ) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(ConversionError::shape_mismatch(type_name::<F>(), type_name::<T>())),
    }
}

fn passthrough<T: ScalarType>(
    source: &dyn Reflect,
    destination: &mut dyn Reflect,
) -> Result<(), ConversionError> {
    let (from, to) = leaves::<T, T>(source, destination)?;
    to.clone_from(from);
    Ok(())
}

fn passthrough_wrapped<T: ScalarType>(
    source: &dyn Reflect,
    destination: &mut dyn Reflect,
) -> Result<(), ConversionError> {
    let (from, to) = leaves::<Value<T>, Value<T>>(source, destination)?;
    to.clone_from(from);
    Ok(())
}

fn wrap_known<T: ScalarType>(
    source: &dyn Reflect,
    destination: &mut dyn Reflect,
) -> Result<(), ConversionError> {
    let (from, to) = leaves::<T, Value<T>>(source, destination)?;
    *to = Value::Known(from.clone());
    Ok(())
}

fn unwrap_known<T: ScalarType>(
    source: &dyn Reflect,
    destination: &mut dyn Reflect,
) -> Result<(), ConversionError> {
    let (from, to) = leaves::<Value<T>, T>(source, destination)?;
    *to = from.known_or_default();
    Ok(())
}

fn unwrap_optional<T: ScalarType>(
    source: &dyn Reflect,
    destination: &mut dyn Reflect,
) -> Result<(), ConversionError> {
    let (from, to) = leaves::<Value<T>, Option<T>>(source, destination)?;
    *to = from.as_known().cloned();
    Ok(())
}
