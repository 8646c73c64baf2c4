use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, Weak};

use crate::error::ConversionError;
use crate::reflect::Shaped;
use crate::schema::{Direction, RecordType, ScalarKind, Shape};

/// Conversion strategy for one source/destination pair.
///
/// Resolved once from the two static shapes, before any data is touched.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Same leaf type on both sides, cloned as-is. `Unknown` survives this.
    Passthrough { kind: ScalarKind, wrapped: bool },
    /// Plain scalar into `Value::Known`.
    Wrap(ScalarKind),
    /// `Value` into a plain scalar. `Null` / `Unknown` become the zero value.
    Unwrap(ScalarKind),
    /// `Value` into `Option<scalar>`. `Null` / `Unknown` become `None`.
    UnwrapOptional(ScalarKind),
    /// Optional source: absent is a no-op, present applies the inner rule.
    SkipAbsent(Box<Rule>),
    /// Optional destination: allocated if absent, then written in place.
    Allocate(Box<Rule>),
    /// Destination rebuilt with one fresh element per source element.
    Sequence(Box<Rule>),
    Record(RecordPlan),
    /// Record pair that contains itself somewhere below. The plan is filled
    /// in once planning of the pair finishes.
    Recursive(Arc<OnceLock<RecordPlan>>),
    /// Back-reference to the enclosing `Recursive` plan of the same pair.
    Deferred(Weak<OnceLock<RecordPlan>>),
}

/// Field map between two record types.
#[derive(Debug, Clone)]
pub struct RecordPlan {
    pub source: &'static str,
    pub destination: &'static str,
    /// Matched fields, in source declaration order.
    pub fields: Vec<FieldMap>,
}

/// One matched field.
#[derive(Debug, Clone)]
pub struct FieldMap {
    pub name: &'static str,
    /// Index into the source record.
    pub source: usize,
    /// Index into the destination record.
    pub destination: usize,
    pub rule: Rule,
}

impl RecordPlan {
    pub fn field(&self, name: &str) -> Option<&FieldMap> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Resolve the rule converting a `from` shaped value into a `to` shaped one.
pub fn resolve(from: &Shape, to: &Shape, direction: Direction) -> Result<Rule, ConversionError> {
    Planner {
        direction,
        open: Vec::new(),
    }
    .resolve(from, to)
}

/// Walks two shapes in step, keeping the record pairs it is still inside of.
struct Planner {
    direction: Direction,
    /// Innermost last.
    open: Vec<OpenRecord>,
}

struct OpenRecord {
    key: (TypeId, TypeId),
    slot: Arc<OnceLock<RecordPlan>>,
    reentered: bool,
}

impl Planner {
    fn resolve(&mut self, from: &Shape, to: &Shape) -> Result<Rule, ConversionError> {
        let direction = self.direction;
        match (from, to) {
            (Shape::Wrapped(kind), Shape::Optional(inner))
                if direction == Direction::ToWire
                    && matches!(&**inner, Shape::Scalar(k) if k == kind) =>
            {
                Ok(Rule::UnwrapOptional(*kind))
            }
            (Shape::Optional(inner), _) => Ok(Rule::SkipAbsent(Box::new(self.resolve(inner, to)?))),
            (_, Shape::Optional(inner)) => Ok(Rule::Allocate(Box::new(self.resolve(from, inner)?))),
            (Shape::Sequence(a), Shape::Sequence(b)) => self
                .resolve(a, b)
                .map(|element| Rule::Sequence(Box::new(element)))
                .map_err(ConversionError::within_element),
            (Shape::Sequence(_), _) | (_, Shape::Sequence(_)) => {
                Err(ConversionError::shape_mismatch(from, to))
            }
            (Shape::Record(a), Shape::Record(b)) => self.record(a, b),
            (Shape::Record(_), _) | (_, Shape::Record(_)) => {
                Err(ConversionError::shape_mismatch(from, to))
            }
            _ => resolve_leaf(from, to, direction),
        }
    }

    /// Plan a record pair. Meeting the same pair again further down yields a
    /// `Deferred` back-reference instead of planning it a second time.
    fn record(&mut self, from: &RecordType, to: &RecordType) -> Result<Rule, ConversionError> {
        let key = ((from.id)(), (to.id)());
        if let Some(open) = self.open.iter_mut().find(|open| open.key == key) {
            open.reentered = true;
            return Ok(Rule::Deferred(Arc::downgrade(&open.slot)));
        }

        let slot = Arc::new(OnceLock::new());
        self.open.push(OpenRecord {
            key,
            slot: Arc::clone(&slot),
            reentered: false,
        });
        let planned = self.plan_record(from, to);
        let reentered = self.open.pop().is_some_and(|open| open.reentered);

        let plan = planned?;
        if !reentered {
            return Ok(Rule::Record(plan));
        }
        slot.get_or_init(|| plan);
        Ok(Rule::Recursive(slot))
    }

    fn plan_record(
        &mut self,
        from: &RecordType,
        to: &RecordType,
    ) -> Result<RecordPlan, ConversionError> {
        let direction = self.direction;
        let mut fields = Vec::new();
        for field in from.fields.iter().filter(|f| f.applies_to(direction)) {
            // Unmatched names are skipped, not reported.
            let Some(target) = to.field(field.name).filter(|t| t.applies_to(direction)) else {
                continue;
            };
            let rule = self
                .resolve(&(field.shape)(), &(target.shape)())
                .map_err(|e| e.within_field(field.name))?;
            fields.push(FieldMap {
                name: field.name,
                source: field.index,
                destination: target.index,
                rule,
            });
        }
        Ok(RecordPlan {
            source: from.name,
            destination: to.name,
            fields,
        })
    }
}

fn resolve_leaf(from: &Shape, to: &Shape, direction: Direction) -> Result<Rule, ConversionError> {
    let rule = match (from, to, direction) {
        (Shape::Scalar(a), Shape::Scalar(b), _) if a == b => Some(Rule::Passthrough {
            kind: *a,
            wrapped: false,
        }),
        (Shape::Wrapped(a), Shape::Wrapped(b), _) if a == b => Some(Rule::Passthrough {
            kind: *a,
            wrapped: true,
        }),
        (Shape::Scalar(a), Shape::Wrapped(b), Direction::FromWire) if a == b => {
            Some(Rule::Wrap(*a))
        }
        (Shape::Wrapped(a), Shape::Scalar(b), Direction::ToWire) if a == b => {
            Some(Rule::Unwrap(*a))
        }
        _ => None,
    };
    rule.ok_or_else(|| ConversionError::unsupported(direction, from, to))
}

// ---------------------------------------------------------------------------
// Plan cache
// ---------------------------------------------------------------------------

type PlanKey = (TypeId, TypeId, Direction);

static PLANS: OnceLock<RwLock<HashMap<PlanKey, Arc<Rule>>>> = OnceLock::new();

/// Resolved rule for converting `S` into `D`, cached per type pair and direction.
///
/// Only successful plans are cached; a failing pair is re-resolved (and fails
/// again) on every call.
pub fn plan<S: Shaped, D: Shaped>(direction: Direction) -> Result<Arc<Rule>, ConversionError> {
    let key = (TypeId::of::<S>(), TypeId::of::<D>(), direction);
    let plans = PLANS.get_or_init(Default::default);

    if let Some(rule) = plans
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(Arc::clone(rule));
    }

    let rule = Arc::new(resolve(&S::shape(), &D::shape(), direction)?);
    tracing::debug!(
        source = type_name::<S>(),
        destination = type_name::<D>(),
        %direction,
        "resolved conversion plan"
    );

    let mut plans = plans.write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(plans.entry(key).or_insert(rule)))
}

/// Resolve the `S` → `D` plan without converting anything.
///
/// Meant for startup checks: a misdeclared pair fails here instead of on the
/// first request that needs it.
pub fn validate<S: Shaped, D: Shaped>(direction: Direction) -> Result<(), ConversionError> {
    plan::<S, D>(direction).map(|_| ())
}
