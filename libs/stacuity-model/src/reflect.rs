use std::any::Any;

use crate::schema::Shape;
use crate::value::{ScalarType, Value};

/// Object-safe access to a model value, used by the plan executor.
///
/// Implemented here for scalars, `Value<T>`, `Option<T>` and `Vec<T>`, and by
/// `#[derive(Record)]` for structs.
pub trait Reflect: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn reflect_ref(&self) -> ReflectRef<'_>;
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

/// A model type with a statically known shape.
///
/// `Default` supplies the zero-valued instance allocated for absent optional
/// destinations and for every new sequence element.
pub trait Shaped: Reflect + Default {
    fn shape() -> Shape;
}

pub enum ReflectRef<'a> {
    /// Scalar or `Value<T>`; reached through `as_any`.
    Leaf,
    Optional(Option<&'a dyn Reflect>),
    Sequence(&'a dyn SequenceReflect),
    Record(&'a dyn RecordReflect),
}

pub enum ReflectMut<'a> {
    Leaf,
    Optional(&'a mut dyn OptionalReflect),
    Sequence(&'a mut dyn SequenceReflect),
    Record(&'a mut dyn RecordReflect),
}

/// Index-based field access. Indices come from `FieldSchema::index`.
pub trait RecordReflect {
    fn field(&self, index: usize) -> Option<&dyn Reflect>;
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

pub trait SequenceReflect {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect>;

    fn clear(&mut self);

    /// Append a zero-valued element and hand it back for filling.
    fn push_default(&mut self) -> &mut dyn Reflect;
}

pub trait OptionalReflect {
    fn get(&self) -> Option<&dyn Reflect>;

    /// The present value, allocating a zero-valued one first if absent.
    fn get_or_insert_default(&mut self) -> &mut dyn Reflect;

    fn set_none(&mut self);
}

// ---------------------------------------------------------------------------
// Leaves
// ---------------------------------------------------------------------------

macro_rules! leaf_reflect {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn reflect_ref(&self) -> ReflectRef<'_> {
                    ReflectRef::Leaf
                }

                fn reflect_mut(&mut self) -> ReflectMut<'_> {
                    ReflectMut::Leaf
                }
            }

            impl Shaped for $ty {
                fn shape() -> Shape {
                    Shape::Scalar(<$ty as ScalarType>::KIND)
                }
            }
        )*
    };
}

leaf_reflect!(String, i32, bool);

impl<T: ScalarType> Reflect for Value<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Leaf
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Leaf
    }
}

impl<T: ScalarType> Shaped for Value<T> {
    fn shape() -> Shape {
        Shape::Wrapped(T::KIND)
    }
}

// ---------------------------------------------------------------------------
// Option
// ---------------------------------------------------------------------------

impl<T: Shaped> Reflect for Option<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Optional(self.as_ref().map(|v| v as &dyn Reflect))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Optional(self)
    }
}

impl<T: Shaped> Shaped for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }
}

impl<T: Shaped> OptionalReflect for Option<T> {
    fn get(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|v| v as &dyn Reflect)
    }

    fn get_or_insert_default(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::default)
    }

    fn set_none(&mut self) {
        *self = None;
    }
}

// ---------------------------------------------------------------------------
// Vec
// ---------------------------------------------------------------------------

impl<T: Shaped> Reflect for Vec<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Sequence(self)
    }
}

impl<T: Shaped> Shaped for Vec<T> {
    fn shape() -> Shape {
        Shape::Sequence(Box::new(T::shape()))
    }
}

impl<T: Shaped> SequenceReflect for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.get(index).map(|v| v as &dyn Reflect)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push_default(&mut self) -> &mut dyn Reflect {
        self.push(T::default());
        let last = Vec::len(self) - 1;
        &mut self[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ScalarKind;

    #[test]
    fn nested_container_shape() {
        let shape = <Option<Vec<Value<String>>>>::shape();
        assert_eq!(shape.to_string(), "Option<Vec<Value<string>>>");
        assert!(matches!(<bool as Shaped>::shape(), Shape::Scalar(ScalarKind::Bool)));
    }

    #[test]
    fn optional_allocates_once() {
        let mut slot: Option<Value<i32>> = None;
        let first = slot.get_or_insert_default();
        assert!(first.as_any().downcast_ref::<Value<i32>>().is_some());
        slot = Some(Value::Known(3));
        let again = OptionalReflect::get_or_insert_default(&mut slot);
        assert_eq!(
            again.as_any().downcast_ref::<Value<i32>>(),
            Some(&Value::Known(3))
        );
    }

    #[test]
    fn sequence_push_default_appends() {
        let mut items = vec!["a".to_string()];
        let slot = items.push_default();
        if let Some(s) = slot.as_any_mut().downcast_mut::<String>() {
            s.push('b');
        }
        assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
        SequenceReflect::clear(&mut items);
        assert!(SequenceReflect::is_empty(&items));
    }

    #[test]
    fn optional_reflect_ref_reports_presence() {
        let absent: Option<String> = None;
        assert!(matches!(absent.reflect_ref(), ReflectRef::Optional(None)));
        let present = Some("x".to_string());
        assert!(matches!(present.reflect_ref(), ReflectRef::Optional(Some(_))));
    }
}
