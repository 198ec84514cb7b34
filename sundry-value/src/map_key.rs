use std::hash::{Hash, Hasher};
use std::rc::Rc;

use ordered_float::OrderedFloat;

use crate::mapping::Mapping;
use crate::sequence::Sequence;
use crate::value::Value;

// A map key makes a value usable as a key in a HashMap. Two keys are
// equal when their values are strictly equal, except that all NaN values
// share one key so a NaN can find its own entry again. Collections are
// keyed by identity; the key holds a reference so the identity stays
// valid for as long as the key exists.

#[derive(Debug, Clone)]
pub enum MapKey {
    Undefined,
    Null,
    Boolean(bool),
    Number(OrderedFloat<f64>),
    String(Rc<str>),
    Sequence(Sequence),
    Mapping(Mapping),
}

impl MapKey {
    pub fn new(value: &Value) -> MapKey {
        match value {
            Value::Undefined => MapKey::Undefined,
            Value::Null => MapKey::Null,
            Value::Boolean(b) => MapKey::Boolean(*b),
            Value::Number(n) => {
                // a single NaN and a single zero
                let n = if n.is_nan() {
                    f64::NAN
                } else if *n == 0.0 {
                    0.0
                } else {
                    *n
                };
                MapKey::Number(OrderedFloat(n))
            }
            Value::String(s) => MapKey::String(s.clone()),
            Value::Sequence(sequence) => MapKey::Sequence(sequence.clone()),
            Value::Mapping(mapping) => MapKey::Mapping(mapping.clone()),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            MapKey::Undefined => Value::Undefined,
            MapKey::Null => Value::Null,
            MapKey::Boolean(b) => Value::Boolean(*b),
            MapKey::Number(OrderedFloat(n)) => Value::Number(*n),
            MapKey::String(s) => Value::String(s.clone()),
            MapKey::Sequence(sequence) => Value::Sequence(sequence.clone()),
            MapKey::Mapping(mapping) => Value::Mapping(mapping.clone()),
        }
    }
}

impl From<&Value> for MapKey {
    fn from(value: &Value) -> Self {
        MapKey::new(value)
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MapKey::Undefined, MapKey::Undefined) | (MapKey::Null, MapKey::Null) => true,
            (MapKey::Boolean(a), MapKey::Boolean(b)) => a == b,
            (MapKey::Number(a), MapKey::Number(b)) => a == b,
            (MapKey::String(a), MapKey::String(b)) => a == b,
            (MapKey::Sequence(a), MapKey::Sequence(b)) => a.ptr_eq(b),
            (MapKey::Mapping(a), MapKey::Mapping(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Eq for MapKey {}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            MapKey::Undefined | MapKey::Null => {}
            MapKey::Boolean(b) => b.hash(state),
            MapKey::Number(n) => n.hash(state),
            MapKey::String(s) => s.hash(state),
            MapKey::Sequence(sequence) => sequence.address().hash(state),
            MapKey::Mapping(mapping) => mapping.address().hash(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ahash::{HashMap, HashMapExt};

    #[test]
    fn test_nan_finds_itself() {
        let mut map = HashMap::new();
        map.insert(MapKey::new(&Value::from(f64::NAN)), 1);
        assert_eq!(map.get(&MapKey::new(&Value::from(f64::NAN))), Some(&1));
    }

    #[test]
    fn test_zeros_share_a_key() {
        assert_eq!(
            MapKey::new(&Value::from(0.0)),
            MapKey::new(&Value::from(-0.0))
        );
    }

    #[test]
    fn test_number_and_string_differ() {
        assert_ne!(MapKey::new(&Value::from(1)), MapKey::new(&Value::from("1")));
    }

    #[test]
    fn test_collections_keyed_by_identity() {
        let a = Value::from(vec![Value::from(1)]);
        let b = Value::from(vec![Value::from(1)]);
        let mut map = HashMap::new();
        map.insert(MapKey::new(&a), "a");
        assert_eq!(map.get(&MapKey::new(&a.clone())), Some(&"a"));
        assert_eq!(map.get(&MapKey::new(&b)), None);
    }

    #[test]
    fn test_to_value() {
        let value = Value::from("key");
        assert_eq!(MapKey::new(&value).to_value(), value);
    }
}
