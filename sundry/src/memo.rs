use ahash::{HashMap, HashMapExt};
use log::{debug, trace};

use sundry_value::{Collection, MapKey, Value};

use crate::combinators::some;
use crate::equality::equal_contents;

/// A function that runs at most once.
///
/// The first call runs the function with its arguments and keeps the
/// result. Every later call, whatever its arguments, returns that result.
pub struct Once<F> {
    func: Option<F>,
    result: Value,
}

impl<F> Once<F>
where
    F: FnOnce(&[Value]) -> Value,
{
    pub fn new(func: F) -> Self {
        Once {
            func: Some(func),
            result: Value::Undefined,
        }
    }

    /// Whether the function has run.
    pub fn called(&self) -> bool {
        self.func.is_none()
    }

    pub fn call(&mut self, args: &[Value]) -> Value {
        if let Some(func) = self.func.take() {
            trace!("once: first call, {} arguments", args.len());
            self.result = func(args);
        }
        self.result.clone()
    }
}

/// Wrap `func` so it runs at most once. See [`Once`].
pub fn once<F>(func: F) -> impl FnMut(&[Value]) -> Value
where
    F: FnOnce(&[Value]) -> Value,
{
    let mut once = Once::new(func);
    move |args: &[Value]| once.call(args)
}

/// A function that remembers its results.
///
/// Each call's argument tuple is compared by contents against every tuple
/// seen before. A new tuple runs the function; a repeated one does not.
///
/// Results are stored under the first argument only. Two tuples sharing a
/// first argument share one slot, so after `(2, 3)` and then `(2, 99)`, a
/// repeated `(2, 3)` returns the result computed for `(2, 99)`. Calls
/// without arguments share the slot of `undefined`.
pub struct Memoize<F> {
    func: F,
    seen: Vec<Value>,
    results: HashMap<MapKey, Value>,
}

impl<F> Memoize<F>
where
    F: FnMut(&[Value]) -> Value,
{
    pub fn new(func: F) -> Self {
        Memoize {
            func,
            seen: Vec::new(),
            results: HashMap::new(),
        }
    }

    pub fn call(&mut self, args: &[Value]) -> Value {
        let current = Collection::Sequence(args);
        let repeated = some(
            Collection::Sequence(&self.seen),
            Some(&mut |seen: &Value| {
                seen.as_collection()
                    .is_some_and(|seen| equal_contents(seen, current))
            }),
        );
        let key = args.first().map(MapKey::new).unwrap_or(MapKey::Undefined);

        if repeated {
            trace!("memoize: hit for first argument {}", key.to_value());
        } else {
            if self.results.contains_key(&key) {
                debug!(
                    "memoize: new arguments replace the result stored for first argument {}",
                    key.to_value()
                );
            } else {
                trace!("memoize: miss for first argument {}", key.to_value());
            }
            self.seen.push(Value::from(args.to_vec()));
            let result = (self.func)(args);
            self.results.insert(key.clone(), result);
        }
        self.results.get(&key).cloned().unwrap_or_default()
    }
}

/// Wrap `func` so it remembers its results. See [`Memoize`].
pub fn memoize<F>(func: F) -> impl FnMut(&[Value]) -> Value
where
    F: FnMut(&[Value]) -> Value,
{
    let mut memoize = Memoize::new(func);
    move |args: &[Value]| memoize.call(args)
}
