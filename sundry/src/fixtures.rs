use sundry_value::Value;

pub(crate) fn numbers(ns: &[i32]) -> Vec<Value> {
    ns.iter().copied().map(Value::from).collect()
}

pub(crate) fn is_even(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n % 2.0 == 0.0)
}
