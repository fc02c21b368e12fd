use crate::error::ValueError;
use std::fmt;

/// Discriminant of a [`Value`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueKind::String => write!(f, "string"),
            ValueKind::Integer => write!(f, "integer"),
        }
    }
}

/// The contract shared by every variant a [`ConcurrentMap`](crate::ConcurrentMap) can hold
///
/// A typed value wraps exactly one payload and never changes after it is built.
/// Replacing a payload means storing a new instance under the same key.
///
/// # Examples
///
/// ```
/// use sovran_syncmap::{IntegerValue, StringValue, TypedValue, Value};
///
/// fn describe<T: TypedValue>(value: &Value) -> String
/// where
///     T::Payload: std::fmt::Debug,
/// {
///     match T::from_value_ref(value) {
///         Ok(typed) => format!("{} {:?}", T::KIND, typed.get()),
///         Err(e) => e.to_string(),
///     }
/// }
///
/// let value = Value::from("bar");
/// assert_eq!(describe::<StringValue>(&value), "string \"bar\"");
/// assert_eq!(
///     describe::<IntegerValue>(&value),
///     "value kind mismatch: expected integer, found string"
/// );
/// ```
pub trait TypedValue: Clone + Into<Value> + Send + Sync + 'static {
    /// The native type of the wrapped payload
    type Payload: ?Sized;

    /// The variant of [`Value`] this type corresponds to
    const KIND: ValueKind;

    /// Returns the wrapped payload
    fn get(&self) -> &Self::Payload;

    /// Takes the payload out of `value` if it is this variant
    ///
    /// # Errors
    ///
    /// Returns `ValueError::KindMismatch` if `value` holds another variant.
    fn from_value(value: Value) -> Result<Self, ValueError>;

    /// Borrows the variant out of `value` if it is this variant
    ///
    /// # Errors
    ///
    /// Returns `ValueError::KindMismatch` if `value` holds another variant.
    fn from_value_ref(value: &Value) -> Result<&Self, ValueError>;
}

fn mismatch(expected: ValueKind, found: &Value) -> ValueError {
    ValueError::KindMismatch {
        expected,
        found: found.kind(),
    }
}

/// A string payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringValue(String);

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the payload as a string slice
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TypedValue for StringValue {
    type Payload = str;
    const KIND: ValueKind = ValueKind::String;

    fn get(&self) -> &str {
        &self.0
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }

    fn from_value_ref(value: &Value) -> Result<&Self, ValueError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch(Self::KIND, other)),
        }
    }
}

/// A signed integer payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerValue(i64);

impl IntegerValue {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the payload
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TypedValue for IntegerValue {
    type Payload = i64;
    const KIND: ValueKind = ValueKind::Integer;

    fn get(&self) -> &i64 {
        &self.0
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }

    fn from_value_ref(value: &Value) -> Result<&Self, ValueError> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(mismatch(Self::KIND, other)),
        }
    }
}

/// A value stored in a [`ConcurrentMap`](crate::ConcurrentMap)
///
/// The set of variants is closed. Callers recover the native payload by
/// matching on the variant; there is no coercion between kinds.
///
/// # Examples
///
/// ```
/// use sovran_syncmap::Value;
///
/// let value = Value::from(2i64);
/// match &value {
///     Value::Integer(i) => assert_eq!(i.value(), 2),
///     other => panic!("expected an integer, got {}", other.kind()),
/// }
///
/// // "2" and 2 are different values
/// assert_ne!(Value::from("2"), value);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    String(StringValue),
    Integer(IntegerValue),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
        }
    }

    /// Returns the string payload, or `None` for any other variant
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.value()),
            _ => None,
        }
    }

    /// Returns the integer payload, or `None` for any other variant
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(i.value()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s.value()),
            Value::Integer(i) => write!(f, "{}", i.value()),
        }
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for IntegerValue {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<u32> for IntegerValue {
    fn from(value: u32) -> Self {
        Self(i64::from(value))
    }
}

impl From<StringValue> for Value {
    fn from(value: StringValue) -> Self {
        Value::String(value)
    }
}

impl From<IntegerValue> for Value {
    fn from(value: IntegerValue) -> Self {
        Value::Integer(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value.into())
    }
}

impl TryFrom<Value> for StringValue {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<Value> for IntegerValue {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
