//! A dynamically-kinded value for chains that mix element kinds.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::Comparable;
use crate::ListError;
use crate::Result;

/// The kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Signed integer.
    Int,
    /// Unsigned integer.
    UInt,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// UTF-8 text.
    Text,
    /// Boolean. Storable, not orderable.
    Bool,
    /// Raw bytes. Storable, not orderable.
    Bytes,
}

impl ValueKind {
    /// Returns `true` if values of this kind can be ordered against values
    /// of the same kind.
    pub fn is_orderable(self) -> bool {
        !matches!(self, ValueKind::Bool | ValueKind::Bytes)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::Text => "text",
            ValueKind::Bool => "bool",
            ValueKind::Bytes => "bytes",
        })
    }
}

/// A value of any supported kind.
///
/// Every kind can be stored in a chain and searched for by equality. Only
/// integers, floats and text can be sorted, and only against values of the
/// same kind: a chain holding `Int(1)` and `UInt(2)` cannot be sorted.
///
/// # Examples
///
/// ```
/// use chain_list::SingleList;
/// use chain_list::SortMode;
/// use chain_list::Value;
///
/// let mut list: SingleList<Value> = ["pear", "fig", "apple"].into_iter().map(Value::from).collect();
/// list.select_sort(SortMode::Ascending).unwrap();
/// assert_eq!(list.find(0), Ok(&Value::from("apple")));
///
/// list.add_node(Value::from(true));
/// assert!(list.select_sort(SortMode::Ascending).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer of any width.
    Int(i64),
    /// Unsigned integer of any width.
    UInt(u64),
    /// 32-bit float.
    Float32(f32),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 text, ordered lexicographically.
    Text(String),
    /// Boolean.
    Bool(bool),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Value {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
            Value::Text(_) => ValueKind::Text,
            Value::Bool(_) => ValueKind::Bool,
            Value::Bytes(_) => ValueKind::Bytes,
        }
    }
}

impl Comparable for Value {
    fn compare(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::UInt(a), Value::UInt(b)) => Ok(a.cmp(b)),
            (Value::Float32(a), Value::Float32(b)) => Ok(a.total_cmp(b)),
            (Value::Float64(a), Value::Float64(b)) => Ok(a.total_cmp(b)),
            (Value::Text(a), Value::Text(b)) => Ok(a.as_str().cmp(b.as_str())),
            _ => Err(ListError::UnsupportedType {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Bytes(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident($inner:ty): $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant(<$inner>::from(value))
                }
            }
        )*
    };
}

impl_from!(Int(i64): i8, i16, i32, i64);
impl_from!(UInt(u64): u8, u16, u32, u64);
impl_from!(Float32(f32): f32);
impl_from!(Float64(f64): f64);
impl_from!(Text(String): &str, String);
impl_from!(Bool(bool): bool);
impl_from!(Bytes(Vec<u8>): Vec<u8>, &[u8]);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::UInt(value as u64)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn test_from_widths() {
        assert_eq!(Value::from(-3i8), Value::Int(-3));
        assert_eq!(Value::from(70_000i32), Value::Int(70_000));
        assert_eq!(Value::from(255u8), Value::UInt(255));
        assert_eq!(Value::from(7usize), Value::UInt(7));
        assert_eq!(Value::from(-7isize), Value::Int(-7));
        assert_eq!(Value::from(0.5f32), Value::Float32(0.5));
        assert_eq!(Value::from(0.25f64), Value::Float64(0.25));
        assert_eq!(Value::from("hi"), Value::Text("hi".to_string()));
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(Value::from(&[1u8, 2][..]), Value::Bytes(vec![1, 2]));
    }

    #[test]
    fn test_compare_same_kind() {
        assert_eq!(Value::from(1).compare(&Value::from(2)), Ok(Ordering::Less));
        assert_eq!(Value::from(5u32).compare(&Value::from(5u32)), Ok(Ordering::Equal));
        assert_eq!(
            Value::from(2.5f32).compare(&Value::from(-1.0f32)),
            Ok(Ordering::Greater)
        );
        assert_eq!(
            Value::from(f64::NAN).compare(&Value::from(f64::NAN)),
            Ok(Ordering::Equal)
        );
        assert_eq!(Value::from("b").compare(&Value::from("a")), Ok(Ordering::Greater));
    }

    #[test]
    fn test_compare_mixed_kinds_fails() {
        assert_eq!(
            Value::from(1i64).compare(&Value::from(1u64)),
            Err(ListError::UnsupportedType {
                left: ValueKind::Int,
                right: ValueKind::UInt,
            })
        );
        assert_eq!(
            Value::from(1.0f32).compare(&Value::from(1.0f64)),
            Err(ListError::UnsupportedType {
                left: ValueKind::Float32,
                right: ValueKind::Float64,
            })
        );
    }

    #[test]
    fn test_compare_unorderable_kind_fails() {
        assert_eq!(
            Value::from(true).compare(&Value::from(true)),
            Err(ListError::UnsupportedType {
                left: ValueKind::Bool,
                right: ValueKind::Bool,
            })
        );
        assert!(Value::from(vec![1u8]).compare(&Value::from(vec![1u8])).is_err());
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let values = [
            Value::from(-2),
            Value::from(0),
            Value::from(9),
        ];
        for a in &values {
            for b in &values {
                let forward = a.compare(b).unwrap();
                let backward = b.compare(a).unwrap();
                assert_eq!(forward, backward.reverse());
            }
        }
    }

    #[test]
    fn test_kind_orderable() {
        assert!(ValueKind::Int.is_orderable());
        assert!(ValueKind::Text.is_orderable());
        assert!(!ValueKind::Bool.is_orderable());
        assert!(!ValueKind::Bytes.is_orderable());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(-1).to_string(), "-1");
        assert_eq!(Value::from("text").to_string(), "text");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(vec![1u8, 2]).to_string(), "[1, 2]");
        assert_eq!(ValueKind::Float64.to_string(), "float64");
    }
}
