//! Indexing capability for wrapped payloads

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use serde_json::Value;

use super::error::{ResponseError, ResponseResult};

/// A key for indexed access: a mapping key or a sequence position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKey<'a> {
    Name(&'a str),
    Position(usize),
}

impl<'a> From<&'a str> for ResponseKey<'a> {
    fn from(name: &'a str) -> Self {
        ResponseKey::Name(name)
    }
}

impl<'a> From<&'a String> for ResponseKey<'a> {
    fn from(name: &'a String) -> Self {
        ResponseKey::Name(name.as_str())
    }
}

impl From<usize> for ResponseKey<'_> {
    fn from(position: usize) -> Self {
        ResponseKey::Position(position)
    }
}

impl fmt::Display for ResponseKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseKey::Name(name) => write!(f, "{name:?}"),
            ResponseKey::Position(position) => write!(f, "{position}"),
        }
    }
}

/// Data that may support `data[key]`.
///
/// Implementations must return [`ResponseError::NotIndexable`] when the value
/// (or the kind of key) has no indexing support, and a lookup-miss error
/// when indexing is supported but nothing is there. Mappings treat a
/// position as a key that is simply not present.
pub trait Indexable {
    type Output: ?Sized;

    fn index_by(&self, key: ResponseKey<'_>) -> ResponseResult<&Self::Output>;
}

impl Indexable for Value {
    type Output = Value;

    fn index_by(&self, key: ResponseKey<'_>) -> ResponseResult<&Value> {
        match (self, key) {
            (Value::Object(map), ResponseKey::Name(name)) => {
                map.get(name).ok_or_else(|| ResponseError::key_not_found(name))
            }
            (Value::Object(_), ResponseKey::Position(position)) => {
                Err(ResponseError::key_not_found(position.to_string()))
            }
            (Value::Array(items), ResponseKey::Position(position)) => items
                .get(position)
                .ok_or_else(|| ResponseError::index_out_of_range(position, items.len())),
            _ => Err(ResponseError::NotIndexable),
        }
    }
}

impl<T: Indexable> Indexable for Option<T> {
    type Output = T::Output;

    fn index_by(&self, key: ResponseKey<'_>) -> ResponseResult<&T::Output> {
        match self {
            Some(inner) => inner.index_by(key),
            None => Err(ResponseError::NotIndexable),
        }
    }
}

impl<T> Indexable for [T] {
    type Output = T;

    fn index_by(&self, key: ResponseKey<'_>) -> ResponseResult<&T> {
        match key {
            ResponseKey::Position(position) => self
                .get(position)
                .ok_or_else(|| ResponseError::index_out_of_range(position, self.len())),
            ResponseKey::Name(_) => Err(ResponseError::NotIndexable),
        }
    }
}

impl<T> Indexable for Vec<T> {
    type Output = T;

    fn index_by(&self, key: ResponseKey<'_>) -> ResponseResult<&T> {
        self.as_slice().index_by(key)
    }
}

impl<V, S: BuildHasher> Indexable for HashMap<String, V, S> {
    type Output = V;

    fn index_by(&self, key: ResponseKey<'_>) -> ResponseResult<&V> {
        match key {
            ResponseKey::Name(name) => self.get(name).ok_or_else(|| ResponseError::key_not_found(name)),
            ResponseKey::Position(position) => Err(ResponseError::key_not_found(position.to_string())),
        }
    }
}

impl<V> Indexable for BTreeMap<String, V> {
    type Output = V;

    fn index_by(&self, key: ResponseKey<'_>) -> ResponseResult<&V> {
        match key {
            ResponseKey::Name(name) => self.get(name).ok_or_else(|| ResponseError::key_not_found(name)),
            ResponseKey::Position(position) => Err(ResponseError::key_not_found(position.to_string())),
        }
    }
}

macro_rules! not_indexable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Indexable for $ty {
                type Output = $ty;

                fn index_by(&self, _key: ResponseKey<'_>) -> ResponseResult<&$ty> {
                    Err(ResponseError::NotIndexable)
                }
            }
        )*
    };
}

not_indexable!((), bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
