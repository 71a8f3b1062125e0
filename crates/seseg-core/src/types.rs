//! Class value types: the input tree accepted by the composer.
//!
//! A [`ClassValue`] mirrors the loosely typed values a template would hand
//! to a class-name helper: text, numbers, booleans, absent markers, nested
//! lists, and key → condition maps. Values are built by the caller and only
//! borrowed during composition.

/// One input to the composer.
///
/// Sequences nest to any depth. Mappings keep their keys in insertion order,
/// and their values may themselves be any `ClassValue`, which is how nested
/// token groups are carried under the reserved `class` / `className` keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClassValue {
    /// Explicit absent marker (`null`, `undefined`, `None`).
    #[default]
    Absent,
    Bool(bool),
    Number(f64),
    Text(String),
    Sequence(Vec<ClassValue>),
    Mapping(ClassMap),
    /// A callable or otherwise unrenderable value. Never contributes a token,
    /// even as a mapping value.
    Ignorable,
}

impl ClassValue {
    /// Truthiness as the composer sees it.
    ///
    /// Falsy: `Absent`, `false`, `0`, `-0`, `NaN`, and empty or
    /// whitespace-only text. Sequences and mappings are truthy even when
    /// empty. `Ignorable` is truthy, but is filtered separately wherever a
    /// token would be emitted.
    pub fn is_truthy(&self) -> bool {
        match self {
            ClassValue::Absent => false,
            ClassValue::Bool(b) => *b,
            ClassValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ClassValue::Text(s) => !s.trim().is_empty(),
            ClassValue::Sequence(_) | ClassValue::Mapping(_) | ClassValue::Ignorable => true,
        }
    }

    pub fn is_ignorable(&self) -> bool {
        matches!(self, ClassValue::Ignorable)
    }
}

/// Key-value pairs in insertion order.
///
/// Backed by a plain `Vec` rather than a hash map so that iteration order is
/// exactly the order keys were first inserted. Inserting an existing key
/// replaces its value but keeps its original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassMap {
    entries: Vec<(String, ClassValue)>,
}

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace `key`, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ClassValue>,
    ) -> Option<ClassValue> {
        let key = key.into();
        let value = value.into();
        if let Some(index) = self.entries.iter().position(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut self.entries[index].1, value));
        }
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&ClassValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<ClassValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ClassMap
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ClassMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for ClassMap
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for ClassMap {
    type Item = (String, ClassValue);
    type IntoIter = std::vec::IntoIter<(String, ClassValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ----------------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------------

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Text(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Text(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Text(value.clone())
    }
}

impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        ClassValue::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ClassValue {
                fn from(value: $ty) -> Self {
                    ClassValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<ClassMap> for ClassValue {
    fn from(value: ClassMap) -> Self {
        ClassValue::Mapping(value)
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Absent, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(value: Vec<T>) -> Self {
        ClassValue::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(value: [T; N]) -> Self {
        ClassValue::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>> FromIterator<T> for ClassValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ClassValue::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
