//! Call-site sugar for building class values.

/// Compose any number of values convertible into [`ClassValue`](crate::ClassValue).
///
/// ```
/// use seseg_core::{class_map, classes};
///
/// let active = true;
/// let out = classes!("btn", class_map! { "btn-active" => active }, None::<&str>, 0);
/// assert_eq!(out, "btn btn-active");
/// assert_eq!(classes!(), "");
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        $crate::seseg(&[])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::seseg(&[$($crate::ClassValue::from($value)),+])
    };
}

/// Build a [`ClassMap`](crate::ClassMap) from `key => value` pairs, in order.
///
/// ```
/// use seseg_core::class_map;
///
/// let map = class_map! { "one" => true, "two" => 0, "class" => vec!["three"] };
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["one", "two", "class"]);
/// ```
#[macro_export]
macro_rules! class_map {
    () => {
        $crate::ClassMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ClassMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}
