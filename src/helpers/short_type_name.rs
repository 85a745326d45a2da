use std::any::type_name;

/// The last path segment of a type's name with any generic arguments cut off, for log messages
pub fn short_type_name<T>() -> &'static str {
    let name = type_name::<T>();
    let end = name.find('<').unwrap_or(name.len());
    let start = name[..end].rfind(':').map(|i| i + 1).unwrap_or(0);
    &name[start..end]
}
