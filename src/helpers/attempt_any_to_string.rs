use super::*;

/// Renders a panic payload (or any other Any) as text. Only strings are recovered, everything
/// else just reports its type ID.
pub fn attempt_any_to_string(any: &dyn Any) -> String {
    if let Some(s) = any.downcast_ref::<&str>() {
        format!("&str{{ {:?} }}", s)
    } else if let Some(s) = any.downcast_ref::<String>() {
        format!("String{{ {:?} }}", s)
    } else if let Some(b) = any.downcast_ref::<Box<dyn Any>>() {
        format!("Box{{ {} }}", attempt_any_to_string(&**b))
    } else if let Some(b) = any.downcast_ref::<Box<dyn Any + Send>>() {
        format!("Box{{ {} }}", attempt_any_to_string(&**b))
    } else if let Some(b) = any.downcast_ref::<Box<dyn Any + Send + Sync>>() {
        format!("Box{{ {} }}", attempt_any_to_string(&**b))
    } else {
        format!("non-string Any value with {:?}", any.type_id())
    }
}
