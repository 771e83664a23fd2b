//! Helpers callable from `const fn`.
//!
//! The inherent `const fn name_of` / `const fn value_of` that
//! `#[derive(Enumeration)]` emits compare names with [`str_eq`], since `==`
//! on `&str` is not usable in constant evaluation.

/// Byte-wise string equality usable in constant evaluation.
///
/// ```
/// use enum_reflect_core::const_eval::str_eq;
///
/// const SAME: bool = str_eq("Dotted", "Dotted");
/// const CASE: bool = str_eq("Dotted", "dotted");
/// assert!(SAME);
/// assert!(!CASE);
/// ```
pub const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
