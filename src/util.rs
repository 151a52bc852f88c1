//! Shared utility functions
//!
//! Small naming helpers used by the resolver and the emitters.

/// Capitalize the first character, Java bean accessor style
///
/// # Examples
/// ```
/// use dtoforge::util::capitalize;
/// assert_eq!(capitalize("address"), "Address");
/// assert_eq!(capitalize("addressId"), "AddressId");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Extract the simple name from a qualified name
/// (`org.example.Address` becomes `Address`)
///
/// # Examples
/// ```
/// use dtoforge::util::simple_name;
/// assert_eq!(simple_name("org.example.Address"), "Address");
/// assert_eq!(simple_name("Address"), "Address");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Extract the package portion of a qualified name, if any
pub fn package_name(qualified: &str) -> Option<&str> {
    qualified.rsplit_once('.').map(|(pkg, _)| pkg)
}
