//! Variant naming
//!
//! Base names are dash-joined and used in file names. Full names are
//! camelCase and used for task and output names.

use crate::VariantIdentity;

/// Name used when an identity has no dimension values at all
pub const MAIN_NAME: &str = "main";

/// Append `word` with its first character upper-cased
pub fn append_capitalized(target: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        target.extend(first.to_uppercase());
        target.push_str(chars.as_str());
    }
}

/// Join words as camelCase: the first word verbatim, the rest capitalized
pub fn combine_as_camel_case<'a, I>(words: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for word in words {
        if out.is_empty() {
            out.push_str(word);
        } else {
            append_capitalized(&mut out, word);
        }
    }
    out
}

/// Dash-joined flavors, then build type, then the nested component prefix.
/// Never empty.
pub fn compute_base_name(identity: &VariantIdentity) -> String {
    let mut parts: Vec<&str> = identity.flavor_names().collect();
    parts.extend(identity.build_type.as_deref());
    if let Some(prefix) = identity.component.prefix() {
        parts.push(prefix);
    }

    if parts.is_empty() {
        MAIN_NAME.to_string()
    } else {
        parts.join("-")
    }
}

/// Like [`compute_base_name`], with the split inserted before the build type
pub fn compute_base_name_with_splits(identity: &VariantIdentity, split_name: &str) -> String {
    let mut parts: Vec<&str> = identity.flavor_names().collect();
    parts.push(split_name);
    parts.extend(identity.build_type.as_deref());
    if let Some(prefix) = identity.component.prefix() {
        parts.push(prefix);
    }
    parts.join("-")
}

/// camelCase flavors, then build type, then the component suffix
pub fn compute_full_name(identity: &VariantIdentity) -> String {
    let mut sb = identity.flavor_name().unwrap_or_default();

    if let Some(build_type) = &identity.build_type {
        if sb.is_empty() {
            sb.push_str(build_type);
        } else {
            append_capitalized(&mut sb, build_type);
        }
    }

    if let Some(suffix) = identity.component.suffix() {
        if sb.is_empty() {
            // A leading suffix would start upper-case; use the prefix instead.
            sb.push_str(identity.component.prefix().unwrap_or(suffix));
        } else {
            sb.push_str(suffix);
        }
    }

    if sb.is_empty() {
        MAIN_NAME.to_string()
    } else {
        sb
    }
}

/// Full name with a split: `<flavor><Split><BuildType><suffix>`, or
/// `<split><BuildType><suffix>` without flavors
pub fn compute_full_name_with_splits(identity: &VariantIdentity, split_name: &str) -> String {
    let mut sb = String::new();

    match identity.flavor_name() {
        Some(flavor_name) if !flavor_name.is_empty() => {
            sb.push_str(&flavor_name);
            append_capitalized(&mut sb, split_name);
        }
        _ => sb.push_str(split_name),
    }

    if let Some(build_type) = &identity.build_type {
        append_capitalized(&mut sb, build_type);
    }

    if let Some(suffix) = identity.component.suffix() {
        sb.push_str(suffix);
    }
    sb
}
