use nutype::nutype;

pub const MAX_SCOPE_ID_LENGTH: usize = 64;

/// Identifier of a logical scope (a site or tenant). Each scope owns
/// exactly one archive. Used as a directory name, so path separators
/// are rejected.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = MAX_SCOPE_ID_LENGTH,
        predicate = |s| !s.contains('/') && !s.contains('\\'),
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ScopeId(String);
