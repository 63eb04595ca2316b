/// Who is tagging: the configured user name and email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Identity {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A point in time as git records it: seconds since the epoch plus the UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagTime {
    pub seconds: i64,
    pub offset_minutes: i32,
}

impl TagTime {
    pub fn new(seconds: i64, offset_minutes: i32) -> Self {
        TagTime {
            seconds,
            offset_minutes,
        }
    }
}

/// Tagger signature attached to an annotated tag.
///
/// The timestamp is taken from the tagged commit's committer, so tagging the same
/// HEAD twice yields the same tagger line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub when: TagTime,
}

impl Signature {
    pub fn new(identity: &Identity, when: TagTime) -> Self {
        Signature {
            name: identity.name.clone(),
            email: identity.email.clone(),
            when,
        }
    }
}
