//! Issuer identity resolved by enrichment

/// Display identity of an issuing account
///
/// Absent until enrichment resolves; an absent profile after resolution is
/// a valid terminal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerProfile {
    /// Resolved display name
    pub name: String,

    /// Optional avatar reference (URL or asset key)
    pub avatar: Option<String>,
}

impl IssuerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        IssuerProfile {
            name: name.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
