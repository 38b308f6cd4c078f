//! Accounts (`app.bsky.actor.*`): profile views, viewer state, status.

use serde::Deserialize;

use crate::blob::BlobRef;
use crate::bsky::embed::{EmbedRecord, EmbedView};
use crate::bsky::graph::ListView;
use crate::bsky::label::{Label, RecordLabels};
use crate::bsky::record::Record;
use crate::normalize::{blank_as_none, null_as_default};
use crate::union::Union;

/// Record type of a profile.
pub const PROFILE_TYPE: &str = "app.bsky.actor.profile";
/// Record type of an account status.
pub const STATUS_TYPE: &str = "app.bsky.actor.status";
/// Status token advertising a live stream.
pub const LIVE_STATUS: &str = "app.bsky.actor.status#live";

/// Hydrated profile of an account.
///
/// Covers the basic, standard and detailed profile views: the identity
/// fields are mandatory, everything else is optional because the server
/// decides how much to expand at each nesting position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    /// Account DID.
    pub did: String,
    /// Current handle.
    pub handle: String,
    /// Display name.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub display_name: Option<String>,
    /// Free-form pronouns.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub pronouns: Option<String>,
    /// Profile description.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    /// Avatar URL.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub avatar: Option<String>,
    /// Banner URL.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub banner: Option<String>,
    /// Aggregate counts of things the account created.
    pub associated: Option<ProfileAssociated>,
    /// Relationship between the requesting viewer and this account; `None`
    /// when the server did not compute it.
    pub viewer: Option<ActorViewerState>,
    /// Moderation labels on the account.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    /// Account creation timestamp.
    pub created_at: Option<String>,
    /// Time the profile was last indexed.
    pub indexed_at: Option<String>,
    /// Verification state.
    pub verification: Option<VerificationState>,
    /// Current account status.
    pub status: Option<Box<StatusView>>,
    /// Followers count.
    pub followers_count: Option<u64>,
    /// Follows count.
    pub follows_count: Option<u64>,
    /// Posts count.
    pub posts_count: Option<u64>,
}

impl ProfileView {
    /// Returns the display name, falling back to the handle.
    #[must_use]
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.handle)
    }
}

/// Counts and settings attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAssociated {
    /// Number of lists.
    pub lists: Option<u64>,
    /// Number of feed generators.
    pub feedgens: Option<u64>,
    /// Number of starter packs.
    pub starter_packs: Option<u64>,
    /// `true` when the account runs a labeler.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labeler: bool,
    /// Chat settings.
    pub chat: Option<ChatSettings>,
    /// Activity subscription settings.
    pub activity_subscription: Option<ActivitySubscriptionSettings>,
}

/// Who may start a chat with the account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSettings {
    /// `all`, `none` or `following`.
    pub allow_incoming: String,
}

/// Who may subscribe to the account's activity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySubscriptionSettings {
    /// `followers`, `mutuals` or `none`.
    pub allow_subscriptions: String,
}

/// Relationship between the viewer and an account.
///
/// Flags default to `false` once the state is present; record URIs are
/// present only while the relationship exists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorViewerState {
    /// The viewer muted the account.
    #[serde(default, deserialize_with = "null_as_default")]
    pub muted: bool,
    /// Mute list that muted the account.
    pub muted_by_list: Option<Box<ListView>>,
    /// The account blocks the viewer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocked_by: bool,
    /// URI of the viewer's block record.
    pub blocking: Option<String>,
    /// Block list that blocks the account.
    pub blocking_by_list: Option<Box<ListView>>,
    /// URI of the viewer's follow record.
    pub following: Option<String>,
    /// URI of the account's follow record for the viewer.
    pub followed_by: Option<String>,
    /// Accounts the viewer follows that follow this account.
    pub known_followers: Option<KnownFollowers>,
    /// Viewer's activity subscription to the account.
    pub activity_subscription: Option<ActivitySubscription>,
}

/// Sample of followers known to the viewer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KnownFollowers {
    /// Total number of known followers.
    pub count: u64,
    /// Sample of known followers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers: Vec<ProfileView>,
}

/// Activity the viewer subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ActivitySubscription {
    /// Notify on posts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub post: bool,
    /// Notify on replies.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reply: bool,
}

/// Verification state of an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationState {
    /// Verifications issued for the account.
    #[serde(default, deserialize_with = "null_as_default")]
    pub verifications: Vec<VerificationView>,
    /// `valid`, `invalid` or `none`.
    pub verified_status: String,
    /// Trusted-verifier status: `valid`, `invalid` or `none`.
    pub trusted_verifier_status: String,
}

/// One verification issued for an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationView {
    /// DID of the issuer.
    pub issuer: String,
    /// URI of the verification record.
    pub uri: String,
    /// Whether the verification is currently valid.
    pub is_valid: bool,
    /// Issue timestamp.
    pub created_at: String,
}

/// Hydrated account status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    /// URI of the status record.
    pub uri: Option<String>,
    /// CID of the status record.
    pub cid: Option<String>,
    /// Status token, for example [`LIVE_STATUS`].
    pub status: String,
    /// The underlying status record.
    pub record: Option<Union<Record>>,
    /// Hydrated embed.
    pub embed: Option<Union<EmbedView>>,
    /// Expiry timestamp.
    pub expires_at: Option<String>,
    /// Whether the status is active; `None` when not computed.
    pub is_active: Option<bool>,
}

/// Profile record (`app.bsky.actor.profile`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Display name.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub display_name: Option<String>,
    /// Description.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    /// Avatar blob.
    pub avatar: Option<BlobRef>,
    /// Banner blob.
    pub banner: Option<BlobRef>,
    /// Self-applied labels.
    pub labels: Option<Union<RecordLabels>>,
    /// Pinned post.
    pub pinned_post: Option<StrongRef>,
    /// Creation timestamp.
    pub created_at: Option<String>,
}

/// Status record (`app.bsky.actor.status`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    /// Status token.
    pub status: String,
    /// Attached embed.
    pub embed: Option<Union<EmbedRecord>>,
    /// Requested duration.
    pub duration_minutes: Option<u64>,
    /// Creation timestamp.
    pub created_at: String,
}

/// URI and CID pinning one version of a record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StrongRef {
    /// Record URI.
    pub uri: String,
    /// Record CID.
    pub cid: String,
}
