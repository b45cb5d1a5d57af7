pub use super::email_confirmation::Entity as EmailConfirmation;
pub use super::entry::Entity as Entry;
pub use super::entry_comment::Entity as EntryComment;
pub use super::entry_comment_favorite::Entity as EntryCommentFavorite;
pub use super::entry_comment_vote::Entity as EntryCommentVote;
pub use super::entry_favorite::Entity as EntryFavorite;
pub use super::entry_vote::Entity as EntryVote;
pub use super::user::Entity as User;
pub use super::vote_type::VoteType;
