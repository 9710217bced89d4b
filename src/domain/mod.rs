pub mod comment;
pub mod news;

pub use comment::{flatten_comments, CommentNode, FlatComment};
pub use news::{DetailItem, FeedItem, News};
