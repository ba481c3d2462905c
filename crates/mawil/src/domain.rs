pub mod chat;
pub mod content;
pub mod link;
pub mod message_format;
pub mod page;
