pub mod auth;
pub mod hello;
pub mod members;
pub mod messages;
