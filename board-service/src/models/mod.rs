pub mod member;
pub mod message;
pub mod token;

pub use member::{AuthResponse, LoginRequest, Member, MemberPublic, RegisterRequest};
pub use message::{Message, MessageRecord, PostMessageRequest};
pub use token::AccessToken;
