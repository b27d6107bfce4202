//! Authentication utilities - session tokens and the OAuth boundary

mod oauth;
mod session;

pub use oauth::{HttpOAuthClient, SocialAuthClient, SocialProfile};
pub use session::{Claims, SessionService, TokenPair, TokenType};
