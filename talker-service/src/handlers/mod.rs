pub mod health;
pub mod login;
pub mod talker;

pub use health::{health_check, root};
pub use login::login;
pub use talker::{create_talker, get_talker, list_talkers};
