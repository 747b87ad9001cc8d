pub mod login;
pub mod talker;

pub use login::{Credentials, LoginRequest, LoginResponse};
pub use talker::CreateTalkerRequest;
