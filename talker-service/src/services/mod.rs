pub mod repository;
pub mod token;

pub use repository::TalkerRepository;
pub use token::generate_token;
