pub mod validation;

pub use validation::{RequireToken, ValidatePayload, ValidatedJson};
