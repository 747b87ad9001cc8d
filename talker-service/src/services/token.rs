use rand::Rng;

/// Length of the hex token handed out by `POST /login`.
pub const TOKEN_LENGTH: usize = 16;

/// Opaque login token. Not verifiable, only its length is ever checked.
pub fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let token_bytes: [u8; TOKEN_LENGTH / 2] = rng.gen();
    hex::encode(token_bytes)
}
