// src/domain/user/errors.rs
use crate::domain::errors::Error;

pub struct UserErrors;

impl UserErrors {
    pub const INVALID_CREDENTIALS: Error =
        Error::from_static("User.InvalidCredentials", "Invalid email or password");
}
