//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, IssuedToken, JwtService};
pub use password::{MIN_PASSWORD_LEN, hash_password, validate_password_strength, verify_password};
