//! Bearer-token authentication against the external identity provider.
//!
//! Token issuance (login, registration, refresh) is the provider's job; this
//! module only validates RS256 access tokens via the provider's JWKS endpoint
//! and exposes the resulting identity to handlers.

pub mod guards;
pub mod jwks;
pub mod model;
pub mod validator;

pub use jwks::JwksClient;
pub use validator::JwtValidator;
