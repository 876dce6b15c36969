//! Shared-secret authentication for rpcql
//!
//! The dispatcher only ever sees a boolean; the comparison itself is
//! constant-time over SHA-256 digests so neither length nor content of the
//! expected secret leaks through timing.

mod token;

pub use token::TokenAuthenticator;
