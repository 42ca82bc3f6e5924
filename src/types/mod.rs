//! Types used throughout the library, notably [errors](err).

pub mod err;
