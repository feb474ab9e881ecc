//! Files from the `assets` directory, embedded at compile time.
//!
//! Each file becomes a `&str` (or `&[u8]` for binary files) constant named
//! after the file, each directory becomes a module.

include!(env!("ASSETS"));
