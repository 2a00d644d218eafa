pub mod archive;
pub mod codepage;
pub mod dostime;
pub mod encoding;
pub mod error;
pub mod extract;
