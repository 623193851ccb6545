//! Turn CSV lists of addresses and values into the text pasted as constructor or function-call
//! inputs in smart-contract deployment tools.

pub mod cli;
pub mod error;
pub mod generate;
pub mod input;
pub mod manifest;
pub mod mock;
pub mod output;
pub mod template;

pub use error::{Error, Result};
pub use generate::{generate_input, Job};
pub use template::Template;
