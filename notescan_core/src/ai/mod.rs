pub mod backend;
pub mod dto;
pub mod error;
pub mod gate;
pub mod helpers;
pub mod openai;
pub mod tokens;
