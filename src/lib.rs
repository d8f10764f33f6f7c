// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod library;
pub mod persistence;
pub mod translate;

pub use crate::core::classifier::{classify, resolve_script};
pub use crate::core::converter::{transliterate, Transliterator};
pub use crate::core::engine::{ReaderSession, WordView};
pub use crate::core::tokenizer::tokenize;
pub use crate::core::types::{Cell, CodePointRange, Script, Token, TokenKind};
pub use crate::error::{LipiError, Result};
pub use crate::translate::language_code;
