//! Forward-compatible JSON codec for usage-metering and dashboard models
//!
//! Every model decodes into a [`codec::Record`]: the typed struct when the
//! payload fits, or the raw JSON object when it does not. Unknown keys are
//! kept and re-emitted on encode.

pub mod codec;
pub mod config;
pub mod enums;
pub mod error;
pub mod models;
pub mod nullable;
pub mod registry;

pub use codec::{Record, WireModel, decode, decode_str, encode, encode_string};
pub use enums::WireEnum;
pub use error::{Error, Result};
pub use nullable::Nullable;
