//! Canonical token model shared by the builder and every export adapter

pub mod category;
pub mod model;
pub mod value;

pub use category::Category;
pub use model::{TokenModel, TokenTable};
pub use value::{Offset, ShadowToken, TokenValue};
