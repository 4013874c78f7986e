//! Element types, dense matrices and error types used by the
//! symmetric containers.

mod dense;
mod element;
mod error_types;
mod matrix_traits;
mod matrix_types;
mod utils;

pub use element::*;
pub use error_types::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub(crate) use utils::*;
