//! Core invoice types, derived-value arithmetic, numbering, and validation.
//!
//! Everything here is plain data and pure functions; persistence lives in
//! [`crate::store`], rendering and export contracts in [`crate::export`].

mod currency;
mod dates;
mod error;
mod numbering;
mod template;
mod totals;
mod types;
mod validation;

pub use currency::*;
pub use dates::*;
pub use error::*;
pub use numbering::*;
pub use template::*;
pub use totals::*;
pub use types::*;
pub use validation::*;
