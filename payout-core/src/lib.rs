pub mod calculations;
pub mod form;
pub mod models;

pub use form::{FormError, FormField, PayoutForm, ValidationError};
pub use models::*;
