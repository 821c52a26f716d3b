pub mod bot;

pub use crate::domain::model::{Credentials, Schedule};
pub use crate::domain::ports::{ContentGenerator, Publisher};
pub use crate::utils::error::Result;
