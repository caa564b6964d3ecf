pub mod catalog;
pub mod console;
pub mod resolver;

pub use crate::domain::model::{Label, LinearModel, ModelFamily, RemoteLocation};
pub use crate::domain::ports::{Model, RemoteStore};
pub use crate::utils::error::Result;
