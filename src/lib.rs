pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "fetch")]
pub use adapters::s3::S3Store;

pub use adapters::http::HttpStore;
pub use config::fetch::FetchConfig;
pub use config::manifest::ModelManifest;
pub use core::catalog::Catalog;
pub use core::console::{PredictionConsole, PredictionReport};
pub use core::resolver::{resolve, Resolution};
pub use domain::model::{Label, LinearModel, ModelFamily, RemoteLocation};
pub use domain::ports::{Model, RemoteStore};
pub use domain::sample::{canned_samples, sample_by_name, Sample};
pub use utils::error::{DemoError, Result};
