//! Infrastructure Storage Layer
//!
//! This crate persists rentable records as flat JSON documents, one file
//! per kind, keyed by each record's id.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: [`JsonRepository`] implements
//! the `core_kernel::Repository` port, so the interface layer never sees
//! file handling directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::JsonRepository;
//!
//! let add_ons: JsonRepository<AddOnDto> = JsonRepository::open(data_dir.join("addons.json"))?;
//! for add_on in add_ons.list()? {
//!     println!("{}", add_on.name);
//! }
//! ```

pub mod error;
pub mod repository;
pub mod store;

pub use error::StoreError;
pub use repository::JsonRepository;
pub use store::JsonStore;
