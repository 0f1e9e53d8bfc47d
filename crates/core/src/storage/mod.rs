mod codes;
mod error;
mod traits;

pub use codes::{
    repository_error_code, DECODE_ERROR, NOT_FOUND, STORE_ERROR, VALIDATION_ERROR,
};
pub use error::{RepositoryError, Result};
pub use traits::ItemRepository;
