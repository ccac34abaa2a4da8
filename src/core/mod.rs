pub mod company;
pub mod errors;
pub mod industry;

pub use company::{CompanyRecord, RawValue, RELOCATION_NONE};
pub use errors::{Error, Result};
pub use industry::Industry;
