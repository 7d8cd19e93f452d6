//! Validated field values of an application record.
//!
//! Each submodule owns one field: its constraint message, the predicate that
//! checks raw text against it, and the value type that can only be built from
//! text that passed the check.

pub mod address;
pub mod email;
pub mod name;
pub mod phone;
pub mod remark;
pub mod status;
pub mod tag;

// Re-exports for convenience
pub use address::Address;
pub use email::Email;
pub use name::Name;
pub use phone::Phone;
pub use remark::Remark;
pub use status::Status;
pub use tag::Tag;
