//! Types shared between resources.

mod address;
mod metafield;

pub use address::CustomerAddress;
pub use metafield::MetafieldOwner;
