//! Pure data structures: the cart state owned by the store, and the catalog it reads.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
