mod auth;
mod category;
mod distributor;
mod product;
mod quote;

pub use auth::*;
pub use category::*;
pub use distributor::*;
pub use product::*;
pub use quote::*;
