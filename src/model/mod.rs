//! Pure data structures: the menu, the cart, orders, and the [`Session`] that ties them
//! together as an [`ActorEntity`](crate::framework::ActorEntity).

pub mod cart;
pub mod menu;
pub mod order;
pub mod session;

pub use cart::*;
pub use menu::*;
pub use order::*;
pub use session::*;
