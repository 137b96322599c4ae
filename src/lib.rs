//! # KhanaDarshan Ordering Core
//!
//! The state core of a restaurant ordering app: a menu catalog, one cart and one active
//! order per customer session, a timer that walks each order from `Placed` to `Delivered`,
//! and a chef concierge backed by a hosted language model.
//!
//! ## Design
//!
//! ### Sessions are actor-owned
//! Every [`Session`](model::Session) lives inside a single
//! [`ResourceActor`](framework::ResourceActor). Views talk to it through a cloneable
//! [`SessionClient`](clients::SessionClient), and every mutation is a typed
//! [`SessionAction`](session_actor::SessionAction) processed to completion before the next
//! one. No lock guards the cart, and no read ever sees half of an update.
//!
//! ### Orders advance themselves
//! Placing an order spawns a tracker task (see [`session_actor::tracker`]). It holds a weak
//! handle to the actor plus the session and order ids, and sends one `AdvanceOrder` per
//! tick. Closing the session or shutting the system down stops it.
//!
//! ### The chef never sees the cart
//! [`chef::ChefConcierge`] builds its prompt from the catalog and the question alone, and
//! every failure becomes a fixed fallback reply.
//!
//! ## Module Tour
//!
//! - [`framework`] - generic actor, clients, entity trait and mocks
//! - [`model`] - menu items, cart, orders, sessions
//! - [`session_actor`] - the session entity, its actions, errors and trackers
//! - [`clients`] - [`SessionClient`](clients::SessionClient)
//! - [`catalog`] - the menu
//! - [`chef`] - prompt, Gemini model, concierge
//! - [`config`] - environment configuration
//! - [`lifecycle`] - [`RestaurantSystem`](lifecycle::RestaurantSystem) and tracing setup
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info KHANA_TICK_INTERVAL_MS=1000 cargo run
//! ```

pub mod catalog;
pub mod chef;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod session_actor;
