//! # System Lifecycle & Orchestration
//!
//! Starts the session actor, wires its context, and shuts it down.
//!
//! ## Dependency Injection via Context
//!
//! The session actor needs a handle to itself so that order trackers can send ticks back.
//! That handle only exists after `ResourceActor::new`, so it is injected at `run(context)`
//! time ("late binding"):
//!
//! ```rust,ignore
//! let (actor, client) = session_actor::new(32);
//! let context = SessionContext::new(client.downgrade(), config)?;
//! tokio::spawn(actor.run(context));
//! ```
//!
//! The context holds a *weak* handle. A strong one would be a cycle (the actor keeping
//! its own channel open) and the actor would never see the channel close.
//!
//! ## Graceful Shutdown
//!
//! 1. **Request shutdown** - [`RestaurantSystem::shutdown`] sends a shutdown request, so
//!    client clones held elsewhere cannot keep the actor running
//! 2. **Actor drains** - it closes its receiver and answers whatever was already queued
//! 3. **Actor cleans up** - aborts every remaining tracker via `on_shutdown`
//! 4. **Await completion** - the actor task is joined
//!
//! Dropping every client also ends the loop. Trackers that wake up after either path fail
//! to reach the actor and stop on their own.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`] module.

pub mod restaurant_system;
pub mod tracing;

pub use restaurant_system::*;
pub use tracing::*;
