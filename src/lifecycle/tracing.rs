//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the actor logs carry an
//! `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown and final store size
//! - **Requests**: Create, Get, Delete and every `SessionAction`
//! - **Trackers**: one `tracker{session_id order_id}` span per order, one line per step
//! - **Chef**: model calls, empty replies, failures and timeouts
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run       # lifecycle, orders placed, status steps
//! RUST_LOG=debug cargo run      # every request with its payload
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**, placing an order with a 1 s tick:
//!
//! ```text
//! INFO Actor started entity_type="Session"
//! INFO open_session: Created entity_type="Session" id=session_1 size=1
//! INFO open_session: Session opened session_id=session_1
//! INFO Order placed session_id=session_1 order_id=#Q8ZK2M4TA total=49.5 eta_minutes=37
//! INFO tracker: Order advanced status=Preparing
//! INFO tracker: Order advanced status=Out for Delivery
//! INFO tracker: Order advanced status=Delivered
//! INFO Shutdown entity_type="Session" size=1
//! ```
//!
//! Calling this twice panics, because the global subscriber can only be set once.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
