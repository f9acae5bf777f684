//! `flock-sim` — tick orchestrator for the flock boids engine.
//!
//! # Double-buffered tick
//!
//! ```text
//! step():
//!   ① Snapshot — copy every agent's position/velocity (FlockSnapshot).
//!   ② Per cell — assemble candidates (own + adjacent cells, from the
//!                snapshot), compute neighbours and steering for each owned
//!                agent, then advance those agents.  Cells are independent
//!                (parallel with the `parallel` feature).
//!   ③ Tick     — advance the tick counter, return TickStats.
//! ```
//!
//! Because every read in ② comes from the snapshot taken in ①, the outcome
//! does not depend on the order (or concurrency) in which cells run.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-cell phase on Rayon's thread pool.        |
//! | `serde`    | Serde derives on config and pose types.                |
//!
//! # Quick-start
//!
//! ```rust
//! use flock_core::FlockConfig;
//! use flock_sim::FlockBuilder;
//!
//! let config = FlockConfig { seed: Some(42), ..FlockConfig::default() };
//! let mut sim = FlockBuilder::new(config).build()?;
//! sim.step();
//! assert_eq!(sim.agent_count(), 90);
//! let pose = sim.pose(flock_core::AgentId(0))?;
//! println!("{pose}");
//! # Ok::<(), flock_sim::SimError>(())
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::FlockBuilder;
pub use error::{SimError, SimResult};
pub use observer::{FlockObserver, NoopObserver, TracingObserver};
pub use sim::{FlockSimulation, TickStats};
