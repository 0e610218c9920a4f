//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Sweep: reclaims expired secrets from the in-memory backend

mod sweeper;

pub use sweeper::spawn_sweep_task;
