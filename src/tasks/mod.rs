//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Toast sweep: Removes expired toast notifications at configured intervals

mod sweeper;

pub use sweeper::spawn_toast_sweeper;
