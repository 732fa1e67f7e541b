//! linetally-web — Web surface for Linetally
//! Provides the floor tracking API and dashboard:
//!   - Hourly production / inspection logging
//!   - Floor summary ranking (per line)
//!   - Building comparison ranking
//!   - Live event stream (SSE)
//!   - System status

pub mod handlers;
pub mod router;
pub mod sse;
pub mod state;
