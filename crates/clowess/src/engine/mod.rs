//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing process by coordinating between
//! primitives (windows, buffers) and algorithms (local fit, robustness,
//! interpolation). It provides the pass loop and the smoothing walk.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for LOWESS smoothing.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for LOWESS operations.
pub mod output;
