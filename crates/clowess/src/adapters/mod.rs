//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing execution modes that adapt the engine
//! layer for different kinds of input:
//!
//! - **Batch**: Arbitrary `(x, y)` pairs with strict validation
//! - **EvenGrid**: Ordinates only, on the abscissas `0..n`, with clamping
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified batch adapter for LOWESS smoothing.
pub mod batch;

/// Even-grid adapter for evenly spaced series.
pub mod even;
