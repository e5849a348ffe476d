//! Semantic Type Conformance Suite
//!
//! Exercises the public API the way a downstream crate would: through the
//! facade, with contracts from the catalog and contracts defined locally.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Gateway invariants (create mirrors the gateway, error fidelity, metadata)
//! - **Tier 2**: Mutation pipeline atomicity
//! - **Tier 3**: Capability surface and cross-contract isolation
//! - **Tier 4**: Serialization transparency across serde formats
//! - **Tier 5**: Concrete end-to-end scenarios
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test conformance
//! ```

mod test_utils;

mod tier1_gateway_invariants;
mod tier4_serialization;
mod tier5_scenarios;
