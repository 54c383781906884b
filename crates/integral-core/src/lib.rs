// File: crates/integral-core/src/lib.rs
// Summary: Integration engine entry point; exports rules, the Riemann driver, sampling and expressions.

pub mod rule;
pub mod engine;
pub mod sampling;
pub mod expr;
pub mod error;

pub use rule::QuadratureRule;
pub use engine::{
    clamp_sample_count, compute, compute_integral, Computation, IntegralResult, IntegrationRequest, MAX_SAMPLES,
    MIN_SAMPLES,
};
pub use sampling::sample_function;
pub use expr::parse::MAX_NESTING;
pub use expr::{Expression, MAX_SOURCE_LEN};
pub use error::ExprError;
