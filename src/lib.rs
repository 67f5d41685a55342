#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::{Cached, helper};

mod sample_statistics;
pub use sample_statistics::{ConfidenceInterval, SampleStatistics};

mod order_statistics;
pub use order_statistics::Fences;

mod paired_statistics;
pub use paired_statistics::{correlation, covariance, covariance_matrix};
