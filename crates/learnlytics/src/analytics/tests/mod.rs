mod common;
mod filter;
mod imports;
mod metrics;
