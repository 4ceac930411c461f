pub mod convert;
pub mod flip;
pub mod output;
