pub mod digest;
pub mod email;
pub mod serve;
