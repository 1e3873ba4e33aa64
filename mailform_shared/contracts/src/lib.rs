pub mod dump;
pub mod hash;
pub mod record;
