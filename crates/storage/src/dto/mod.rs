pub mod competition;
pub mod competitor;
pub mod invoice;
pub mod record;
pub mod result;
pub mod round;
