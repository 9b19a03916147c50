pub mod competition;
pub mod competitor;
pub mod cube_type;
pub mod invoice;
pub mod record;
pub mod result;
pub mod round;
pub mod scramble_group;
pub mod user;
