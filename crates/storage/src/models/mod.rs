mod competition;
mod competitor;
mod cube_type;
mod invoice;
mod record;
mod round;
mod round_result;
mod scramble_group;
mod user;

pub use competition::Competition;
pub use competitor::{Competitor, CompetitorStatus};
pub use cube_type::CubeType;
pub use invoice::Invoice;
pub use record::Record;
pub use round::Round;
pub use round_result::{ResultFormat, RoundResult};
pub use scramble_group::ScrambleGroup;
pub use user::User;
