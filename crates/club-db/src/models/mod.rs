//! Database models - `FromRow` structs mirroring the relational schema
//!
//! Each model carries `into_entity()` for the row → domain conversion;
//! stored enum strings that fail to parse surface as internal errors
//! instead of being silently defaulted.

mod attendance;
mod community;
mod goal;
mod member;
mod notification;
mod reaction;
mod round;
mod user;

pub use attendance::AttendanceModel;
pub use community::CommunityModel;
pub use goal::StudyGoalModel;
pub use member::CommunityMemberModel;
pub use notification::NotificationModel;
pub use reaction::ReactionModel;
pub use round::RoundModel;
pub use user::UserModel;
