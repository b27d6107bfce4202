//! Repository traits (ports) - interfaces the infrastructure layer implements

mod repositories;

pub use repositories::{
    AttendanceRepository, CommunityQuery, CommunityRepository, GoalRepository, MemberRepository,
    NotificationRepository, ReactionRepository, RepoResult, RoundRepository, UserRepository,
};
