pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::ticket::Entity as Ticket;
pub use super::user::Entity as User;
