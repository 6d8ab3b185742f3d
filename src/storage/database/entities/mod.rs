/// Action entity module
pub mod action;
/// Module entity module
pub mod module;
/// Project entity module
pub mod project;
/// Project membership entity module
pub mod project_member;
/// Role entity module
pub mod role;
/// Role privilege entity module
pub mod role_privilege;
/// Scope entity module
pub mod scope;
/// User entity module
pub mod user;
/// User session entity module
pub mod user_session;

pub use action::Entity as Action;
pub use module::Entity as Module;
pub use project::Entity as Project;
pub use project_member::Entity as ProjectMember;
pub use role::Entity as Role;
pub use role_privilege::Entity as RolePrivilege;
pub use scope::Entity as Scope;
pub use user::Entity as User;
pub use user_session::Entity as UserSession;
