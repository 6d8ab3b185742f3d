use sea_orm::DatabaseConnection;

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

/// Row counts reported by the seeder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub actions: u64,
    pub scopes: u64,
    pub modules: u64,
    pub roles: u64,
    pub privileges: u64,
}

impl SeedReport {
    /// Rows written in total
    pub fn total(&self) -> u64 {
        self.actions + self.scopes + self.modules + self.roles + self.privileges
    }
}
