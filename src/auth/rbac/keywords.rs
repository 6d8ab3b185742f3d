//! Module and action keyword vocabulary used by route guards

/// Module keywords
pub mod modules {
    pub const PROJECTS: &str = "prn";
    pub const TEST_CASES: &str = "tc";
    pub const TEST_RUNS: &str = "tr";
    pub const USERS: &str = "usr";
    /// Not seeded; available for installations that add defect privileges
    pub const DEFECTS: &str = "defects";
    /// Not seeded
    pub const TEST_SUITES: &str = "testsuites";
}

/// Action keywords, ordered `READ < WRITE < UPDATE < DELETE`
pub mod actions {
    pub const READ: &str = "r";
    pub const WRITE: &str = "w";
    pub const UPDATE: &str = "u";
    pub const DELETE: &str = "d";
}

/// Role keywords created by the default seed
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const PROJECT_MANAGER: &str = "project_manager";
    pub const TESTER: &str = "tester";
    pub const VIEWER: &str = "viewer";
}
