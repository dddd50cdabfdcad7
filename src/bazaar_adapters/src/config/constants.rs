pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const ACCOUNT_SERVICE_ALLOWED_ORIGINS_ENV_VAR: &str = "ACCOUNT_SERVICE_ALLOWED_ORIGINS";
    /// Prefix for nested overrides, e.g. `BAZAAR__ARGON2__MEMORY_KIB`.
    pub const SETTINGS_ENV_PREFIX: &str = "BAZAAR";
}

pub const CONFIG_FILE: &str = "config/base";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;

    pub mod argon2 {
        pub const MEMORY_KIB: u32 = 15000;
        pub const ITERATIONS: u32 = 2;
        pub const PARALLELISM: u32 = 1;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
