pub mod hashmap_account_image_repository;
pub mod hashmap_account_repository;
pub mod hashmap_token_issuer;
pub mod postgres_account_image_repository;
pub mod postgres_account_repository;
pub mod postgres_category_repository;
pub mod postgres_token_issuer;
pub mod vec_category_repository;

pub use hashmap_account_image_repository::HashMapAccountImageRepository;
pub use hashmap_account_repository::HashMapAccountRepository;
pub use hashmap_token_issuer::HashMapTokenIssuer;
pub use postgres_account_image_repository::PostgresAccountImageRepository;
pub use postgres_account_repository::PostgresAccountRepository;
pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_token_issuer::PostgresTokenIssuer;
pub use vec_category_repository::VecCategoryRepository;
