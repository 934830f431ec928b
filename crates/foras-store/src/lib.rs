pub mod adapter;
pub mod error;
pub mod i18n;
pub mod local;
pub mod store;

pub use adapter::StoreAdapter;
pub use error::StoreError;
pub use local::LocalStore;
pub use store::AppStore;
