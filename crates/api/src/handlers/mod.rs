pub mod crud;
pub mod logistics;
pub mod product;
pub mod trace;
pub mod upload;
pub mod user;
