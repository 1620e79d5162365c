pub mod home;
pub mod not_found;
pub mod profile;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
