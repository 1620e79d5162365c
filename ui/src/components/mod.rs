pub mod icons;
pub mod layout;

pub use icons::PersonIcon;
