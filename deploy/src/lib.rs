pub mod deployer;
pub mod error;
pub mod fuel;
pub mod record;
pub mod scripts;
pub mod shared;
