pub mod ask;
pub mod domains;
pub mod export;
pub mod think;
