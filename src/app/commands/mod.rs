pub mod doctor;
pub mod serve;
pub mod stage;
