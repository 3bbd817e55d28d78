pub mod health;
pub mod imports;
pub mod jobs;
pub mod validation;
