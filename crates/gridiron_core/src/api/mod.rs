pub mod json_api;

pub use json_api::{
    simulate_drive, simulate_drive_json, DriveRequest, DriveResponse, OutcomeSummary,
};
