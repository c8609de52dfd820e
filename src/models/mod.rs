pub mod clock_status;
pub mod dashboard;
pub mod day_type;
pub mod settings;
pub mod work_record;
