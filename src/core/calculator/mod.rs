pub mod clock;
pub mod interval;
pub mod monthly;

pub use clock::compute_status;
pub use interval::{compute_net_hours, overlap};
pub use monthly::compute_dashboard;
