pub mod dashboard;
pub mod sectors;

pub use dashboard::DashboardPage;
pub use sectors::SectorsPage;
