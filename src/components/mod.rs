pub mod api_status;
pub mod company_table;
pub mod index_card;
pub mod performance_chart;
pub mod sector_chart;
pub mod sector_detail;
pub mod status;
pub mod theme_toggle;

pub use api_status::ApiStatus;
pub use company_table::CompanyTable;
pub use index_card::IndexCard;
pub use performance_chart::PerformanceChart;
pub use sector_chart::SectorChart;
pub use sector_detail::SectorDetail;
pub use status::Status;
pub use theme_toggle::ThemeToggle;
