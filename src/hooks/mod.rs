pub mod use_companies;
pub mod use_health;
pub mod use_index;
pub mod use_query;
pub mod use_sectors;
pub mod use_table_state;
pub mod use_theme;
