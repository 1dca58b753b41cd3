pub mod config_service;
pub mod csv_menu_repository;
pub mod csv_order_history_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::csv_menu_repository::CsvMenuRepository;
pub use crate::csv_order_history_repository::CsvOrderHistoryRepository;
