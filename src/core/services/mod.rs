pub mod audited_store;
pub mod board_seeder;
