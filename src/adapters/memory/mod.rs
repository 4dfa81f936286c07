pub mod in_memory_database;
