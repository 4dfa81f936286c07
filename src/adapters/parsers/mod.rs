pub mod seed_parser;
