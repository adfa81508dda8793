// Infrastructure layer: adapters, file I/O, templating, eventing
pub mod event_printer;
pub mod file_io;
pub mod html5_tokenizer;
pub mod nav_page;
pub mod schema_validator;
