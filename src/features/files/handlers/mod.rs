pub mod file_handler;

pub use file_handler::{
    __path_create_file, __path_delete_file, __path_get_file_by_slug, __path_list_files,
    create_file, delete_file, get_file_by_slug, list_files,
};
