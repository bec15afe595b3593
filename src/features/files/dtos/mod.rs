pub mod file_dto;

pub use file_dto::{
    CreateFileDto, CreateFileInput, DeleteFileDto, DeleteFileResponseDto, FileResponseDto,
    FilesUpdatedEvent, ListFilesQuery,
};
