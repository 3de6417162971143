mod filemeta_dto;

pub use filemeta_dto::{FileMetadataDto, UploadFileDto};
