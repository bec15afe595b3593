#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use fake::{
    faker::lorem::en::{Sentence, Word},
    Fake,
};

#[cfg(test)]
use crate::features::files::dtos::{CreateFileInput, FilesUpdatedEvent};
#[cfg(test)]
use crate::features::files::repositories::InMemoryFileRepository;
#[cfg(test)]
use crate::features::files::services::FileService;
#[cfg(test)]
use crate::modules::realtime::Broadcaster;

/// File service over an empty in-memory store, plus handles to the store and
/// the event broadcaster it publishes to
#[cfg(test)]
pub fn file_service_with_memory_store() -> (
    Arc<FileService>,
    Arc<InMemoryFileRepository>,
    Arc<Broadcaster<FilesUpdatedEvent>>,
) {
    let repository = Arc::new(InMemoryFileRepository::new());
    let events = Arc::new(Broadcaster::new(64));
    let service = Arc::new(FileService::new(repository.clone(), events.clone()));
    (service, repository, events)
}

/// Valid create input with random classification fields
#[cfg(test)]
pub fn create_input(user_id: &str) -> CreateFileInput {
    let word: String = Word().fake();
    CreateFileInput {
        title: Sentence(2..5).fake(),
        subject: Word().fake(),
        semester: (1..=8u8).fake::<u8>().to_string(),
        year: (1..=4u8).fake::<u8>().to_string(),
        file_url: format!("https://res.cloudinary.com/demo/raw/upload/{}.pdf", word),
        file_name: format!("{}.pdf", word),
        user_id: user_id.to_string(),
    }
}

/// JSON body for `POST /api/files` with random classification fields
#[cfg(test)]
pub fn create_payload(user_id: &str) -> serde_json::Value {
    let input = create_input(user_id);
    serde_json::json!({
        "title": input.title,
        "subject": input.subject,
        "semester": input.semester,
        "year": input.year,
        "fileUrl": input.file_url,
        "fileName": input.file_name,
        "userId": input.user_id,
    })
}
