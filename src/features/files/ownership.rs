//! Delete authorization.
//!
//! The caller's identity is the `userId` string from the request body, taken
//! as presented. It is compared verbatim with the uploader recorded on the
//! row. Verifying it against the auth provider's session token would replace
//! `ClaimedIdentity` construction and leave `ensure_owner` unchanged.

use crate::core::error::{AppError, Result};
use crate::features::files::models::FileRecord;

/// Identity asserted by the client. Not verified by this service.
#[derive(Debug, Clone, Copy)]
pub struct ClaimedIdentity<'a>(&'a str);

impl<'a> ClaimedIdentity<'a> {
    pub fn from_request_body(user_id: &'a str) -> Self {
        Self(user_id)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Allow a mutation only if `caller` is the record's uploader
pub fn ensure_owner(file: &FileRecord, caller: ClaimedIdentity<'_>) -> Result<()> {
    if file.user_id != caller.as_str() {
        return Err(AppError::Forbidden(
            "Unauthorized to delete this file".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn owned_by(user_id: &str) -> FileRecord {
        FileRecord {
            id: Uuid::new_v4(),
            title: "Soil Mechanics".to_string(),
            subject: "Agronomy".to_string(),
            semester: "3".to_string(),
            year: "2".to_string(),
            file_url: "https://x/file.pdf".to_string(),
            file_name: "soil.pdf".to_string(),
            created_at: Utc::now(),
            user_id: user_id.to_string(),
            slug: None,
        }
    }

    #[test]
    fn test_owner_is_allowed() {
        let file = owned_by("u1");
        assert!(ensure_owner(&file, ClaimedIdentity::from_request_body("u1")).is_ok());
    }

    #[test]
    fn test_other_user_is_forbidden() {
        let file = owned_by("u1");
        let result = ensure_owner(&file, ClaimedIdentity::from_request_body("u2"));
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_comparison_is_exact() {
        let file = owned_by("user_2abc");
        for claimed in ["USER_2ABC", "user_2abc ", " user_2abc", "user_2ab"] {
            let result = ensure_owner(&file, ClaimedIdentity::from_request_body(claimed));
            assert!(matches!(result, Err(AppError::Forbidden(_))), "{claimed:?}");
        }
    }
}
