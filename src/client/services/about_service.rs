use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::client::services::api_client::{ApiClient, ApiError, ApiResult};
use crate::common::models::{AboutSection, SectionType, Visionary};

#[derive(Debug, Clone, Default)]
pub struct VisionaryForm {
    pub name: String,
    pub title: String,
    pub biography: String,
    pub history: String,
    /// Local path of a photo to upload, when the user picked one.
    pub photo_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SectionForm {
    pub section_type: SectionType,
    pub title: String,
    pub content: String,
    pub image_path: Option<PathBuf>,
}

impl Default for SectionForm {
    fn default() -> Self {
        Self {
            section_type: SectionType::History,
            title: String::new(),
            content: String::new(),
            image_path: None,
        }
    }
}

/// "À propos" content: one visionary record plus typed text sections.
/// Image fields go up as multipart, everything else as plain text parts,
/// matching what the backend's serializers expect.
#[derive(Debug, Clone)]
pub struct AboutService {
    api: Arc<ApiClient>,
}

impl AboutService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn visionaries(&self) -> ApiResult<Vec<Visionary>> {
        self.api.get("/about/visionaries/", &[]).await
    }

    pub async fn sections(&self) -> ApiResult<Vec<AboutSection>> {
        self.api.get("/about/sections/", &[]).await
    }

    /// Both collections in one go (the page needs them together).
    pub async fn fetch_all(&self) -> ApiResult<(Option<Visionary>, Vec<AboutSection>)> {
        let (visionaries, sections) =
            futures::try_join!(self.visionaries(), self.sections())?;
        Ok((visionaries.into_iter().next(), sections))
    }

    /// Create or update the visionary record; the backend holds at most
    /// one, so an existing id means PATCH.
    pub async fn save_visionary(
        &self,
        existing_id: Option<i64>,
        form: &VisionaryForm,
    ) -> ApiResult<Visionary> {
        let mut multipart = Form::new()
            .text("name", form.name.clone())
            .text("title", form.title.clone())
            .text("biography", form.biography.clone())
            .text("history", form.history.clone());
        if let Some(path) = &form.photo_path {
            multipart = multipart.part("photo", file_part(path).await?);
        }
        match existing_id {
            Some(id) => {
                self.api
                    .patch_multipart(&format!("/about/visionaries/{}/", id), multipart)
                    .await
            }
            None => self.api.post_multipart("/about/visionaries/", multipart).await,
        }
    }

    pub async fn save_section(
        &self,
        existing_id: Option<i64>,
        form: &SectionForm,
    ) -> ApiResult<AboutSection> {
        let type_value = serde_json::to_value(form.section_type)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| "HISTORY".to_string());
        let mut multipart = Form::new()
            .text("type", type_value)
            .text("title", form.title.clone())
            .text("content", form.content.clone());
        if let Some(path) = &form.image_path {
            multipart = multipart.part("image", file_part(path).await?);
        }
        match existing_id {
            Some(id) => {
                self.api
                    .patch_multipart(&format!("/about/sections/{}/", id), multipart)
                    .await
            }
            None => self.api.post_multipart("/about/sections/", multipart).await,
        }
    }

    pub async fn delete_section(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("/about/sections/{}/", id)).await
    }
}

async fn file_part(path: &Path) -> ApiResult<Part> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ApiError::Validation(format!("Fichier illisible ({}): {}", path.display(), e)))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());
    Ok(Part::bytes(bytes).file_name(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_a_validation_error_not_a_panic() {
        let err = file_part(Path::new("/nonexistent/photo.jpg"))
            .await
            .err()
            .expect("should fail");
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn section_type_serializes_to_wire_name() {
        let v = serde_json::to_value(SectionType::History).unwrap();
        assert_eq!(v.as_str(), Some("HISTORY"));
    }
}
