use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResult {
    pub image_url: String,
    pub original_name: String,
    pub file_size: usize,
}
