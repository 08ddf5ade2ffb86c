use crate::entities::classify::Classify;
use serde::Serialize;

#[derive(Serialize)]
pub struct ClassifyInfo {
    pub classify_id: i64,
    pub name: String,
}

impl From<Classify> for ClassifyInfo {
    fn from(classify: Classify) -> Self {
        Self {
            classify_id: classify.classify_id,
            name: classify.name,
        }
    }
}
