//! Firestore REST representation of panorama documents.
//!
//! See <https://firebase.google.com/docs/firestore/reference/rest/v1/projects.databases.documents/commit>

use pano_core::entities::NewPanoramaRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommitRequest {
    pub writes: Vec<Write>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Write {
    pub update: Document,
    pub update_transforms: Vec<FieldTransform>,
    pub current_document: Precondition,
}

#[derive(Debug, Serialize)]
pub struct Document {
    pub name: String,
    pub fields: PanoramaFields,
}

#[derive(Debug, Serialize)]
pub struct PanoramaFields {
    pub latitude: Value,
    pub longitude: Value,
    pub image_base64: Value,
    pub panorama_id: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    DoubleValue(f64),
    StringValue(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTransform {
    pub field_path: String,
    pub set_to_server_value: ServerValue,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerValue {
    RequestTime,
}

#[derive(Debug, Serialize)]
pub struct Precondition {
    pub exists: bool,
}

impl CommitRequest {
    /// Creates a new document whose `timestamp` field
    /// is set by the server at commit time.
    pub fn create_panorama(document_name: String, record: NewPanoramaRecord) -> Self {
        let NewPanoramaRecord {
            pos,
            panorama_id,
            image_base64,
            ..
        } = record;
        let update = Document {
            name: document_name,
            fields: PanoramaFields {
                latitude: Value::DoubleValue(pos.lat),
                longitude: Value::DoubleValue(pos.lng),
                image_base64: Value::StringValue(image_base64),
                panorama_id: Value::StringValue(panorama_id.into()),
            },
        };
        let write = Write {
            update,
            update_transforms: vec![FieldTransform {
                field_path: "timestamp".to_string(),
                set_to_server_value: ServerValue::RequestTime,
            }],
            current_document: Precondition { exists: false },
        };
        Self {
            writes: vec![write],
        }
    }
}
