//! 파일 응답 DTO
//!
//! 업로드는 multipart 폼으로 수신되므로 별도의 요청 DTO가 없습니다.

use crate::domain::entities::files::stored_file::StoredFile;
use serde::{Deserialize, Serialize};

/// 파일 메타데이터 응답 DTO
///
/// 디스크 상의 저장 경로는 내부 구현 세부사항이므로 노출하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResponse {
    pub id: String,
    /// 업로드 당시의 원본 파일명
    pub file_name: String,
    /// 서버가 감지한 컨텐츠 타입
    pub file_type: String,
    /// 파일 크기 (바이트)
    pub file_size: i64,
    /// 업로드 시각 (RFC 3339)
    pub upload_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<StoredFile> for FileResponse {
    fn from(file: StoredFile) -> Self {
        Self {
            id: file.id_string().unwrap_or_default(),
            file_name: file.file_name,
            file_type: file.file_type,
            file_size: file.file_size,
            upload_date: file
                .upload_date
                .try_to_rfc3339_string()
                .unwrap_or_default(),
            description: file.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_file_response_hides_storage_path() {
        let mut file = StoredFile::new(
            ObjectId::new(),
            "report.pdf".to_string(),
            "uploads/3f2c6b1e.pdf".to_string(),
            "application/pdf".to_string(),
            1024,
            None,
        );
        file.id = Some(ObjectId::new());

        let json = serde_json::to_string(&FileResponse::from(file)).unwrap();

        assert!(!json.contains("storage_path"));
        assert!(!json.contains("uploads/3f2c6b1e.pdf"));
        assert!(json.contains("report.pdf"));
    }
}
