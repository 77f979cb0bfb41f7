//! StoredFile Entity Implementation
//!
//! 업로드된 파일의 메타데이터 엔티티입니다.
//! 실제 바이트는 디스크의 `uploads/` 경로 아래에 저장되며,
//! 이 엔티티는 원본 파일명과 생성된 저장 경로를 연결합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 업로드 파일 메타데이터 엔티티
///
/// `file_type`과 `file_size`는 서버가 실제 수신한 바이트에서 파생되며,
/// 클라이언트가 보낸 메타데이터 필드를 신뢰하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유자 참조 (불변)
    pub user_id: ObjectId,
    /// 업로드 당시의 원본 파일명 (다운로드 Content-Disposition에 사용)
    pub file_name: String,
    /// 디스크 상의 저장 경로 (uploads/ 아래, 생성된 이름)
    pub storage_path: String,
    /// 업로드 시 감지된 컨텐츠 타입
    pub file_type: String,
    /// 파일 크기 (바이트)
    pub file_size: i64,
    /// 선택적 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 업로드 시간
    pub upload_date: DateTime,
}

impl StoredFile {
    /// 새 파일 메타데이터 생성
    pub fn new(
        user_id: ObjectId,
        file_name: String,
        storage_path: String,
        file_type: String,
        file_size: i64,
        description: Option<String>,
    ) -> Self {
        Self {
            id: None,
            user_id,
            file_name,
            storage_path,
            file_type,
            file_size,
            description,
            upload_date: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
