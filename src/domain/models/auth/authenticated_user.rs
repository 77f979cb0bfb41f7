//! 인증된 사용자 컨텍스트 모델
//!
//! 인증 미들웨어가 토큰 검증과 사용자 조회를 마친 뒤
//! Request Extensions에 삽입하는 값입니다. 핸들러는 이 값을 통해
//! 현재 요청의 신원을 얻으며, 클라이언트가 보낸 식별자를 신뢰하지 않습니다.

use serde::{Deserialize, Serialize};

/// 인증된 사용자 정보
///
/// 모든 소유자 범위 쿼리와 소유권 검사는 이 구조체의 `user_id`를
/// 기준으로 수행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 ID (ObjectId 16진수 문자열)
    pub user_id: String,
    /// 사용자 이메일
    pub email: String,
}
