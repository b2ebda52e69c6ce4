//! 사용자 등급 배지
//!
//! 회원가입 시 `Bronze`가 부여되고, 프리미엄 패키지 결제 후
//! 패키지 이름에 해당하는 배지로 변경됩니다.

use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Badge {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Badge {
    pub const ALL: [Badge; 4] = [Badge::Bronze, Badge::Silver, Badge::Gold, Badge::Platinum];

    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Bronze => "Bronze",
            Badge::Silver => "Silver",
            Badge::Gold => "Gold",
            Badge::Platinum => "Platinum",
        }
    }

    /// 결제 요청의 `packageType`을 배지로 변환합니다.
    ///
    /// 대소문자와 앞뒤 공백은 무시하며, 알 수 없는 패키지는 `None`입니다.
    pub fn from_package_type(package_type: &str) -> Option<Self> {
        let normalized = package_type.trim();
        Self::ALL
            .into_iter()
            .find(|badge| badge.as_str().eq_ignore_ascii_case(normalized))
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
