use serde::{Deserialize, Serialize};

// 专业申请状态
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MajorStatus {
    #[default]
    Liked,
    ApplyTo,
    Applied,
    Accepted,
    Rejected,
}

impl std::fmt::Display for MajorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MajorStatus::Liked => "Liked",
            MajorStatus::ApplyTo => "ApplyTo",
            MajorStatus::Applied => "Applied",
            MajorStatus::Accepted => "Accepted",
            MajorStatus::Rejected => "Rejected",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for MajorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Liked" => Ok(MajorStatus::Liked),
            "ApplyTo" => Ok(MajorStatus::ApplyTo),
            "Applied" => Ok(MajorStatus::Applied),
            "Accepted" => Ok(MajorStatus::Accepted),
            "Rejected" => Ok(MajorStatus::Rejected),
            _ => Err(format!("Invalid major status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Major {
    pub id: i64,
    // 所属客户ID
    pub client_id: i64,
    pub name: String,
    pub university_name: String,
    pub address: String,
    pub duration: String,
    pub language: String,
    pub grading_system: String,
    pub notes: String,
    pub status: MajorStatus,
    // 关联考试ID
    pub exam_ids: Vec<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_string() {
        for status in [
            MajorStatus::Liked,
            MajorStatus::ApplyTo,
            MajorStatus::Applied,
            MajorStatus::Accepted,
            MajorStatus::Rejected,
        ] {
            assert_eq!(status.to_string().parse::<MajorStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_json_form() {
        assert_eq!(
            serde_json::to_string(&MajorStatus::ApplyTo).unwrap(),
            "\"ApplyTo\""
        );
        assert!(serde_json::from_str::<MajorStatus>("\"Pending\"").is_err());
        assert_eq!(MajorStatus::default(), MajorStatus::Liked);
    }
}
