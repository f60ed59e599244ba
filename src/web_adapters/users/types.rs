#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
pub struct UserVisible {
    pub id: uuid::Uuid,
    pub email: String,
    pub name: String,
    pub is_active: bool,
}

pub const USER_ID_KEY: &str = "user_id";
