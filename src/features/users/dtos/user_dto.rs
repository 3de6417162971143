use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request DTO for user creation.
///
/// The username is stored as-is: no length or uniqueness checks, matching the
/// contract the historical clients were written against.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
}

/// Wire view of a user. `_id` keeps the historical field name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::Username;
    use fake::Fake;

    #[test]
    fn test_user_response_uses_historical_id_key() {
        let username: String = Username().fake();
        let dto = UserResponseDto {
            username: username.clone(),
            id: Uuid::new_v4(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["username"], username);
        assert!(json.get("_id").is_some());
        assert!(json.get("id").is_none());
    }
}
