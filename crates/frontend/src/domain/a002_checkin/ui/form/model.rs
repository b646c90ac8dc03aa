use crate::shared::api_utils::{api_url, get_json};
use contracts::domain::a001_room::AvailableRoomsResponse;

pub async fn fetch_available_rooms(api_base: &str) -> Result<AvailableRoomsResponse, String> {
    get_json::<AvailableRoomsResponse>(&api_url(api_base, "/api/available_rooms")).await
}
