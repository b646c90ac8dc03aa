use crate::shared::api_utils::{api_url, get_json};
use contracts::domain::a001_room::RoomStatusMap;

pub async fn fetch_room_status(api_base: &str) -> Result<RoomStatusMap, String> {
    get_json::<RoomStatusMap>(&api_url(api_base, "/api/room_status")).await
}
