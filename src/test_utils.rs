use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[macro_export]
/// Creates a mock API server which responds with a predefined status
/// and body when handling any GET request
macro_rules! mock_server {
    ($status:expr, $body:expr) => {{
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new($status).set_body_string($body))
            .mount(&mock_server)
            .await;
        mock_server
    }};
}

/// Start a mock API server answering GETs on `endpoint` with the given
/// JSON body and status 200.
pub(crate) async fn mock_api(endpoint: &str, body: Value) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;
    mock_server
}

/// Wrap a payload in the API's standard success envelope.
pub(crate) fn enveloped(response: Value) -> Value {
    json!({ "error": false, "response": response })
}

/// Minimal payloads matching what the live API returns, for decoding
/// tests.
pub(crate) mod sample {
    use serde_json::{json, Value};

    pub(crate) fn server() -> Value {
        json!({
            "id": 4,
            "game": "ETS2",
            "ip": "178.32.255.39",
            "port": 42850,
            "name": "Simulation 1",
            "shortname": "SIM1",
            "idprefix": null,
            "online": true,
            "players": 3800,
            "queue": 217,
            "maxplayers": 4500,
            "mapid": 1,
            "displayorder": 1,
            "speedlimiter": 1,
            "collisions": true,
            "carsforplayers": true,
            "policecarsforplayers": false,
            "afkenabled": true,
            "event": false,
            "specialEvent": false,
            "promods": false,
            "syncdelay": 0
        })
    }

    pub(crate) fn player() -> Value {
        json!({
            "id": 28159,
            "name": "Digital",
            "avatar": "https://static.truckersmp.com/avatars/28159.png",
            "smallAvatar": "https://static.truckersmp.com/avatars/small/28159.png",
            "joinDate": "2014-08-14 15:15:44",
            "steamID64": 76_561_198_082_185_073_u64,
            "steamID": "76561198082185073",
            "discordSnowflake": null,
            "displayVTCHistory": true,
            "groupName": "Player",
            "groupColor": null,
            "groupID": 1,
            "banned": false,
            "bannedUntil": null,
            "bansCount": 0,
            "displayBans": true,
            "patreon": {
                "isPatron": false,
                "active": null,
                "color": null,
                "tierId": null,
                "currentPledge": null,
                "lifetimePledge": null,
                "nextPledge": null,
                "hidden": null
            },
            "permissions": {
                "isStaff": false,
                "isManagement": false,
                "isGameAdmin": false,
                "showDetailedOnWebMaps": false
            },
            "vtc": {
                "id": 1,
                "name": "TruckersMP Events Team",
                "tag": "TMP-E",
                "inVTC": true,
                "memberID": 52
            }
        })
    }

    pub(crate) fn ban() -> Value {
        json!({
            "expiration": null,
            "timeAdded": "2020-05-01 20:23:45",
            "active": false,
            "reason": "Reckless driving",
            "adminName": "Admin",
            "adminID": 42
        })
    }

    pub(crate) fn news_post() -> Value {
        json!({
            "id": 7,
            "title": "Convoy announcement",
            "content_summary": "We are hosting a convoy",
            "content": null,
            "author_id": 28159,
            "author": "Digital",
            "pinned": true,
            "updated_at": "2021-02-01 18:00:00",
            "published_at": "2021-02-01 17:00:00"
        })
    }

    pub(crate) fn role(id: u64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "order": id,
            "owner": id == 1,
            "created_at": "2020-10-01 12:00:00",
            "updated_at": "2020-10-01 12:00:00"
        })
    }

    pub(crate) fn version() -> Value {
        json!({
            "name": "1.2.3.4.5",
            "numeric": "12345",
            "stage": "Alpha",
            "time": "2021-03-02 12:00:00",
            "supported_game_version": "1.39.4.5",
            "supported_ats_game_version": "1.39.4.3",
            "ets2mp_checksum": { "dll": "a1b2c3", "adb": "d4e5f6" },
            "atsmp_checksum": { "dll": "g7h8i9", "adb": "j0k1l2" }
        })
    }
}
