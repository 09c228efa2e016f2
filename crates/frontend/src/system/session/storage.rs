use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const USER_ID_KEY: &str = "session_user_id";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|value| !value.is_empty())
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

/// Get the id of the signed-in user from localStorage
pub fn get_user_id() -> Option<String> {
    read(USER_ID_KEY)
}
