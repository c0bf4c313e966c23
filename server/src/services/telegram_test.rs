use super::*;

fn config() -> TelegramConfig {
    TelegramConfig { bot_token: "123:abc".into(), chat_id: "-100200".into(), api_base: "https://api.telegram.org".into() }
}

#[test]
fn method_url_embeds_token() {
    let client = TelegramClient::new(config());
    assert_eq!(client.method_url("sendMessage"), "https://api.telegram.org/bot123:abc/sendMessage");
}

#[test]
fn prepare_message_trims() {
    assert_eq!(prepare_message("  hello studio \n"), Ok("hello studio"));
}

#[test]
fn prepare_message_rejects_blank() {
    assert_eq!(prepare_message(""), Err(NotifyError::Empty));
    assert_eq!(prepare_message(" \n\t "), Err(NotifyError::Empty));
}

#[test]
fn prepare_message_enforces_limit() {
    let at_limit = "x".repeat(MAX_MESSAGE_CHARS);
    assert!(prepare_message(&at_limit).is_ok());
    let over = "x".repeat(MAX_MESSAGE_CHARS + 1);
    assert_eq!(prepare_message(&over), Err(NotifyError::TooLong));
}

#[test]
fn send_message_request_shape() {
    let body = SendMessageRequest { chat_id: "-100200", text: "hi", disable_web_page_preview: true };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "chat_id": "-100200", "text": "hi", "disable_web_page_preview": true }));
}

#[test]
fn envelope_ok_is_success() {
    let payload: TelegramResponse =
        serde_json::from_str(r#"{"ok":true,"result":{"message_id":7}}"#).unwrap();
    assert_eq!(check_envelope(payload), Ok(()));
}

#[test]
fn envelope_error_carries_description() {
    let payload: TelegramResponse =
        serde_json::from_str(r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#).unwrap();
    assert_eq!(check_envelope(payload), Err(NotifyError::Api("Bad Request: chat not found".into())));
}

#[test]
fn envelope_error_without_description_has_fallback() {
    let payload: TelegramResponse = serde_json::from_str(r#"{"ok":false}"#).unwrap();
    assert_eq!(check_envelope(payload), Err(NotifyError::Api("Telegram API error".into())));
}
