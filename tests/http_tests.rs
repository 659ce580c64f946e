use mockito::Matcher;
use telegram_api_rs::configuration::Configuration;
use telegram_api_rs::request::{ChatAction, Reply, Request};
use telegram_api_rs::types::{ChatKind, ReplyKeyboardMarkup};
use telegram_api_rs::{Error, TelegramService};

const TOKEN: &str = "123456:test-token";

fn service_for(server: &mockito::ServerGuard) -> TelegramService {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut config = Configuration::new();
    config
        .set_base_url(format!("{}/bot", server.url()))
        .set_log_traffic(true);
    TelegramService::with_configuration(TOKEN, &config).unwrap()
}

fn path(endpoint: &str) -> String {
    format!("/bot{}/{}", TOKEN, endpoint)
}

#[test]
fn test_get_me() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", path("getMe").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true,"result":{"id":123456,"is_bot":true,"first_name":"Test","username":"test_bot"}}"#)
        .create();

    let me = service_for(&server).get_me().execute().unwrap();

    mock.assert();
    assert_eq!(me.id, 123456);
    assert!(me.is_bot);
    assert_eq!(me.username.as_deref(), Some("test_bot"));
}

#[test]
fn test_send_message_sends_parameters_in_the_query() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", path("sendMessage").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("chat_id".into(), "42".into()),
            Matcher::UrlEncoded("text".into(), "hello & goodbye".into()),
            Matcher::UrlEncoded("disable_web_page_preview".into(), "false".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"ok":true,"result":{"message_id":1,"date":1441645532,
                "chat":{"id":42,"type":"private","first_name":"Ada"},"text":"hello & goodbye"}}"#,
        )
        .create();

    let message = service_for(&server)
        .send_message()
        .chat(42)
        .text("hello & goodbye")
        .execute()
        .unwrap();

    mock.assert();
    assert_eq!(message.chat.kind, ChatKind::Private);
    assert_eq!(message.text.as_deref(), Some("hello & goodbye"));
}

#[test]
fn test_send_sticker_encodes_reply_markup() {
    let mut server = mockito::Server::new();
    let keyboard = ReplyKeyboardMarkup::new(vec![vec!["a", "b"]]).auto_hide(true);
    let mock = server
        .mock("POST", path("sendSticker").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("chat_id".into(), "@channel".into()),
            Matcher::UrlEncoded("sticker".into(), "BQADBAADsgUAApv7sgAB".into()),
            Matcher::UrlEncoded("reply_to_message_id".into(), "9".into()),
            Matcher::UrlEncoded(
                "reply_markup".into(),
                r#"{"keyboard":[["a","b"]],"resize_keyboard":false,"one_time_keyboard":true,"selective":false}"#
                    .into(),
            ),
        ]))
        .with_status(200)
        .with_body(
            r#"{"ok":true,"result":{"message_id":10,"date":1,
                "chat":{"id":-100,"type":"channel","title":"c"},
                "sticker":{"file_id":"BQADBAADsgUAApv7sgAB","width":512,"height":512,"thumb":{}}}}"#,
        )
        .create();

    let message = service_for(&server)
        .send_sticker()
        .chat("@channel")
        .sticker("BQADBAADsgUAApv7sgAB")
        .reply_to(9)
        .reply_keyboard_markup(keyboard)
        .unwrap()
        .execute()
        .unwrap();

    mock.assert();
    let sticker = message.sticker.unwrap();
    assert_eq!(sticker.width, 512);
    assert!(sticker.thumb.is_none());
}

#[test]
fn test_get_updates_omits_unset_parameters() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", path("getUpdates").as_str())
        .match_query(Matcher::Regex("^offset=5&timeout=1$".into()))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":[{"update_id":5}]}"#)
        .create();

    let updates = service_for(&server)
        .get_updates()
        .offset(5)
        .timeout(1)
        .execute()
        .unwrap();

    mock.assert();
    assert_eq!(updates.len(), 1);
    assert!(updates[0].message.is_none());
}

#[test]
fn test_error_envelope_on_http_error_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", path("sendChatAction").as_str())
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#)
        .create();

    let err = service_for(&server)
        .send_chat_action()
        .chat(1)
        .action(ChatAction::UploadPhoto)
        .execute()
        .unwrap_err();

    mock.assert();
    match err {
        Error::RemoteApi {
            description,
            error_code,
        } => {
            assert_eq!(description.as_deref(), Some("Bad Request: chat not found"));
            assert_eq!(error_code, Some(400));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_empty_body_is_a_missing_envelope() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", path("setWebhook").as_str())
        .match_query(Matcher::UrlEncoded(
            "url".into(),
            "https://example.com/hook".into(),
        ))
        .with_status(200)
        .with_body("")
        .create();

    let err = service_for(&server)
        .set_webhook()
        .url("https://example.com/hook")
        .execute()
        .unwrap_err();

    mock.assert();
    assert!(err.is_remote_api());
    assert_eq!(err.description(), None);
}

#[test]
fn test_malformed_body_is_a_json_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", path("getMe").as_str())
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create();

    let err = service_for(&server).get_me().execute().unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_unreachable_server_is_an_http_error() {
    let mut config = Configuration::new();
    config.set_base_url("http://127.0.0.1:1/bot");
    let service = TelegramService::with_configuration(TOKEN, &config).unwrap();

    let err = service.get_me().execute().unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    // the token is part of the URL and must not leak into error messages
    assert!(!err.to_string().contains(TOKEN));
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let mut config = Configuration::new();
    config.set_base_url("api.telegram.org/bot");
    let err = TelegramService::with_configuration(TOKEN, &config).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}
