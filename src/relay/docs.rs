//! Static documentation page served at `/`.

use axum::body::Body;
use axum::http::header::{HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use axum::response::Response;

pub const CONTENT_TYPE_HTML: &str = "text/html;charset=UTF-8";
pub const CACHE_POLICY: &str = "public, max-age=3600";

pub const DOC_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Telegram Bot API Proxy</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        h1 { color: #0088cc; }
        pre {
            background: #f5f5f5;
            padding: 15px;
            border-radius: 5px;
            overflow-x: auto;
        }
        .note {
            background: #fff3cd;
            border-left: 4px solid #ffc107;
            padding: 15px;
            margin: 20px 0;
        }
    </style>
</head>
<body>
    <h1>Telegram Bot API Proxy</h1>
    <p>This service relays calls to the Telegram Bot API and receives webhook updates from Telegram.</p>

    <h2>Bot API</h2>
    <p>Use this host in place of <code>api.telegram.org</code>. Method, headers, body and query string are passed through unchanged.</p>
    <pre>https://{PROXY_HOST}/bot{BOT_TOKEN}/sendMessage?chat_id={CHAT_ID}&amp;text=hello</pre>

    <h2>Webhook</h2>
    <p>Register this endpoint with <code>setWebhook</code>. Updates are forwarded to the configured backend.</p>
    <pre>https://{PROXY_HOST}/webhook</pre>

    <div class="note">
        Webhook requests are always acknowledged with <code>200 OK</code>, even when the backend is unreachable.
    </div>
</body>
</html>
"#;

/// The documentation page response.
pub fn page() -> Response {
    let mut response = Response::new(Body::from(DOC_HTML));
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_HTML));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_POLICY));
    response
}
