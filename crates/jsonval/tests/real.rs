//! Tests against a realistic API-response document.

use jsonval::{parse, Null, Object, Value};

static TIMELINE: &str = r#"
[
    {
        "id": 240558470661799936,
        "id_str": "240558470661799936",
        "text": "just another test",
        "coordinates": null,
        "retweeted": false,
        "entities": {
            "urls": [],
            "user_mentions": [],
            "hashtags": []
        },
        "user": {
            "name": "OAuth Dancer",
            "screen_name": "oauth_dancer",
            "verified": false,
            "followers_count": 28,
            "profile_background_tile": true,
            "url": "http:\/\/bit.ly\/oauth-dancer"
        }
    },
    {
        "id": 240556426106372096,
        "id_str": "240556426106372096",
        "text": "écoutez, un café ☕",
        "coordinates": null,
        "retweeted": false,
        "in_reply_to_user_id": null,
        "entities": {
            "urls": [{"url": "http:\/\/t.co\/bfj7zkDJ"}],
            "user_mentions": [],
            "hashtags": []
        },
        "user": {
            "name": "Rappé",
            "screen_name": "rappeur",
            "verified": true,
            "followers_count": 106,
            "profile_background_tile": false
        }
    }
]
"#;

#[test]
fn timeline_structure() {
    let v = parse(TIMELINE).unwrap();

    assert!(v.is::<Vec<Value>>());
    assert!(!v.is::<f64>());
    assert!(!v.is::<Null>());
    assert!(!v.is::<String>());
    assert!(!v.is::<Object>());

    let arr = v.cast::<Vec<Value>>().unwrap();
    assert_eq!(arr.len(), 2);
    assert!(arr[0].is::<Object>());
    assert!(arr[1].is::<Object>());
}

#[test]
fn first_status() {
    let v = parse(TIMELINE).unwrap();
    let first = &v[0];

    assert!(first.get("coordinates").is_some());
    assert!(first["coordinates"].is::<Null>());
    assert!(first["text"].is::<String>());
    assert!(first["user"].is::<Object>());
    assert_eq!(
        first["id_str"].cast_or(String::from("hello")),
        "240558470661799936"
    );
    // Exactly representable in f64 despite exceeding 2^53.
    assert_eq!(first["id"].cast_or(10_u64), 240_558_470_661_799_936);

    let user = &first["user"];
    assert_eq!(user["name"].cast::<String>().unwrap(), "OAuth Dancer");
    assert!(user["profile_background_tile"].cast_or(false));
    assert!(user["is_translator"].cast_or(true));
    assert_eq!(
        user["url"].cast_or(String::from("hello")),
        "http://bit.ly/oauth-dancer"
    );
    assert!(user["verified"].is::<bool>());
    assert!(!user["verified"].cast::<bool>().unwrap());
}

#[test]
fn second_status() {
    let v = parse(TIMELINE).unwrap();
    let second = &v[1];

    assert!(second.get("entities").is_some());
    assert!(second["entities"].is::<Object>());
    assert_eq!(second["dne"].cast_or(String::from("hello")), "hello");
    assert!(!second["retweeted"].cast_or(true));
    assert!(second.get("in_reply_to_user_id").is_some());
    assert!(second["in_reply_to_user_id"].is::<Null>());
    assert_eq!(second["text"].cast::<String>().unwrap(), "écoutez, un café ☕");

    let entities = &second["entities"];
    assert!(entities["urls"].is::<Vec<Value>>());
    assert!(entities["user_mentions"].is::<Vec<Value>>());
    assert_eq!(
        entities["urls"][0]["url"].cast::<String>().unwrap(),
        "http://t.co/bfj7zkDJ"
    );
}
