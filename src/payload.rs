//! Randomized request payloads for the write tasks.
//!
//! Builders return `serde_json::Value` so task code can serialize the body
//! with `to_string()`; every invocation draws fresh values and the payload is
//! discarded after the request.

use std::ops::RangeInclusive;

use rand::Rng;
use serde_json::{json, Value};

/// Range for both random suffixes in a news post.
pub const NEWS_VALUE_RANGE: RangeInclusive<u32> = 1..=10_000;
pub const SERVER_IP_RANGE: RangeInclusive<u32> = 1..=99_999_999;
pub const SERVER_PORT_RANGE: RangeInclusive<u32> = 1..=1_000_000;
pub const SERVER_NAME_RANGE: RangeInclusive<u32> = 7..=123_456;
pub const UPDATE_IP_RANGE: RangeInclusive<u32> = 1_000..=9_999;
pub const UPDATE_PORT_RANGE: RangeInclusive<u32> = 1..=100;
/// The backend seeds three server records; updates target one of them.
pub const UPDATE_TARGET_RANGE: RangeInclusive<u32> = 1..=3;

/// `{topic, text}` body for `POST /dreamapp/news/post`.
///
/// The two suffixes are drawn independently, never one value reused.
pub fn news_post(rng: &mut impl Rng) -> Value {
    json!({
        "topic": format!("Random news {}", rng.gen_range(NEWS_VALUE_RANGE)),
        "text": format!("This news item was generated randomly {}", rng.gen_range(NEWS_VALUE_RANGE)),
    })
}

/// `{ip, port, name}` body for `POST /dreamapp/server/post`.
///
/// `name` is numeric in this payload, matching what the backend accepts.
pub fn server_record(rng: &mut impl Rng) -> Value {
    json!({
        "ip": rng.gen_range(SERVER_IP_RANGE),
        "port": rng.gen_range(SERVER_PORT_RANGE),
        "name": rng.gen_range(SERVER_NAME_RANGE),
    })
}

/// `{ip, port}` body for `PUT /dreamapp/server/update/{id}`.
pub fn server_update(rng: &mut impl Rng) -> Value {
    json!({
        "ip": rng.gen_range(UPDATE_IP_RANGE),
        "port": rng.gen_range(UPDATE_PORT_RANGE),
    })
}

/// Id of the pre-seeded server record an update targets.
pub fn update_target(rng: &mut impl Rng) -> u32 {
    rng.gen_range(UPDATE_TARGET_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn trailing_number(text: &str) -> u32 {
        text.rsplit(' ')
            .next()
            .and_then(|suffix| suffix.parse().ok())
            .expect("payload text ends with a number")
    }

    #[test]
    fn news_post_draws_two_independent_values_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut min = u32::MAX;
        let mut max = 0;
        let mut differing = 0;
        for _ in 0..1_000 {
            let payload = news_post(&mut rng);
            let topic = trailing_number(payload["topic"].as_str().expect("topic is a string"));
            let text = trailing_number(payload["text"].as_str().expect("text is a string"));
            for value in [topic, text] {
                assert!(NEWS_VALUE_RANGE.contains(&value));
                min = min.min(value);
                max = max.max(value);
            }
            if topic != text {
                differing += 1;
            }
        }
        // 2000 uniform draws from [1, 10000] cover the tails.
        assert!(min < 50, "min draw was {min}");
        assert!(max > 9_950, "max draw was {max}");
        // Two independent draws almost never collide on every invocation.
        assert!(differing > 900, "only {differing} invocations differed");
    }

    #[test]
    fn server_record_fields_stay_in_range_and_name_is_numeric() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let payload = server_record(&mut rng);
            let ip = payload["ip"].as_u64().expect("ip is numeric") as u32;
            let port = payload["port"].as_u64().expect("port is numeric") as u32;
            let name = payload["name"].as_u64().expect("name is numeric") as u32;
            assert!(SERVER_IP_RANGE.contains(&ip));
            assert!(SERVER_PORT_RANGE.contains(&port));
            assert!(SERVER_NAME_RANGE.contains(&name));
        }
    }

    #[test]
    fn server_update_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1_000 {
            let payload = server_update(&mut rng);
            let ip = payload["ip"].as_u64().expect("ip is numeric") as u32;
            let port = payload["port"].as_u64().expect("port is numeric") as u32;
            assert!(UPDATE_IP_RANGE.contains(&ip));
            assert!(UPDATE_PORT_RANGE.contains(&port));
        }
    }

    #[test]
    fn update_targets_cover_all_seeded_records() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let id = update_target(&mut rng);
            assert!(UPDATE_TARGET_RANGE.contains(&id));
            seen.insert(id);
        }
        assert_eq!(seen.len(), 3, "expected all of {{1, 2, 3}}, saw {seen:?}");
    }
}
