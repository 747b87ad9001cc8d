use serde::Deserialize;
use serde_json::Value;

use crate::models::{NewTalker, Talk};
use crate::utils::validation::{
    check_age, check_name, check_rate, check_talk, check_watched_at, ValidatePayload,
};

/// Raw `POST /talker` body.
#[derive(Debug, Deserialize)]
pub struct CreateTalkerRequest {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub talk: Option<Value>,
}

impl ValidatePayload for NewTalker {
    type Raw = CreateTalkerRequest;

    fn validate(raw: CreateTalkerRequest) -> Result<Self, &'static str> {
        let name = check_name(raw.name.as_ref())?;
        let age = check_age(raw.age.as_ref())?;
        let talk = check_talk(raw.talk.as_ref())?;
        let watched_at = check_watched_at(talk.get("watchedAt"))?;
        let rate = check_rate(talk.get("rate"))?;

        Ok(NewTalker {
            name,
            age,
            talk: Talk { watched_at, rate },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::messages;
    use serde_json::json;

    fn validate(body: Value) -> Result<NewTalker, &'static str> {
        NewTalker::validate(serde_json::from_value(body).unwrap())
    }

    #[test]
    fn accepts_a_complete_talker() {
        let talker = validate(json!({
            "name": "Danielle Santos",
            "age": 56,
            "talk": { "watchedAt": "22/10/2019", "rate": 5 }
        }))
        .unwrap();

        assert_eq!(talker.name, "Danielle Santos");
        assert_eq!(talker.age, 56);
        assert_eq!(talker.talk.watched_at, "22/10/2019");
        assert_eq!(talker.talk.rate, 5);
    }

    #[test]
    fn reports_the_first_failing_field() {
        // Every field is wrong; name comes first.
        let err = validate(json!({
            "name": "Jo",
            "age": 10,
            "talk": { "watchedAt": "x", "rate": 9 }
        }))
        .unwrap_err();
        assert_eq!(err, messages::NAME_LENGTH);

        let err = validate(json!({ "name": "Joana", "age": 17 })).unwrap_err();
        assert_eq!(err, messages::AGE_RANGE);

        let err = validate(json!({ "name": "Joana", "age": 30 })).unwrap_err();
        assert_eq!(err, messages::TALK_REQUIRED);

        let err = validate(json!({
            "name": "Joana",
            "age": 30,
            "talk": { "rate": 9 }
        }))
        .unwrap_err();
        assert_eq!(err, messages::WATCHED_AT_REQUIRED);

        let err = validate(json!({
            "name": "Joana",
            "age": 30,
            "talk": { "watchedAt": "01/02/2023" }
        }))
        .unwrap_err();
        assert_eq!(err, messages::RATE_REQUIRED);
    }

    #[test]
    fn non_object_talk_has_no_watched_at() {
        let err = validate(json!({ "name": "Joana", "age": 30, "talk": "great" })).unwrap_err();
        assert_eq!(err, messages::WATCHED_AT_REQUIRED);
    }
}
