use serde::{Deserialize, Serialize};

/// A speaker record as persisted in the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talker {
    pub id: u64,
    pub name: String,
    pub age: u64,
    pub talk: Talk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talk {
    /// `dd/mm/yyyy`
    pub watched_at: String,
    pub rate: u8,
}

/// A talker that has passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTalker {
    pub name: String,
    pub age: u64,
    pub talk: Talk,
}

impl NewTalker {
    pub fn with_id(self, id: u64) -> Talker {
        Talker {
            id,
            name: self.name,
            age: self.age,
            talk: self.talk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uses_camel_case_on_the_wire() {
        let talker = NewTalker {
            name: "Henrique Albuquerque".to_string(),
            age: 62,
            talk: Talk {
                watched_at: "23/10/2020".to_string(),
                rate: 5,
            },
        }
        .with_id(1);

        let value = serde_json::to_value(&talker).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Henrique Albuquerque",
                "age": 62,
                "talk": { "watchedAt": "23/10/2020", "rate": 5 }
            })
        );
    }
}
