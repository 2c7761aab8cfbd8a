use serde::{Deserialize, Serialize};

/// A record from the remote demo API. Unknown fields in the payload are
/// ignored; missing text fields decode to empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RemotePost {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_remote_payload() {
        let json = r#"[
            {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
            {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"}
        ]"#;

        let posts: Vec<RemotePost> = serde_json::from_str(json).expect("valid payload");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].title, "sunt aut facere");
        assert_eq!(posts[1].body, "est rerum tempore");
    }

    #[test]
    fn missing_text_fields_default_to_empty() {
        let post: RemotePost = serde_json::from_str(r#"{"id": 5}"#).expect("valid payload");
        assert_eq!(post.title, "");
        assert_eq!(post.body, "");
    }
}
