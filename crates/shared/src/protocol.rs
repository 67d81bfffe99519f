use serde::{Deserialize, Serialize};

/// List responses arrive wrapped in a `data` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    /// Human-readable range label, e.g. "Oct 2022 - Present".
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub icon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachOutRequest {
    pub name: String,
    pub email: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReachOutResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_envelope_preserves_order_and_optional_links() {
        let body = r#"{
            "data": [
                {
                    "name": "Chat Application",
                    "description": "Realtime chat",
                    "skills": ["Django", "Redis"],
                    "link": "https://chat.example.com",
                    "repository": "https://github.com/example/chat"
                },
                {
                    "name": "Billing Service",
                    "description": "Invoicing backend",
                    "skills": []
                }
            ]
        }"#;

        let envelope: ListEnvelope<Project> = serde_json::from_str(body).expect("decode");
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].name, "Chat Application");
        assert_eq!(envelope.data[0].skills, vec!["Django", "Redis"]);
        assert_eq!(
            envelope.data[0].link.as_deref(),
            Some("https://chat.example.com")
        );
        assert_eq!(envelope.data[1].name, "Billing Service");
        assert_eq!(envelope.data[1].link, None);
        assert_eq!(envelope.data[1].repository, None);
    }

    #[test]
    fn experience_tolerates_missing_tech_list() {
        let body = r#"{
            "title": "Software Development Engineer",
            "company": "Masters India",
            "date": "Oct 2022 - Present",
            "description": "Enterprise applications",
            "icon_key": "Rocket"
        }"#;

        let experience: Experience = serde_json::from_str(body).expect("decode");
        assert!(experience.tech.is_empty());
        assert_eq!(experience.icon_key, "Rocket");
    }

    #[test]
    fn experience_accepts_unrecognized_icon_key_verbatim() {
        let body = r#"{
            "title": "Consultant",
            "company": "Acme",
            "date": "2021",
            "description": "Advisory work",
            "tech": ["Python"],
            "icon_key": "Unknown"
        }"#;

        let experience: Experience = serde_json::from_str(body).expect("decode");
        assert_eq!(experience.icon_key, "Unknown");
    }

    #[test]
    fn reach_out_request_serializes_expected_fields() {
        let request = ReachOutRequest {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            text: "Hi".to_string(),
        };

        let value = serde_json::to_value(&request).expect("encode");
        assert_eq!(
            value,
            serde_json::json!({"name": "Ann", "email": "a@x.com", "text": "Hi"})
        );
    }
}
