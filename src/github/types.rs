use serde::Deserialize;

pub const BIO_PLACEHOLDER: &str = "This user has no bio.";

/// Profile payload from the `/users/{username}` API. Read-only: rendered
/// once and discarded, never mutated locally.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

impl UserProfile {
    /// Display name, falling back to the login when absent or blank.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }

    pub fn bio_text(&self) -> &str {
        match self.bio.as_deref() {
            Some(bio) if !bio.trim().is_empty() => bio,
            _ => BIO_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_payload() {
        let body = r#"{
            "login": "torvalds",
            "id": 1024025,
            "avatar_url": "https://avatars.githubusercontent.com/u/1024025",
            "html_url": "https://github.com/torvalds",
            "name": "Linus Torvalds",
            "bio": null,
            "public_repos": 10,
            "followers": 200000,
            "following": 0
        }"#;
        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.login, "torvalds");
        assert_eq!(profile.display_name(), "Linus Torvalds");
        assert_eq!(profile.public_repos, 10);
    }

    #[test]
    fn missing_name_falls_back_to_login() {
        let body = r#"{
            "login": "octocat",
            "avatar_url": "https://example.test/a.png",
            "html_url": "https://github.com/octocat",
            "public_repos": 8,
            "followers": 4,
            "following": 9
        }"#;
        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.display_name(), "octocat");
        assert_eq!(profile.bio_text(), BIO_PLACEHOLDER);
    }

    #[test]
    fn blank_name_and_bio_fall_back() {
        let body = r#"{
            "login": "octocat",
            "avatar_url": "https://example.test/a.png",
            "html_url": "https://github.com/octocat",
            "name": "",
            "bio": "  ",
            "public_repos": 0,
            "followers": 0,
            "following": 0
        }"#;
        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.display_name(), "octocat");
        assert_eq!(profile.bio_text(), BIO_PLACEHOLDER);
    }
}
